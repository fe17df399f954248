use crate::color::Lab;
use crate::error::{Error, Result};

/// Index of the pool color perceptually closest to `reference` under the
/// CIE94 metric.
pub fn nearest(pool: &[Lab], reference: &Lab) -> Result<usize> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    let index = pool
        .iter()
        .map(|candidate| reference.distance_to(candidate))
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
        .unwrap();

    log::debug!("Nearest color to {} is pool[{}]", reference, index);
    Ok(index)
}

/// Index of the pool color with the greatest minimum distance to the
/// colors already `taken`. Used to pick label colors that stay
/// distinguishable from the ones on screen.
///
/// With nothing taken yet, the first pool color wins by default.
pub fn most_distinct(pool: &[Lab], taken: &[Lab]) -> Result<usize> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }
    if taken.is_empty() {
        return Ok(0);
    }

    let index = pool
        .iter()
        .map(|candidate| {
            taken
                .iter()
                .map(|existing| candidate.distance_to(existing))
                .fold(f32::INFINITY, f32::min)
        })
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
        .unwrap();

    log::debug!(
        "Most distinct of {} pool colors against {} taken: pool[{}]",
        pool.len(),
        taken.len(),
        index
    );
    Ok(index)
}
