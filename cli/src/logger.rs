use anyhow::Result;

pub fn init() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;
    Ok(())
}
