use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid hex color '{0}': expected #RRGGBB or #RGB")]
    InvalidHexColor(String),

    #[error("Color pool is empty")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, Error>;
