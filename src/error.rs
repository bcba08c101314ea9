use thiserror::Error;

/// Errors from reading and writing name files.
///
/// The string transforms themselves never fail; only the file-facing layer
/// returns this.
#[derive(Debug, Error)]
pub enum Error
{
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

pub type Result<T> = std::result::Result<T, Error>;
