use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base32 error: {0}")]
    Base32(#[from] base32::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
