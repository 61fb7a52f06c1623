//! Error handling in [`apimeta`][crate]
use thiserror::Error;

/// Possible errors when working with [`apimeta`][crate]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An api identity could not be parsed
    #[error("IdentityError: {0}")]
    Identity(#[from] crate::core::Error),

    /// A global flag was requested that the registry does not hold
    #[error("failed to find flag in global flagset: {0}")]
    FlagNotFound(String),
}

impl From<crate::core::ParseGroupVersionError> for Error {
    fn from(err: crate::core::ParseGroupVersionError) -> Self {
        Error::Identity(err.into())
    }
}

/// Convient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
