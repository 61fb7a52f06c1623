use thiserror::Error;

use crate::gvk::ParseGroupVersionError;

/// Possible errors when working with api identities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A group version string had more than one `/`
    #[error(transparent)]
    MalformedIdentity(#[from] ParseGroupVersionError),
}
