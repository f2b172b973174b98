use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// # Summary
///
/// `Error` is the single error kind the list can produce: a node could not
/// be allocated. The operation that triggered it leaves its list in the
/// prior valid state, so the caller may report the failure and carry on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("failed to allocate a list node")]
    AllocationFailure,
}

impl Error {
    pub fn err<T>(self) -> Result<T> {
        Err(self)
    }
}
