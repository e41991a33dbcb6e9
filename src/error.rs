use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the descriptor itself.
///
/// Failures of the remote side are not listed here: they keep the error type
/// of the [`FtpConnection`](crate::FtpConnection) that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was absent. Carries the argument name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}
