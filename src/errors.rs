use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqListError {
    /// A well-typed index outside the operation's valid domain.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
}
