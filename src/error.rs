use thiserror::Error;

/// Errors raised by sequence combinators.
///
/// Configuration errors are returned by constructors before any element is
/// produced. [`SeqError::SourceTooShort`] is the only one reported during
/// iteration, as an element of [`TakeStrict`](crate::combinators::TakeStrict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A partition was configured with a step of zero.
    #[error("partition step must be at least 1")]
    ZeroStep,

    /// A strict truncation ran out of elements.
    #[error("expected {expected} elements but the source ended after {got}")]
    SourceTooShort { expected: usize, got: usize },
}
