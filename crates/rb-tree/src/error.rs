use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RbTreeError {
    #[error("key not in tree")]
    KeyNotFound,
    /// Reported by the invariant checker only.
    #[error("red-black invariant violated: {0}")]
    Invariant(&'static str),
}
