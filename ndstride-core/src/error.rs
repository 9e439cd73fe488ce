use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced at the descriptor boundary.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The descriptor exposes neither explicit strides nor a shape, so
    /// there is nothing to retrieve and nothing to derive from.
    #[error("array descriptor exposes neither strides nor a shape")]
    MissingLayout,
    /// An order tag did not match either canonical spelling.
    #[error("unknown memory layout order: `{0}`")]
    UnknownOrder(String),
}
