/// Error returned when a record cannot be built.
///
/// The only failure of the core types: a required input was absent or
/// unparseable. It signals a broken caller contract, not a transient
/// condition, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowOpError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RowOpError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Add context to the error.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            RowOpError::InvalidArgument(msg) => RowOpError::InvalidArgument(format!("{ctx}: {msg}")),
        }
    }
}
