use rowop_api::error::RowOpError;

use crate::converter::RowKind;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("config error: {0}")]
    Config(String),

    #[error("record error: {0}")]
    Record(#[from] RowOpError),

    #[error("row kind {kind} is not supported by {table} table")]
    Unsupported { kind: RowKind, table: &'static str },

    #[error("writer error: {0}")]
    Writer(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SinkError {
    pub fn writer(msg: impl Into<String>) -> Self {
        Self::Writer(msg.into())
    }

    /// Add context to the error.
    ///
    /// For `Record` variant, context is added to the inner `RowOpError`.
    /// For message variants, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            SinkError::Record(e) => SinkError::Record(e.with_context(ctx)),
            SinkError::Config(msg) => SinkError::Config(format!("{ctx}: {msg}")),
            SinkError::Writer(msg) => SinkError::Writer(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_reaches_inner_record_error() {
        let err = SinkError::from(RowOpError::invalid_argument("row cannot be null")).with_context("orders");
        assert_eq!(err.to_string(), "record error: invalid argument: orders: row cannot be null");
    }

    #[test]
    fn unsupported_names_kind_and_table() {
        let err = SinkError::Unsupported {
            kind: RowKind::UpdateAfter,
            table: "append-only",
        };
        assert_eq!(err.to_string(), "row kind +U is not supported by append-only table");
        // Context does not apply to structured variants.
        assert_eq!(err.with_context("x").to_string(), "row kind +U is not supported by append-only table");
    }
}
