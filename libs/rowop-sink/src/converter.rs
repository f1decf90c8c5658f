use std::fmt;
use std::sync::Arc;

use rowop_api::{OperationType, RowWithOp};

use crate::config::SinkConfig;
use crate::error::SinkError;

/// Changelog flavor of an upstream row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Insert,
    /// Old image of an updated row.
    UpdateBefore,
    /// New image of an updated row.
    UpdateAfter,
    Delete,
}

impl RowKind {
    pub const ALL: [RowKind; 4] = [
        RowKind::Insert,
        RowKind::UpdateBefore,
        RowKind::UpdateAfter,
        RowKind::Delete,
    ];

    pub fn short_string(&self) -> &'static str {
        match self {
            RowKind::Insert => "+I",
            RowKind::UpdateBefore => "-U",
            RowKind::UpdateAfter => "+U",
            RowKind::Delete => "-D",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_string())
    }
}

/// Turns row kinds into operations for one sink table.
///
/// Primary-key tables:
/// - `+I`, `+U` → `UPSERT`
/// - `-U` → `IGNORE` (the following `+U` carries the new image)
/// - `-D` → `DELETE`, or `IGNORE` with `ignore_delete`
///
/// Append-only tables:
/// - `+I` → `APPEND`
/// - `-U`, `-D` → `IGNORE` with `ignore_delete`, rejected otherwise
/// - `+U` → rejected
#[derive(Debug, Clone, Copy)]
pub struct OperationMapper {
    config: SinkConfig,
}

impl OperationMapper {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    pub fn map(&self, kind: RowKind) -> Result<OperationType, SinkError> {
        let retraction = if self.config.ignore_delete {
            Some(OperationType::Ignore)
        } else {
            None
        };

        let op = if self.config.append_only {
            match kind {
                RowKind::Insert => Some(OperationType::Append),
                RowKind::UpdateBefore | RowKind::Delete => retraction,
                RowKind::UpdateAfter => None,
            }
        } else {
            match kind {
                RowKind::Insert | RowKind::UpdateAfter => Some(OperationType::Upsert),
                RowKind::UpdateBefore => Some(OperationType::Ignore),
                RowKind::Delete => retraction.or(Some(OperationType::Delete)),
            }
        };

        op.ok_or(SinkError::Unsupported {
            kind,
            table: self.config.table_kind(),
        })
    }

    /// Map `kind` and pair the result with `row`.
    pub fn wrap<R>(&self, kind: RowKind, row: Arc<R>) -> Result<RowWithOp<R>, SinkError> {
        Ok(RowWithOp::new(row, self.map(kind)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(append_only: bool, ignore_delete: bool) -> OperationMapper {
        OperationMapper::new(SinkConfig {
            append_only,
            ignore_delete,
        })
    }

    #[test]
    fn primary_key_table() {
        let m = mapper(false, false);
        assert_eq!(m.map(RowKind::Insert).unwrap(), OperationType::Upsert);
        assert_eq!(m.map(RowKind::UpdateAfter).unwrap(), OperationType::Upsert);
        assert_eq!(m.map(RowKind::UpdateBefore).unwrap(), OperationType::Ignore);
        assert_eq!(m.map(RowKind::Delete).unwrap(), OperationType::Delete);
    }

    #[test]
    fn primary_key_table_ignoring_deletes() {
        let m = mapper(false, true);
        assert_eq!(m.map(RowKind::Insert).unwrap(), OperationType::Upsert);
        assert_eq!(m.map(RowKind::UpdateBefore).unwrap(), OperationType::Ignore);
        assert_eq!(m.map(RowKind::Delete).unwrap(), OperationType::Ignore);
    }

    #[test]
    fn append_only_table() {
        let m = mapper(true, false);
        assert_eq!(m.map(RowKind::Insert).unwrap(), OperationType::Append);
        for kind in [RowKind::UpdateBefore, RowKind::UpdateAfter, RowKind::Delete] {
            let err = m.map(kind).unwrap_err();
            assert!(matches!(
                err,
                SinkError::Unsupported { kind: k, table: "append-only" } if k == kind
            ));
        }
    }

    #[test]
    fn append_only_table_ignoring_deletes() {
        let m = mapper(true, true);
        assert_eq!(m.map(RowKind::Insert).unwrap(), OperationType::Append);
        assert_eq!(m.map(RowKind::UpdateBefore).unwrap(), OperationType::Ignore);
        assert_eq!(m.map(RowKind::Delete).unwrap(), OperationType::Ignore);
        assert!(m.map(RowKind::UpdateAfter).is_err());
    }

    #[test]
    fn append_only_never_produces_upsert_or_delete() {
        for ignore_delete in [false, true] {
            let m = mapper(true, ignore_delete);
            for kind in RowKind::ALL {
                if let Ok(op) = m.map(kind) {
                    assert!(matches!(op, OperationType::Append | OperationType::Ignore));
                }
            }
        }
    }

    #[test]
    fn wrap_keeps_the_row_handle() {
        let row = Arc::new(vec![1_i64, 2, 3]);
        let record = mapper(false, false).wrap(RowKind::Delete, Arc::clone(&row)).unwrap();
        assert!(Arc::ptr_eq(record.row(), &row));
        assert_eq!(record.operation_type(), OperationType::Delete);

        let err = mapper(true, false).wrap(RowKind::Delete, row).unwrap_err();
        assert_eq!(err.to_string(), "row kind -D is not supported by append-only table");
    }
}
