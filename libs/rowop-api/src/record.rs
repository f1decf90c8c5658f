use std::sync::Arc;

use crate::error::RowOpError;
use crate::operation::OperationType;

/// A row paired with the operation a downstream writer should apply to it.
///
/// The row is held through an `Arc`: the record never copies or mutates it,
/// and cloning the record only bumps the reference count. Both fields are
/// fixed at construction.
///
/// Two records are equal when their rows are equal by the row's own
/// `PartialEq` and their operation tags are identical. `Hash` combines the
/// row hash and the tag hash, so records work as map keys and set elements.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RowWithOp<R> {
    row: Arc<R>,
    op_type: OperationType,
}

impl<R> RowWithOp<R> {
    pub fn new(row: Arc<R>, op_type: OperationType) -> Self {
        Self { row, op_type }
    }

    /// Build a record from inputs that may be absent.
    ///
    /// Fails with `InvalidArgument` when either input is `None`; the row is
    /// checked first. No partially built record is ever returned.
    pub fn try_new(row: Option<Arc<R>>, op_type: Option<OperationType>) -> Result<Self, RowOpError> {
        let row = row.ok_or_else(|| RowOpError::invalid_argument("row cannot be null"))?;
        let op_type = op_type.ok_or_else(|| RowOpError::invalid_argument("opType cannot be null"))?;
        Ok(Self::new(row, op_type))
    }

    /// The exact row handle passed at construction.
    pub fn row(&self) -> &Arc<R> {
        &self.row
    }

    pub fn operation_type(&self) -> OperationType {
        self.op_type
    }

    pub fn into_parts(self) -> (Arc<R>, OperationType) {
        (self.row, self.op_type)
    }
}

impl<R> Clone for RowWithOp<R> {
    fn clone(&self) -> Self {
        Self {
            row: Arc::clone(&self.row),
            op_type: self.op_type,
        }
    }
}

/// An absent record never equals a present one.
impl<R: PartialEq> PartialEq<Option<RowWithOp<R>>> for RowWithOp<R> {
    fn eq(&self, other: &Option<RowWithOp<R>>) -> bool {
        other.as_ref().is_some_and(|other| self == other)
    }
}
