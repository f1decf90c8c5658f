use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rowop_api::{OperationType, RowWithOp};

use crate::error::SinkError;

pub type WriteFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SinkError>> + Send + 'a>>;

/// Table writer. One method per operation that touches the table.
///
/// How an upsert or delete lands in storage is the writer's business; the
/// sink only decides which method to call.
pub trait ChangeWriter<R>: Send + Sync {
    fn append(&self, row: Arc<R>) -> WriteFuture<'_>;

    fn upsert(&self, row: Arc<R>) -> WriteFuture<'_>;

    fn delete(&self, row: Arc<R>) -> WriteFuture<'_>;
}

/// Route `record` to the writer method for its operation.
///
/// Returns the operation that was handled. `IGNORE` reaches no writer method.
pub async fn dispatch<R, W>(writer: &W, record: RowWithOp<R>) -> Result<OperationType, SinkError>
where
    W: ChangeWriter<R> + ?Sized,
{
    let (row, op) = record.into_parts();
    tracing::debug!(op = %op, "dispatching record");
    match op {
        OperationType::Append => writer.append(row).await?,
        OperationType::Upsert => writer.upsert(row).await?,
        OperationType::Delete => writer.delete(row).await?,
        OperationType::Ignore => tracing::debug!("ignoring record"),
    }
    Ok(op)
}
