use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

use rowop_api::{OperationType, RowWithOp};

use crate::error::SinkError;
use crate::writer::{ChangeWriter, dispatch};

/// Counters of handled records, one per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    pub appended: u64,
    pub upserted: u64,
    pub deleted: u64,
    pub ignored: u64,
}

impl SinkStats {
    pub fn total(&self) -> u64 {
        self.appended + self.upserted + self.deleted + self.ignored
    }
}

#[derive(Debug, Default)]
struct Counters {
    appended: AtomicU64,
    upserted: AtomicU64,
    deleted: AtomicU64,
    ignored: AtomicU64,
}

impl Counters {
    fn bump(&self, op: OperationType) {
        let counter = match op {
            OperationType::Append => &self.appended,
            OperationType::Upsert => &self.upserted,
            OperationType::Delete => &self.deleted,
            OperationType::Ignore => &self.ignored,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> SinkStats {
        SinkStats {
            appended: self.appended.load(Ordering::Relaxed),
            upserted: self.upserted.load(Ordering::Relaxed),
            deleted: self.deleted.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
        }
    }
}

/// Receives change records and hands each one to a `ChangeWriter`.
///
/// Records arrive fully built through a channel, so the producing task never
/// shares a half-constructed value with the sink.
pub struct ChangeSink<W> {
    name: String,
    writer: W,
    counters: Counters,
}

impl<W> std::fmt::Debug for ChangeSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSink")
            .field("name", &self.name)
            .field("stats", &self.stats())
            .finish()
    }
}

impl<W> ChangeSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
            counters: Counters::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn stats(&self) -> SinkStats {
        self.counters.snapshot()
    }

    /// Write one record.
    pub async fn write<R>(&self, record: RowWithOp<R>) -> Result<OperationType, SinkError>
    where
        W: ChangeWriter<R>,
    {
        let op = dispatch(&self.writer, record).await?;
        self.counters.bump(op);
        Ok(op)
    }

    /// Drain `rx` until every sender is dropped.
    ///
    /// Stops at the first writer error; records still queued stay in the
    /// channel.
    pub async fn run<R>(&self, mut rx: mpsc::Receiver<RowWithOp<R>>) -> Result<SinkStats, SinkError>
    where
        W: ChangeWriter<R>,
    {
        tracing::info!(sink = %self.name, "sink started");
        while let Some(record) = rx.recv().await {
            let op = record.operation_type();
            if let Err(e) = self.write(record).await {
                tracing::warn!(sink = %self.name, op = %op, error = %e, "write failed");
                return Err(e.with_context(&self.name));
            }
        }
        let stats = self.stats();
        tracing::info!(
            sink = %self.name,
            appended = stats.appended,
            upserted = stats.upserted,
            deleted = stats.deleted,
            ignored = stats.ignored,
            "sink finished"
        );
        Ok(stats)
    }
}
