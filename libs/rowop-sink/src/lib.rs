pub mod config;
pub mod converter;
pub mod error;
pub mod sink;
pub mod writer;

pub use config::SinkConfig;
pub use converter::{OperationMapper, RowKind};
pub use error::SinkError;
pub use sink::{ChangeSink, SinkStats};
pub use writer::{ChangeWriter, dispatch};
