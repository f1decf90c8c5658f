pub mod error;
pub mod operation;
pub mod record;

pub use error::RowOpError;
pub use operation::OperationType;
pub use record::RowWithOp;
