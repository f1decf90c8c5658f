use std::fmt;
use std::str::FromStr;

use crate::error::RowOpError;

/// Mutation applied to the downstream table for one change event.
///
/// The set is closed. Consumers match on it without a wildcard arm, so a new
/// member fails to compile at every place that has to decide what to do
/// with it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    /// Insert-only write into a log table.
    Append,
    /// Insert or replace by primary key.
    Upsert,
    /// Remove by primary key.
    Delete,
    /// Drop the row without touching the table.
    Ignore,
}

impl OperationType {
    /// Every member, in declaration order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Append,
        OperationType::Upsert,
        OperationType::Delete,
        OperationType::Ignore,
    ];

    /// Canonical upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Append => "APPEND",
            OperationType::Upsert => "UPSERT",
            OperationType::Delete => "DELETE",
            OperationType::Ignore => "IGNORE",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = RowOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationType::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RowOpError::invalid_argument(format!("unknown operation type '{s}'")))
    }
}
