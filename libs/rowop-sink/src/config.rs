use serde::Deserialize;

use crate::error::SinkError;

// ════════════════════════════════════════════════════════════════
//  Sink Config
// ════════════════════════════════════════════════════════════════

/// Write-side settings that decide which operation each row kind becomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkConfig {
    /// Target is a log table without a primary key: inserts become appends,
    /// updates are rejected.
    pub append_only: bool,
    /// Drop retractions (deletes and update-before images) instead of
    /// writing or rejecting them.
    pub ignore_delete: bool,
}

impl SinkConfig {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, SinkError> {
        Self::deserialize(value).map_err(|e| {
            tracing::error!(error = %e, "invalid sink config");
            SinkError::Config(e.to_string())
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, SinkError> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    /// Short table flavor name used in logs and errors.
    pub fn table_kind(&self) -> &'static str {
        if self.append_only { "append-only" } else { "primary-key" }
    }
}
