use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

/// Current version of the persisted snapshot document.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Versioned envelope written by [`EngineSnapshot::to_json_pretty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl SnapshotDocument {
    /// Unwraps the snapshot after checking the schema version.
    pub fn into_snapshot(self) -> ChartResult<EngineSnapshot> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version {} (expected {SNAPSHOT_SCHEMA_VERSION})",
                self.schema_version
            )));
        }
        Ok(self.snapshot)
    }
}

impl From<EngineSnapshot> for SnapshotDocument {
    fn from(snapshot: EngineSnapshot) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            snapshot,
        }
    }
}

// Older fixtures store the snapshot without an envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Versioned(SnapshotDocument),
    Bare(EngineSnapshot),
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&SnapshotDocument::from(self.clone()))
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Parses a versioned document or a bare snapshot object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: SnapshotPayload = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        match payload {
            SnapshotPayload::Versioned(document) => document.into_snapshot(),
            SnapshotPayload::Bare(snapshot) => Ok(snapshot),
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
