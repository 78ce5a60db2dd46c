use crate::prelude::{GridSnapshot, SetupError};
use std::collections::HashMap;

/// Session-scoped store of grid snapshots: one JSON-serialized 2-D string
/// array per widget identifier. Values stay string-typed, matching the
/// storage contract the widgets were written against.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Reads and deserializes the snapshot saved under `key`, if any.
    pub fn load_grid(&self, key: &str) -> Result<Option<GridSnapshot>, SetupError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|err| SetupError::CorruptSnapshot(key.to_string(), err.to_string())),
        }
    }

    /// Serializes and stores `grid` under `key`, replacing any prior value.
    pub fn save_grid(&mut self, key: &str, grid: &GridSnapshot) -> serde_json::Result<()> {
        let raw = serde_json::to_string(grid)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}
