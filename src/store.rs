use crate::error::{AtlasError, Result};
use crate::model::Event;
use std::fs;
use std::path::Path;

/// Load-once, read-only collection of events for the whole session.
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Load a JSON array of events from disk
    pub fn load(path: &Path) -> Result<Self> {
        let mut bytes = fs::read(path).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_bytes(&mut bytes)?;
        tracing::info!(path = %path.display(), events = store.len(), "loaded event dataset");
        Ok(store)
    }

    /// Decode a JSON array of events. simd-json parses in place, so the buffer is clobbered.
    pub fn from_json_bytes(bytes: &mut [u8]) -> Result<Self> {
        let events: Vec<Event> = simd_json::serde::from_slice(bytes)?;
        Ok(Self::from_events(events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
