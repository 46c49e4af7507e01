use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use vulnscope::prelude::*;

/// In-memory StateRepository; clones share the same slots
#[derive(Clone, Default)]
pub struct MockStateRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MockStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(self, slot: &str, content: &str) -> Self {
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), content.to_string());
        self
    }

    pub fn slot(&self, slot: &str) -> Option<String> {
        self.slots.lock().unwrap().get(slot).cloned()
    }
}

impl StateRepository for MockStateRepository {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slot(slot))
    }

    fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), content.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://state")
    }
}
