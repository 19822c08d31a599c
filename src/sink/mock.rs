use crate::error::Result;
use crate::sink::ResultSink;
use std::sync::Mutex;

/// Mock sink for testing without touching the filesystem
pub struct MockSink {
    records: Mutex<Vec<(String, String)>>,
}

impl MockSink {
    /// Create a new empty mock sink
    pub fn new() -> Self {
        MockSink {
            records: Mutex::new(Vec::new()),
        }
    }

    /// All `(key, value)` pairs appended so far, in order
    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().unwrap().clone()
    }

    /// True when nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for MockSink {
    fn append(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
