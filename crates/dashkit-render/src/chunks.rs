//! Per-request chunk tracking.

/// Chunk names touched while rendering one request.
///
/// A collector is created for each request and handed to the renderer, so
/// concurrent renders never observe each other's chunks. Names keep their
/// first-recorded order and are not repeated.
#[derive(Debug, Clone, Default)]
pub struct ChunkCollector {
    names: Vec<String>,
}

impl ChunkCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a chunk was rendered.
    pub fn record(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Names recorded so far.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Take the recorded names, leaving the collector empty.
    pub fn flush(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dedupes_in_order() {
        let mut chunks = ChunkCollector::new();
        chunks.record("Layout");
        chunks.record("Dashboards/Projects");
        chunks.record("Layout");

        assert_eq!(chunks.names(), ["Layout", "Dashboards/Projects"]);
    }

    #[test]
    fn test_flush_empties() {
        let mut chunks = ChunkCollector::new();
        chunks.record("Apps/Files");

        assert_eq!(chunks.flush(), vec!["Apps/Files".to_string()]);
        assert!(chunks.is_empty());
    }
}
