use crate::domain::ports::{AuditEntry, AuditLog};
use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe in-memory audit trail.
///
/// Clones share the same trail, so a test can keep one handle and give the
/// other to the pipeline.
#[derive(Default, Clone)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates a new, empty audit log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().clone()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn record(&self, entry: AuditEntry) {
        self.entries.write().push(entry);
    }
}
