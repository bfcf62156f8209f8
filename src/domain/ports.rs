use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Confirmed,
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    /// The request entered the pipeline.
    Started,
    /// The request left the pipeline, successfully or not.
    Recorded(AuditOutcome),
}

/// One line of the booking audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub booking_id: Uuid,
    pub user: String,
    pub event: AuditEvent,
}

/// Destination for audit records written by the audit stage.
pub trait AuditLog: Send + Sync {
    fn record(&self, entry: AuditEntry);
}
