use crate::domain::ports::{AuditEntry, AuditEvent, AuditLog, AuditOutcome};

/// Sends audit records to `tracing` under the `audit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, entry: AuditEntry) {
        match entry.event {
            AuditEvent::Started => tracing::info!(
                target: "audit",
                booking_id = %entry.booking_id,
                user = %entry.user,
                "transaction started"
            ),
            AuditEvent::Recorded(AuditOutcome::Confirmed) => tracing::info!(
                target: "audit",
                booking_id = %entry.booking_id,
                user = %entry.user,
                outcome = "confirmed",
                "transaction recorded"
            ),
            AuditEvent::Recorded(AuditOutcome::Rejected(reason)) => tracing::info!(
                target: "audit",
                booking_id = %entry.booking_id,
                user = %entry.user,
                outcome = "rejected",
                reason = %reason,
                "transaction recorded"
            ),
        }
    }
}
