//! The standard booking stages.
//!
//! Declared order, outermost first: [`AuditStage`], [`ValidateStage`],
//! [`AuthenticateStage`], [`TraceStage`]. Each one only knows about the
//! context and its `next` handle, so any of them can be dropped, replaced or
//! joined by new stages without touching the others.

use crate::application::middleware::{BookingContext, Middleware, Next};
use crate::domain::booking::Booking;
use crate::domain::ports::{AuditEntry, AuditEvent, AuditLog, AuditOutcome};
use crate::error::{BookingError, Result};
use std::sync::Arc;
use std::time::Instant;

/// Records the start and the end of every request, whatever its outcome.
pub struct AuditStage {
    log: Arc<dyn AuditLog>,
}

impl AuditStage {
    pub fn new(log: Arc<dyn AuditLog>) -> Self {
        Self { log }
    }

    fn record(&self, ctx: &BookingContext<'_>, event: AuditEvent) {
        self.log.record(AuditEntry {
            booking_id: ctx.booking_id(),
            user: ctx.user().name().to_string(),
            event,
        });
    }
}

impl Middleware for AuditStage {
    fn name(&self) -> &'static str {
        "audit"
    }

    fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking> {
        if !ctx.config().audit_logging_enabled() {
            return next.run(ctx);
        }

        self.record(ctx, AuditEvent::Started);
        let outcome = next.run(ctx);
        let result = match &outcome {
            Ok(_) => AuditOutcome::Confirmed,
            Err(e) => AuditOutcome::Rejected(e.to_string()),
        };
        self.record(ctx, AuditEvent::Recorded(result));
        outcome
    }
}

/// Rejects distances that are not finite, not positive, or beyond the
/// configured `max_booking_distance`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateStage;

impl Middleware for ValidateStage {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking> {
        let distance_km = ctx.distance_km();
        let max_distance = ctx.config().max_booking_distance();

        if !distance_km.is_finite() {
            return Err(BookingError::ValidationError(format!(
                "Distance must be a finite number, got {distance_km}"
            )));
        }
        if distance_km <= 0.0 {
            return Err(BookingError::ValidationError(format!(
                "Distance must be positive, got {distance_km}"
            )));
        }
        if distance_km > max_distance {
            return Err(BookingError::ValidationError(format!(
                "Distance {distance_km}km exceeds maximum {max_distance}km"
            )));
        }

        tracing::debug!(booking_id = %ctx.booking_id(), distance_km, "input parameters validated");
        next.run(ctx)
    }
}

/// Only lets authenticated users through.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthenticateStage;

impl Middleware for AuthenticateStage {
    fn name(&self) -> &'static str {
        "authenticate"
    }

    fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking> {
        let user = ctx.user();
        if !user.is_authenticated() {
            tracing::warn!(user = user.name(), "access denied");
            return Err(BookingError::AuthenticationError {
                user: user.name().to_string(),
            });
        }

        tracing::debug!(user = user.name(), "authenticated");
        next.run(ctx)
    }
}

/// Times the inner chain and reports the duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceStage;

impl Middleware for TraceStage {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking> {
        let start = Instant::now();
        let outcome = next.run(ctx);
        let elapsed = start.elapsed();
        ctx.elapsed = Some(elapsed);

        if ctx.config().transaction_logging_enabled() {
            let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
            match &outcome {
                Ok(booking) => tracing::info!(
                    booking_id = %booking.booking_id(),
                    elapsed_ms,
                    "book_ride completed"
                ),
                Err(e) => tracing::warn!(
                    booking_id = %ctx.booking_id(),
                    elapsed_ms,
                    error = %e,
                    "book_ride failed"
                ),
            }
        }
        outcome
    }
}
