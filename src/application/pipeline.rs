use crate::application::middleware::{BookingContext, Middleware, Next};
use crate::application::stages::{AuditStage, AuthenticateStage, TraceStage, ValidateStage};
use crate::config::ConfigStore;
use crate::domain::booking::{Booking, BookingParts};
use crate::domain::fare::FareStrategy;
use crate::domain::payment::PaymentHandler;
use crate::domain::ports::AuditLog;
use crate::domain::user::User;
use crate::error::{BookingError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;

/// A type-erased stage that can be stored in the pipeline.
pub type BoxedMiddleware = Box<dyn Middleware>;

/// Runs ride bookings through an ordered chain of stages.
///
/// The pipeline owns the stages and borrows the configuration; fare
/// strategies and payment handlers are handed in per call and never built
/// here, so new variants need no change to this type.
pub struct BookingPipeline<'c> {
    config: &'c ConfigStore,
    stages: Vec<BoxedMiddleware>,
}

impl<'c> BookingPipeline<'c> {
    /// The standard chain: audit, validate, authenticate, trace.
    pub fn standard(config: &'c ConfigStore, audit_log: Arc<dyn AuditLog>) -> Self {
        Self::builder(config)
            .stage(AuditStage::new(audit_log))
            .stage(ValidateStage)
            .stage(AuthenticateStage)
            .stage(TraceStage)
            .build()
    }

    pub fn builder(config: &'c ConfigStore) -> PipelineBuilder<'c> {
        PipelineBuilder::new(config)
    }

    /// Books a ride.
    ///
    /// Stages run outermost first; any of them may reject, in which case the
    /// fare strategy and payment handler are never consulted. Once every
    /// stage has accepted, the fare is computed, paid, and sealed into a
    /// [`Booking`].
    pub fn execute(
        &self,
        user: &User,
        distance_km: f64,
        fare_strategy: &dyn FareStrategy,
        payment_handler: &dyn PaymentHandler,
    ) -> Result<Booking> {
        let mut ctx = BookingContext::new(user, distance_km, self.config);
        let action = move |ctx: &mut BookingContext<'_>| {
            book_ride(ctx, fare_strategy, payment_handler)
        };

        let mut next = Next::action(action);
        for stage in self.stages.iter().rev() {
            next = Next::new(stage.as_ref(), next);
        }
        next.run(&mut ctx)
    }

    /// Stage names, outermost first.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn config(&self) -> &'c ConfigStore {
        self.config
    }
}

/// The core action: price the ride, pay for it, confirm it.
fn book_ride(
    ctx: &BookingContext<'_>,
    fare_strategy: &dyn FareStrategy,
    payment_handler: &dyn PaymentHandler,
) -> Result<Booking> {
    let distance = Decimal::try_from(ctx.distance_km()).map_err(|_| {
        BookingError::ValidationError(format!(
            "Distance {} cannot be priced",
            ctx.distance_km()
        ))
    })?;

    let fare = fare_strategy.calculate_fare(distance);
    let payment_receipt = payment_handler.pay(fare)?;
    let transaction_fee = payment_handler.transaction_fee(fare);

    Ok(Booking::confirm(BookingParts {
        booking_id: ctx.booking_id(),
        passenger: ctx.user().name().to_string(),
        distance_km: ctx.distance_km(),
        fare,
        strategy_used: fare_strategy.name().to_string(),
        payment_method: payment_handler.method().to_string(),
        payment_receipt,
        transaction_fee,
    }))
}

/// Builder for a [`BookingPipeline`] with a custom stage list.
///
/// Stages run in the order they are added, the first one outermost.
pub struct PipelineBuilder<'c> {
    config: &'c ConfigStore,
    stages: Vec<BoxedMiddleware>,
}

impl<'c> PipelineBuilder<'c> {
    pub fn new(config: &'c ConfigStore) -> Self {
        Self {
            config,
            stages: Vec::new(),
        }
    }

    #[must_use]
    pub fn stage<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.stages.push(Box::new(middleware));
        self
    }

    pub fn build(self) -> BookingPipeline<'c> {
        BookingPipeline {
            config: self.config,
            stages: self.stages,
        }
    }
}
