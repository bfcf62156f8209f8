//! Stage trait and chain plumbing for the booking pipeline.
//!
//! A stage receives the request context and a [`Next`] handle for the rest
//! of the chain. It may inspect the context, reject by returning an error
//! without calling `next`, or call `next.run(ctx)` exactly once and look at
//! the outcome on the way back out.
//!
//! ```ignore
//! struct Timing;
//!
//! impl Middleware for Timing {
//!     fn name(&self) -> &'static str {
//!         "timing"
//!     }
//!
//!     fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking> {
//!         let start = Instant::now();
//!         let outcome = next.run(ctx);
//!         println!("took {:?}", start.elapsed());
//!         outcome
//!     }
//! }
//! ```

use crate::config::ConfigStore;
use crate::domain::booking::Booking;
use crate::domain::user::User;
use crate::error::Result;
use std::time::Duration;
use uuid::Uuid;

/// Per-request state shared by every stage and the core action.
pub struct BookingContext<'a> {
    booking_id: Uuid,
    user: &'a User,
    distance_km: f64,
    config: &'a ConfigStore,
    /// Set by the trace stage once the inner chain has returned.
    pub elapsed: Option<Duration>,
}

impl<'a> BookingContext<'a> {
    pub fn new(user: &'a User, distance_km: f64, config: &'a ConfigStore) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            user,
            distance_km,
            config,
            elapsed: None,
        }
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn user(&self) -> &'a User {
        self.user
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn config(&self) -> &'a ConfigStore {
        self.config
    }
}

/// A pre/post hook wrapped around the core booking action.
///
/// # Invariants
///
/// - A stage calls `next.run()` at most once.
/// - A stage that rejects returns its error without calling `next`.
/// - Errors coming back from `next` are returned unchanged.
pub trait Middleware: Send + Sync {
    /// Short name used in logs and by [`BookingPipeline::stage_names`].
    ///
    /// [`BookingPipeline::stage_names`]: crate::application::pipeline::BookingPipeline::stage_names
    fn name(&self) -> &'static str;

    fn process(&self, ctx: &mut BookingContext<'_>, next: Next<'_>) -> Result<Booking>;
}

/// The innermost step of a chain.
pub type CoreAction<'a> = Box<dyn FnOnce(&mut BookingContext<'_>) -> Result<Booking> + 'a>;

/// Handle to the remainder of the chain.
///
/// Consumed by [`Next::run`], so it can only be invoked once.
pub struct Next<'a> {
    inner: NextInner<'a>,
}

enum NextInner<'a> {
    Chain {
        middleware: &'a dyn Middleware,
        next: Box<Next<'a>>,
    },
    Action(CoreAction<'a>),
}

impl<'a> Next<'a> {
    /// Wraps `next` with `middleware`.
    pub fn new(middleware: &'a dyn Middleware, next: Next<'a>) -> Self {
        Self {
            inner: NextInner::Chain {
                middleware,
                next: Box::new(next),
            },
        }
    }

    /// A chain made of just the core action.
    pub fn action<F>(action: F) -> Self
    where
        F: FnOnce(&mut BookingContext<'_>) -> Result<Booking> + 'a,
    {
        Self {
            inner: NextInner::Action(Box::new(action)),
        }
    }

    pub fn run(self, ctx: &mut BookingContext<'_>) -> Result<Booking> {
        match self.inner {
            NextInner::Chain { middleware, next } => middleware.process(ctx, *next),
            NextInner::Action(action) => action(ctx),
        }
    }
}
