//! Application layer: the booking pipeline and the stages it runs.
//!
//! [`pipeline::BookingPipeline`] is the entry point. It threads a
//! [`middleware::BookingContext`] through an ordered list of
//! [`middleware::Middleware`] stages and finally into the core booking
//! action.

pub mod middleware;
pub mod pipeline;
pub mod stages;
