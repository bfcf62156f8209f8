//! Ride booking pipeline.
//!
//! A booking passes through an ordered chain of stages (audit, validation,
//! authentication, tracing) before the core action prices it with a
//! caller-supplied [`domain::fare::FareStrategy`] and settles it with a
//! caller-supplied [`domain::payment::PaymentHandler`]. Settings come from the
//! process-wide [`config::ConfigStore`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
