//! Outer surfaces: CSV input, name lookup, demo rides and text rendering.

pub mod batch;
pub mod catalog;
pub mod csv;
pub mod demo;
pub mod render;

use crate::domain::user::User;
use serde::Deserialize;

/// One ride as described by an external caller, before any names are
/// resolved to strategies or handlers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RideRequest {
    pub user: String,
    pub authenticated: bool,
    pub distance_km: f64,
    pub pricing: String,
    pub payment: String,
}

impl RideRequest {
    pub fn new(
        user: impl Into<String>,
        authenticated: bool,
        distance_km: f64,
        pricing: impl Into<String>,
        payment: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            authenticated,
            distance_km,
            pricing: pricing.into(),
            payment: payment.into(),
        }
    }

    pub fn user(&self) -> User {
        User::new(self.user.clone(), self.authenticated)
    }
}
