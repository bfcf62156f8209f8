use rust_decimal::Decimal;
use thiserror::Error;

/// Failures a booking request can end with.
///
/// Every stage of the pipeline reports through this type and the pipeline
/// hands it back to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Access denied: {user} is not authenticated")]
    AuthenticationError { user: String },
    #[error("Payment rejected by {method} for amount {amount}: {reason}")]
    PaymentRejected {
        method: String,
        amount: Decimal,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BookingError>;

/// Reasons a configuration write is refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("'{0}' is restricted and cannot be modified")]
    RestrictedKey(String),
    #[error("'{0}' is not a valid configuration key")]
    UnknownKey(String),
    #[error("'{key}' expects a {expected} value")]
    TypeMismatch { key: String, expected: &'static str },
    #[error("'{key}' needs a finite number, got {value}")]
    NonFiniteNumber { key: String, value: f64 },
}

/// Errors raised while turning external input into booking requests.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown pricing strategy '{0}'")]
    UnknownPricing(String),
    #[error("Pricing strategy '{0}' is disabled")]
    PricingDisabled(String),
    #[error("Payment method '{0}' is not supported")]
    UnsupportedPaymentMethod(String),
    #[error("Invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}

/// Why a single ride from a batch did not produce a booking.
#[derive(Error, Debug)]
pub enum RideError {
    #[error("Error resolving ride: {0}")]
    Input(#[from] InputError),
    #[error("Error processing booking: {0}")]
    Booking(#[from] BookingError),
}
