use crate::application::pipeline::BookingPipeline;
use crate::domain::booking::Booking;
use crate::error::RideError;
use crate::interfaces::RideRequest;
use crate::interfaces::catalog;

/// Resolves the names in `ride` and runs it through `pipeline`.
pub fn book(pipeline: &BookingPipeline<'_>, ride: &RideRequest) -> Result<Booking, RideError> {
    let config = pipeline.config();
    let strategy = catalog::fare_strategy(&ride.pricing, config)?;
    let handler = catalog::payment_handler(&ride.payment, config)?;
    let user = ride.user();
    Ok(pipeline.execute(&user, ride.distance_km, strategy.as_ref(), handler.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::error::{BookingError, InputError};
    use crate::infrastructure::in_memory::InMemoryAuditLog;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_book_resolves_names() {
        let config = ConfigStore::with_defaults();
        let pipeline = BookingPipeline::standard(&config, Arc::new(InMemoryAuditLog::new()));
        let ride = RideRequest::new("Alice Johnson", true, 7.0, "economy", "wallet");

        let booking = book(&pipeline, &ride).unwrap();
        assert_eq!(booking.fare(), dec!(86));
        assert_eq!(booking.strategy_used(), "Economy");
        assert_eq!(booking.payment_method(), "Wallet");
    }

    #[test]
    fn test_book_reports_input_and_booking_errors() {
        let config = ConfigStore::with_defaults();
        let pipeline = BookingPipeline::standard(&config, Arc::new(InMemoryAuditLog::new()));

        let unknown = RideRequest::new("Alice", true, 7.0, "helicopter", "upi");
        assert!(matches!(
            book(&pipeline, &unknown),
            Err(RideError::Input(InputError::UnknownPricing(_)))
        ));

        let anonymous = RideRequest::new("Bob Smith", false, 5.0, "normal", "upi");
        assert!(matches!(
            book(&pipeline, &anonymous),
            Err(RideError::Booking(BookingError::AuthenticationError { .. }))
        ));
    }
}
