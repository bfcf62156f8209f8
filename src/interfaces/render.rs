use crate::config::ConfigStore;
use crate::domain::booking::Booking;

const RULE_WIDTH: usize = 60;

/// Human-readable confirmation for a booking.
pub fn confirmation(booking: &Booking, config: &ConfigStore) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let currency = config.currency();
    format!(
        "{rule}\n\
         {app}\n\
         {rule}\n\
         Booking ID: {id}\n\
         Passenger: {passenger}\n\
         Distance: {distance} km\n\
         Fare: {currency}{fare}\n\
         Payment: {receipt}\n\
         Transaction Fee: {currency}{fee}\n\
         {rule}",
        app = config.app_name(),
        id = booking.booking_id(),
        passenger = booking.passenger(),
        distance = booking.distance_km(),
        fare = booking.fare(),
        receipt = booking.payment_receipt(),
        fee = booking.transaction_fee().round_dp(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pipeline::BookingPipeline;
    use crate::domain::fare::SurgePricing;
    use crate::domain::payment::CardPayment;
    use crate::domain::user::User;
    use crate::infrastructure::in_memory::InMemoryAuditLog;
    use std::sync::Arc;

    #[test]
    fn test_confirmation_lists_booking_details() {
        let config = ConfigStore::with_defaults();
        let pipeline = BookingPipeline::standard(&config, Arc::new(InMemoryAuditLog::new()));
        let booking = pipeline
            .execute(&User::authenticated("Alice Johnson"), 10.0, &SurgePricing, &CardPayment)
            .unwrap();

        let text = confirmation(&booking, &config);
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("Mini Cab Booking System"));
        assert!(text.contains("Passenger: Alice Johnson"));
        assert!(text.contains("Distance: 10 km"));
        assert!(text.contains("Fare: ₹350"));
        assert!(text.contains("Payment: Paid 350"));
        assert!(text.contains("Transaction Fee: ₹5.25"));
        assert!(text.contains(&booking.booking_id().to_string()));
    }
}
