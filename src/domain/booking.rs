use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A confirmed ride.
///
/// Only the core booking action builds one, and only after every stage of
/// the pipeline accepted the request. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    booking_id: Uuid,
    passenger: String,
    distance_km: f64,
    fare: Decimal,
    strategy_used: String,
    payment_method: String,
    payment_receipt: String,
    transaction_fee: Decimal,
}

/// Everything the core action gathers before sealing a [`Booking`].
pub(crate) struct BookingParts {
    pub booking_id: Uuid,
    pub passenger: String,
    pub distance_km: f64,
    pub fare: Decimal,
    pub strategy_used: String,
    pub payment_method: String,
    pub payment_receipt: String,
    pub transaction_fee: Decimal,
}

impl Booking {
    pub(crate) fn confirm(parts: BookingParts) -> Self {
        Self {
            booking_id: parts.booking_id,
            passenger: parts.passenger,
            distance_km: parts.distance_km,
            fare: parts.fare,
            strategy_used: parts.strategy_used,
            payment_method: parts.payment_method,
            payment_receipt: parts.payment_receipt,
            transaction_fee: parts.transaction_fee,
        }
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn passenger(&self) -> &str {
        &self.passenger
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn fare(&self) -> Decimal {
        self.fare
    }

    /// Name of the fare strategy that priced this ride.
    pub fn strategy_used(&self) -> &str {
        &self.strategy_used
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn payment_receipt(&self) -> &str {
        &self.payment_receipt
    }

    pub fn transaction_fee(&self) -> Decimal {
        self.transaction_fee
    }

    /// Fare plus the payment method's transaction fee.
    pub fn total_charged(&self) -> Decimal {
        self.fare + self.transaction_fee
    }
}
