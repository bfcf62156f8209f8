use crate::error::{BookingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A pluggable rule pricing a ride from its distance.
///
/// Implementations must be pure: the same distance always yields the same
/// fare, and any non-negative distance yields a non-negative fare.
pub trait FareStrategy: Send + Sync {
    /// Tag recorded on the booking this strategy priced.
    fn name(&self) -> &str;

    fn calculate_fare(&self, distance_km: Decimal) -> Decimal;
}

/// `base + distance * rate`, saturating instead of overflowing.
fn linear_fare(base_fare: Decimal, per_km_rate: Decimal, distance_km: Decimal) -> Decimal {
    base_fare.saturating_add(distance_km.saturating_mul(per_km_rate))
}

/// Standard pricing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalPricing;

impl NormalPricing {
    pub const BASE_FARE: Decimal = dec!(50);
    pub const PER_KM_RATE: Decimal = dec!(10);
}

impl FareStrategy for NormalPricing {
    fn name(&self) -> &str {
        "Normal"
    }

    fn calculate_fare(&self, distance_km: Decimal) -> Decimal {
        linear_fare(Self::BASE_FARE, Self::PER_KM_RATE, distance_km)
    }
}

/// Peak-hour pricing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurgePricing;

impl SurgePricing {
    pub const BASE_FARE: Decimal = dec!(100);
    pub const PER_KM_RATE: Decimal = dec!(25);
}

impl FareStrategy for SurgePricing {
    fn name(&self) -> &str {
        "Surge"
    }

    fn calculate_fare(&self, distance_km: Decimal) -> Decimal {
        linear_fare(Self::BASE_FARE, Self::PER_KM_RATE, distance_km)
    }
}

/// A rate card defined at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPricing {
    name: String,
    base_fare: Decimal,
    per_km_rate: Decimal,
}

impl CustomPricing {
    /// Fails when either rate is negative.
    pub fn new(name: impl Into<String>, base_fare: Decimal, per_km_rate: Decimal) -> Result<Self> {
        let name = name.into();
        if base_fare < Decimal::ZERO || per_km_rate < Decimal::ZERO {
            return Err(BookingError::ValidationError(format!(
                "Pricing '{name}' needs non-negative rates, got base {base_fare} and {per_km_rate}/km"
            )));
        }
        Ok(Self {
            name,
            base_fare,
            per_km_rate,
        })
    }

    /// Budget rate card: 30 base plus 8 per km.
    pub fn economy() -> Self {
        Self {
            name: "Economy".to_string(),
            base_fare: dec!(30),
            per_km_rate: dec!(8),
        }
    }

    pub fn base_fare(&self) -> Decimal {
        self.base_fare
    }

    pub fn per_km_rate(&self) -> Decimal {
        self.per_km_rate
    }
}

impl FareStrategy for CustomPricing {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_fare(&self, distance_km: Decimal) -> Decimal {
        linear_fare(self.base_fare, self.per_km_rate, distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_pricing() {
        assert_eq!(NormalPricing.calculate_fare(dec!(5.0)), dec!(100));
        assert_eq!(NormalPricing.calculate_fare(dec!(3.5)), dec!(85));
        assert_eq!(NormalPricing.calculate_fare(Decimal::ZERO), dec!(50));
    }

    #[test]
    fn test_surge_pricing() {
        assert_eq!(SurgePricing.calculate_fare(dec!(10.0)), dec!(350));
        assert_eq!(SurgePricing.calculate_fare(Decimal::ZERO), dec!(100));
    }

    #[test]
    fn test_economy_pricing() {
        let economy = CustomPricing::economy();
        assert_eq!(economy.name(), "Economy");
        assert_eq!(economy.calculate_fare(dec!(7.0)), dec!(86));
    }

    #[test]
    fn test_custom_pricing_rejects_negative_rates() {
        assert!(CustomPricing::new("Promo", dec!(0), dec!(4)).is_ok());
        assert!(matches!(
            CustomPricing::new("Broken", dec!(-1), dec!(4)),
            Err(BookingError::ValidationError(_))
        ));
        assert!(matches!(
            CustomPricing::new("Broken", dec!(10), dec!(-0.5)),
            Err(BookingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_huge_distance_saturates() {
        let fare = SurgePricing.calculate_fare(Decimal::MAX);
        assert_eq!(fare, Decimal::MAX);
    }
}
