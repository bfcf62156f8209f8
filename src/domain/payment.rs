use crate::error::{BookingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amount window and fee a payment method operates under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentLimits {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    /// Fee as a percentage of the amount, e.g. `1.5` for 1.5%.
    pub fee_percent: Decimal,
}

impl PaymentLimits {
    pub fn contains(&self, amount: Decimal) -> bool {
        self.min_amount <= amount && amount <= self.max_amount
    }

    pub fn fee(&self, amount: Decimal) -> Decimal {
        amount * self.fee_percent / dec!(100)
    }
}

/// A pluggable way of settling a fare.
///
/// Only [`PaymentHandler::method`] is required. Handlers that publish
/// [`PaymentLimits`] get range validation and percentage fees for free;
/// the rest accept any positive amount without a fee unless they override
/// `validate` or `transaction_fee`.
pub trait PaymentHandler: Send + Sync {
    /// Method name as it appears on receipts and in configuration.
    fn method(&self) -> &str;

    fn limits(&self) -> Option<PaymentLimits> {
        None
    }

    fn validate(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && self.limits().is_none_or(|limits| limits.contains(amount))
    }

    fn transaction_fee(&self, amount: Decimal) -> Decimal {
        self.limits()
            .map_or(Decimal::ZERO, |limits| limits.fee(amount))
    }

    /// Settles `amount` and returns the receipt text.
    fn pay(&self, amount: Decimal) -> Result<String> {
        if !self.validate(amount) {
            let reason = match self.limits() {
                Some(limits) => format!(
                    "{} payment must be between {} and {}",
                    self.method(),
                    limits.min_amount,
                    limits.max_amount
                ),
                None => "amount must be positive".to_string(),
            };
            return Err(BookingError::PaymentRejected {
                method: self.method().to_string(),
                amount,
                reason,
            });
        }
        Ok(format!("Paid {amount} using {}", self.method()))
    }
}

/// Unified Payments Interface, no fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpiPayment;

impl UpiPayment {
    pub const LIMITS: PaymentLimits = PaymentLimits {
        min_amount: dec!(1),
        max_amount: dec!(100000),
        fee_percent: dec!(0),
    };
}

impl PaymentHandler for UpiPayment {
    fn method(&self) -> &str {
        "UPI"
    }

    fn limits(&self) -> Option<PaymentLimits> {
        Some(Self::LIMITS)
    }
}

/// Credit or debit card, 1.5% fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardPayment;

impl CardPayment {
    pub const LIMITS: PaymentLimits = PaymentLimits {
        min_amount: dec!(10),
        max_amount: dec!(500000),
        fee_percent: dec!(1.5),
    };
}

impl PaymentHandler for CardPayment {
    fn method(&self) -> &str {
        "Card"
    }

    fn limits(&self) -> Option<PaymentLimits> {
        Some(Self::LIMITS)
    }
}

/// In-app wallet, 0.5% fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletPayment;

impl WalletPayment {
    pub const LIMITS: PaymentLimits = PaymentLimits {
        min_amount: dec!(5),
        max_amount: dec!(50000),
        fee_percent: dec!(0.5),
    };
}

impl PaymentHandler for WalletPayment {
    fn method(&self) -> &str {
        "Wallet"
    }

    fn limits(&self) -> Option<PaymentLimits> {
        Some(Self::LIMITS)
    }
}
