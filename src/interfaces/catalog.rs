//! Maps the names used on the command line and in CSV files to concrete
//! fare strategies and payment handlers.

use crate::config::ConfigStore;
use crate::domain::fare::{CustomPricing, FareStrategy, NormalPricing, SurgePricing};
use crate::domain::payment::{CardPayment, PaymentHandler, UpiPayment, WalletPayment};
use crate::error::InputError;

/// Resolves `normal`, `surge` or `economy` (case-insensitive).
///
/// Surge pricing is refused while `enable_surge_pricing` is off.
pub fn fare_strategy(name: &str, config: &ConfigStore) -> Result<Box<dyn FareStrategy>, InputError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(Box::new(NormalPricing)),
        "surge" => {
            if config.surge_pricing_enabled() {
                Ok(Box::new(SurgePricing))
            } else {
                Err(InputError::PricingDisabled(name.to_string()))
            }
        }
        "economy" => Ok(Box::new(CustomPricing::economy())),
        _ => Err(InputError::UnknownPricing(name.to_string())),
    }
}

/// Resolves `upi`, `card` or `wallet` (case-insensitive), provided the
/// method is listed in `supported_payment_methods`.
pub fn payment_handler(
    name: &str,
    config: &ConfigStore,
) -> Result<Box<dyn PaymentHandler>, InputError> {
    let handler: Box<dyn PaymentHandler> = match name.trim().to_ascii_lowercase().as_str() {
        "upi" => Box::new(UpiPayment),
        "card" => Box::new(CardPayment),
        "wallet" => Box::new(WalletPayment),
        _ => return Err(InputError::UnsupportedPaymentMethod(name.to_string())),
    };
    if !config.is_payment_method_supported(handler.method()) {
        return Err(InputError::UnsupportedPaymentMethod(
            handler.method().to_string(),
        ));
    }
    Ok(handler)
}
