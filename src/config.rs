//! Process-wide booking configuration.
//!
//! Settings live in a single [`ConfigStore`] created lazily on first access
//! through [`ConfigStore::global`]. Three keys are restricted and can never be
//! rewritten once the store exists; every other key accepts values of the
//! kind it was initialized with.
//!
//! On first access, `RIDEBOOK_<KEY>` environment variables override the
//! compiled defaults for non-restricted keys, e.g.
//! `RIDEBOOK_MAX_BOOKING_DISTANCE=800`.

use crate::error::ConfigError;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Keys that reject every write after initialization.
pub const RESTRICTED_KEYS: [&str; 3] = ["app_name", "version", "currency_code"];

const ENV_PREFIX: &str = "RIDEBOOK_";

const DEFAULT_MAX_BOOKING_DISTANCE: f64 = 500.0;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl Setting {
    pub fn kind(&self) -> &'static str {
        match self {
            Setting::Flag(_) => "flag",
            Setting::Number(_) => "number",
            Setting::Text(_) => "text",
            Setting::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Setting::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Setting::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Setting::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Setting::List(items) => Some(items),
            _ => None,
        }
    }

    /// Parses `raw` into a value of the same kind as `self`.
    ///
    /// Lists are comma separated. Non-finite numbers are refused.
    pub fn parse_as(&self, raw: &str) -> Option<Setting> {
        match self {
            Setting::Flag(_) => raw.trim().parse().ok().map(Setting::Flag),
            Setting::Number(_) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(Setting::Number),
            Setting::Text(_) => Some(Setting::Text(raw.to_string())),
            Setting::List(_) => Some(Setting::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect(),
            )),
        }
    }

    fn same_kind(&self, other: &Setting) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Flag(flag) => write!(f, "{flag}"),
            Setting::Number(number) => write!(f, "{number}"),
            Setting::Text(text) => f.write_str(text),
            Setting::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<bool> for Setting {
    fn from(value: bool) -> Self {
        Setting::Flag(value)
    }
}

impl From<f64> for Setting {
    fn from(value: f64) -> Self {
        Setting::Number(value)
    }
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Setting::Text(value.to_string())
    }
}

impl From<String> for Setting {
    fn from(value: String) -> Self {
        Setting::Text(value)
    }
}

impl From<Vec<String>> for Setting {
    fn from(value: Vec<String>) -> Self {
        Setting::List(value)
    }
}

pub type Settings = BTreeMap<String, Setting>;

fn default_settings() -> Settings {
    let methods = ["UPI", "Card", "Wallet"].map(String::from).to_vec();
    [
        // app metadata
        ("app_name", Setting::from("Mini Cab Booking System")),
        ("version", Setting::from("1.0")),
        ("release_date", Setting::from("2026-01-29")),
        // currency
        ("currency", Setting::from("₹")),
        ("currency_code", Setting::from("INR")),
        // environment
        ("environment", Setting::from("production")),
        ("debug_mode", Setting::from(false)),
        // booking limits
        ("min_booking_distance", Setting::from(1.0)),
        ("max_booking_distance", Setting::from(DEFAULT_MAX_BOOKING_DISTANCE)),
        ("min_booking_fare", Setting::from(5.0)),
        ("max_booking_fare", Setting::from(50000.0)),
        // payments
        ("supported_payment_methods", Setting::from(methods)),
        ("payment_timeout_seconds", Setting::from(30.0)),
        // operations
        ("max_concurrent_bookings", Setting::from(1000.0)),
        ("booking_confirmation_required", Setting::from(true)),
        ("enable_surge_pricing", Setting::from(true)),
        ("surge_multiplier_max", Setting::from(2.5)),
        // audit and logging
        ("enable_audit_logging", Setting::from(true)),
        ("enable_transaction_logging", Setting::from(true)),
        ("log_retention_days", Setting::from(90.0)),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

pub fn is_restricted(key: &str) -> bool {
    RESTRICTED_KEYS.contains(&key)
}

/// Process-wide settings with restricted-key protection.
///
/// Every write replaces one entry under a single write lock, so readers see
/// either the old or the new value and nothing in between.
pub struct ConfigStore {
    settings: RwLock<Settings>,
}

static GLOBAL: OnceLock<ConfigStore> = OnceLock::new();

impl ConfigStore {
    /// Returns the one store of this process, creating it on first call.
    pub fn global() -> &'static ConfigStore {
        GLOBAL.get_or_init(|| {
            tracing::info!("initializing configuration store");
            let store = Self::with_defaults();
            store.apply_env_overrides(std::env::vars());
            store
        })
    }

    pub(crate) fn with_defaults() -> Self {
        Self {
            settings: RwLock::new(default_settings()),
        }
    }

    /// Applies `RIDEBOOK_<KEY>` pairs on top of the current settings.
    pub(crate) fn apply_env_overrides<I>(&self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, raw) in vars {
            let Some(key) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let key = key.to_ascii_lowercase();
            if let Err(e) = self.set_from_str(&key, &raw) {
                tracing::warn!(variable = %name, error = %e, "ignoring environment override");
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<Setting> {
        self.settings.read().get(key).cloned()
    }

    /// Value of `key`, or `default` when the key is unknown.
    pub fn get_or(&self, key: &str, default: impl Into<Setting>) -> Setting {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Writes `value` to `key`.
    ///
    /// Restricted keys, unknown keys, values of another kind and non-finite
    /// numbers are refused and leave the store untouched.
    pub fn try_set(&self, key: &str, value: impl Into<Setting>) -> Result<(), ConfigError> {
        let value = value.into();
        if is_restricted(key) {
            return Err(ConfigError::RestrictedKey(key.to_string()));
        }
        if let Setting::Number(number) = value
            && !number.is_finite()
        {
            return Err(ConfigError::NonFiniteNumber {
                key: key.to_string(),
                value: number,
            });
        }

        let mut settings = self.settings.write();
        let current = settings
            .get_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        if !current.same_kind(&value) {
            return Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: current.kind(),
            });
        }
        tracing::info!(key, value = %value, "configuration updated");
        *current = value;
        Ok(())
    }

    /// Like [`ConfigStore::try_set`], reporting refusal as `false`.
    pub fn set(&self, key: &str, value: impl Into<Setting>) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "configuration update rejected");
                false
            }
        }
    }

    /// Parses `raw` according to the kind currently stored under `key`.
    pub fn set_from_str(&self, key: &str, raw: &str) -> Result<(), ConfigError> {
        if is_restricted(key) {
            return Err(ConfigError::RestrictedKey(key.to_string()));
        }
        let current = self
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let value = current
            .parse_as(raw)
            .ok_or_else(|| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: current.kind(),
            })?;
        self.try_set(key, value)
    }

    /// Copy of every setting at this instant.
    pub fn snapshot(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Restores the compiled defaults. Meant for tests.
    pub fn reset_to_defaults(&self) {
        *self.settings.write() = default_settings();
        tracing::info!("configuration reset to defaults");
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.settings.read().get(key).and_then(Setting::as_f64)
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        self.settings
            .read()
            .get(key)
            .and_then(Setting::as_bool)
            .unwrap_or(default)
    }

    fn text(&self, key: &str) -> String {
        self.settings
            .read()
            .get(key)
            .and_then(Setting::as_str)
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn max_booking_distance(&self) -> f64 {
        self.number("max_booking_distance")
            .unwrap_or(DEFAULT_MAX_BOOKING_DISTANCE)
    }

    pub fn audit_logging_enabled(&self) -> bool {
        self.flag("enable_audit_logging", true)
    }

    pub fn transaction_logging_enabled(&self) -> bool {
        self.flag("enable_transaction_logging", true)
    }

    pub fn surge_pricing_enabled(&self) -> bool {
        self.flag("enable_surge_pricing", true)
    }

    pub fn app_name(&self) -> String {
        self.text("app_name")
    }

    pub fn currency(&self) -> String {
        self.text("currency")
    }

    /// e.g. `Mini Cab Booking System v1.0 (production)`.
    pub fn environment_info(&self) -> String {
        format!(
            "{} v{} ({})",
            self.app_name(),
            self.text("version"),
            self.text("environment")
        )
    }

    pub fn supported_payment_methods(&self) -> Vec<String> {
        self.settings
            .read()
            .get("supported_payment_methods")
            .and_then(Setting::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn is_payment_method_supported(&self, method: &str) -> bool {
        self.supported_payment_methods()
            .iter()
            .any(|supported| supported == method)
    }

    /// Checks distance and fare against the configured bounds.
    ///
    /// A non-finite distance is refused outright. Otherwise bounds are
    /// checked in order (minimum distance, maximum distance, minimum fare,
    /// maximum fare) and the first violation is reported.
    pub fn validate_booking_params(&self, distance_km: f64, fare: Decimal) -> Result<(), String> {
        let currency = self.currency();
        let min_distance = self.number("min_booking_distance").unwrap_or(0.0);
        let max_distance = self.max_booking_distance();
        let min_fare = self.number("min_booking_fare").unwrap_or(0.0);
        let max_fare = self.number("max_booking_fare").unwrap_or(f64::MAX);
        let fare_value = fare.to_f64().unwrap_or(f64::MAX);

        if !distance_km.is_finite() {
            return Err(format!(
                "Distance must be a finite number, got {distance_km}"
            ));
        }
        if distance_km < min_distance {
            return Err(format!(
                "Distance {distance_km}km is below minimum {min_distance}km"
            ));
        }
        if distance_km > max_distance {
            return Err(format!(
                "Distance {distance_km}km exceeds maximum {max_distance}km"
            ));
        }
        if fare_value < min_fare {
            return Err(format!(
                "Fare {currency}{fare} is below minimum {currency}{min_fare}"
            ));
        }
        if fare_value > max_fare {
            return Err(format!(
                "Fare {currency}{fare} exceeds maximum {currency}{max_fare}"
            ));
        }
        Ok(())
    }
}
