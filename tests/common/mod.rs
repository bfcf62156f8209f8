#![allow(dead_code)]

use ridebook::domain::fare::FareStrategy;
use ridebook::domain::payment::PaymentHandler;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn write_rides_csv(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["user", "authenticated", "distance_km", "pricing", "payment"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Fare strategy that counts how often it was asked for a price.
#[derive(Default)]
pub struct CountingPricing {
    pub calls: AtomicUsize,
}

impl FareStrategy for CountingPricing {
    fn name(&self) -> &str {
        "Counting"
    }

    fn calculate_fare(&self, distance_km: Decimal) -> Decimal {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Decimal::from(40) + distance_km
    }
}

/// Payment handler that counts how often it was asked to pay.
#[derive(Default)]
pub struct CountingPayment {
    pub calls: AtomicUsize,
}

impl PaymentHandler for CountingPayment {
    fn method(&self) -> &str {
        "Counting"
    }

    fn pay(&self, amount: Decimal) -> ridebook::error::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Counted {amount}"))
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
