mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_rows_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user, authenticated, distance_km, pricing, payment").unwrap();
    writeln!(file, "Alice, true, 5.0, normal, upi").unwrap();
    writeln!(file, "Alice, true, far, normal, upi").unwrap(); // distance not a number
    writeln!(file, "Alice, maybe, 5.0, normal, upi").unwrap(); // not a bool
    writeln!(file, "Carol, true, 2.0, normal, upi").unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading ride request"))
        .stdout(predicate::str::contains("Passenger: Alice"))
        .stdout(predicate::str::contains("Passenger: Carol"))
        .stdout(predicate::str::contains("Fare: ₹70"));
}

#[test]
fn test_validation_failures_reported_per_row() {
    let file = NamedTempFile::new().unwrap();
    common::write_rides_csv(
        file.path(),
        &[
            ["Alice", "true", "0", "normal", "upi"],
            ["Alice", "true", "900", "normal", "upi"],
            ["Alice", "true", "NaN", "normal", "upi"],
            ["Alice", "true", "12", "normal", "upi"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Distance must be positive, got 0"))
        .stderr(predicate::str::contains("Distance 900km exceeds maximum 500km"))
        .stderr(predicate::str::contains("Distance must be a finite number"))
        .stdout(predicate::str::contains("Fare: ₹170"));
}

#[test]
fn test_unknown_names_and_unsupported_methods() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user, authenticated, distance_km, pricing, payment").unwrap();
    writeln!(file, "Alice, true, 5.0, luxury, upi").unwrap();
    writeln!(file, "Alice, true, 5.0, normal, cash").unwrap();
    writeln!(file, "Alice, true, 5.0, normal, card").unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg("--set")
        .arg("supported_payment_methods=UPI,Wallet")
        .arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unknown pricing strategy 'luxury'"))
        .stderr(predicate::str::contains("Payment method 'cash' is not supported"))
        .stderr(predicate::str::contains("Payment method 'Card' is not supported"))
        .stdout(predicate::str::contains("Passenger").not());
}

#[test]
fn test_overrides_change_limits_but_not_restricted_keys() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user, authenticated, distance_km, pricing, payment").unwrap();
    writeln!(file, "Alice, true, 800, normal, upi").unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg("--set")
        .arg("max_booking_distance=1000")
        .arg("--set")
        .arg("app_name=Hijacked Cabs")
        .arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "'app_name' is restricted and cannot be modified",
        ))
        .stdout(predicate::str::contains("Mini Cab Booking System"))
        .stdout(predicate::str::contains("Hijacked Cabs").not())
        .stdout(predicate::str::contains("Fare: ₹8050"));
}

#[test]
fn test_surge_disabled_by_override() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user, authenticated, distance_km, pricing, payment").unwrap();
    writeln!(file, "Alice, true, 10, surge, card").unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg("--set")
        .arg("enable_surge_pricing=false")
        .arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Pricing strategy 'surge' is disabled"));
}

#[test]
fn test_json_output() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user, authenticated, distance_km, pricing, payment").unwrap();
    writeln!(file, "Alice, true, 10, surge, card").unwrap();

    let mut cmd = Command::new(cargo_bin!("ridebook"));
    cmd.arg("--json").arg(file.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(output).unwrap();
    let booking: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

    assert_eq!(booking["passenger"], "Alice");
    assert_eq!(booking["strategy_used"], "Surge");
    assert_eq!(booking["payment_method"], "Card");
    assert_eq!(booking["distance_km"], 10.0);
    assert!(booking["fare"].as_str().unwrap().starts_with("350"));
}
