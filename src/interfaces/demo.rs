use crate::interfaces::RideRequest;

/// The walkthrough rides run when no input file is given.
pub fn demo_rides() -> Vec<(&'static str, RideRequest)> {
    vec![
        (
            "Normal Pricing + UPI Payment",
            RideRequest::new("Alice Johnson", true, 5.0, "normal", "upi"),
        ),
        (
            "Surge Pricing + Card Payment",
            RideRequest::new("Alice Johnson", true, 10.0, "surge", "card"),
        ),
        (
            "Normal Pricing + Wallet Payment",
            RideRequest::new("Alice Johnson", true, 3.5, "normal", "wallet"),
        ),
        (
            "Runtime Strategy Change - Economy Pricing",
            RideRequest::new("Alice Johnson", true, 7.0, "economy", "wallet"),
        ),
        (
            "Unauthenticated user",
            RideRequest::new("Bob Smith", false, 5.0, "normal", "upi"),
        ),
    ]
}
