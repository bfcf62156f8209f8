//! Domain model: passengers, bookings, and the pluggable pricing and payment
//! rules a booking is assembled from.

pub mod booking;
pub mod fare;
pub mod payment;
pub mod ports;
pub mod user;
