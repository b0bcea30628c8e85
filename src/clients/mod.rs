//! Outbound HTTP clients for the booking and park services

pub mod booking_client;
pub mod parks_client;

pub use booking_client::{BookingClient, BookingOutcome};
pub use parks_client::ParksClient;
