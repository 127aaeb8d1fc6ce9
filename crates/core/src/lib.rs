//! # Barberbook Core
//!
//! Domain models and booking logic for the Barberbook appointment service.
//! This crate has no I/O: everything here is a plain type or a pure
//! function, so the interesting part of the system (working out which
//! time slots are still bookable on a given day) can be exercised
//! without a database or an HTTP server.

/// Slot generation and availability filtering
pub mod availability;
/// Error types shared across the workspace
pub mod errors;
/// Domain models for services, barbers, appointments, and shop settings
pub mod models;
