pub mod appointment;
pub mod availability;
pub mod barber;
pub mod service;
pub mod settings;
