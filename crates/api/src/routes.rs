pub mod appointment;
pub mod availability;
pub mod barber;
pub mod health;
pub mod service;
pub mod settings;
