pub mod appointment;
pub mod barber;
pub mod service;
pub mod shop;
