pub mod appointment_test;
pub mod availability_test;
pub mod middleware_test;
