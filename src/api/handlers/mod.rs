//! HTTP handlers grouped by resource.

pub mod account;
pub mod bookings;
pub mod feedback;
pub mod health;
pub mod payment;
pub mod stations;
pub mod users;
pub mod vehicles;
