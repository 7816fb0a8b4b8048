//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod account_service;
mod booking_service;
mod feedback_service;
mod payment_service;
mod station_service;
mod vehicle_service;

pub use account_service::{AccountService, Registration};
pub use booking_service::BookingService;
pub use feedback_service::{FeedbackService, FeedbackSubmission, Review};
pub use payment_service::{PaymentReceipt, PaymentRequest, PaymentService};
pub use station_service::StationService;
pub use vehicle_service::VehicleService;

use crate::repositories::Repositories;

/// Aggregates all services for use as Axum application state.
///
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub accounts: AccountService,
    pub vehicles: VehicleService,
    pub stations: StationService,
    pub bookings: BookingService,
    pub feedback: FeedbackService,
    pub payments: PaymentService,
}

impl Services {
    pub fn new(repos: Repositories) -> Self {
        Self {
            accounts: AccountService::new(repos.users),
            vehicles: VehicleService::new(repos.vehicles),
            stations: StationService::new(repos.stations),
            bookings: BookingService::new(repos.bookings),
            feedback: FeedbackService::new(repos.feedback),
            payments: PaymentService::new(),
        }
    }
}
