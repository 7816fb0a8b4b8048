//! Repository layer: one struct per table, each holding the shared pool.

mod booking_repo;
mod feedback_repo;
mod station_repo;
mod user_repo;
mod vehicle_repo;

pub use booking_repo::BookingRepository;
pub use feedback_repo::FeedbackRepository;
pub use station_repo::StationRepository;
pub use user_repo::UserRepository;
pub use vehicle_repo::VehicleRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories. Cloning only clones pool handles.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub vehicles: VehicleRepository,
    pub stations: StationRepository,
    pub bookings: BookingRepository,
    pub feedback: FeedbackRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            stations: StationRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool),
        }
    }
}
