use crate::error::AppResult;
use crate::models::{Booking, NewBooking};
use crate::repositories::BookingRepository;

#[derive(Clone)]
pub struct BookingService {
    repo: BookingRepository,
}

impl BookingService {
    pub fn new(repo: BookingRepository) -> Self {
        Self { repo }
    }

    /// Stores the booking unconditionally.
    ///
    /// Overlapping bookings for the same station and time are accepted and
    /// station availability is left untouched.
    pub async fn create(&self, new_booking: NewBooking) -> AppResult<Booking> {
        let booking = self.repo.create(new_booking).await?;
        tracing::info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            station_id = booking.station_id,
            date = %booking.date,
            time = %booking.time,
            "booking created"
        );
        Ok(booking)
    }

    /// The user's bookings, latest date and time first. Unknown users get
    /// an empty list.
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        self.repo.list_for_user(user_id).await
    }
}
