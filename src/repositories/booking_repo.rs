use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Booking, NewBooking};

#[derive(Clone)]
pub struct BookingRepository {
    pool: AsyncDbPool,
}

impl BookingRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Plain insert. Nothing checks overlap or station capacity, and the
    /// station's `available_slots` is left untouched.
    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        use crate::schema::bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(bookings)
            .values(&new_booking)
            .returning(Booking::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Newest first. `date` and `time` are text, so ordering is lexical.
    pub async fn list_for_user(&self, owner_id: i32) -> Result<Vec<Booking>, AppError> {
        use crate::schema::bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        bookings
            .filter(user_id.eq(owner_id))
            .order((date.desc(), time.desc(), id.desc()))
            .select(Booking::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
