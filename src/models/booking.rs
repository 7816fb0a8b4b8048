use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Reservation of a station slot. `date`, `time` and `duration` are kept
/// exactly as the client sent them.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub station_id: i32,
    pub station_name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub user_id: i32,
    pub station_id: i32,
    pub station_name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
}
