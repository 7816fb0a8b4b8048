mod booking;
mod feedback;
mod station;
mod user;
mod vehicle;

pub use booking::{Booking, NewBooking};
pub use feedback::{Experience, Feedback, NewFeedback};
pub use station::{Station, StationFields, StationStatus};
pub use user::{NewUser, User};
pub use vehicle::{NewVehicle, SignupVehicle, Vehicle, VehicleChanges};
