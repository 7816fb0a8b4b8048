use diesel::prelude::*;
use jiff_diesel::DateTime;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vehicle {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<String>,
    pub created_at: DateTime,
}

/// Vehicle registered at signup. `user_id` is filled inside the signup
/// transaction once the user row exists.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::vehicles)]
pub struct NewVehicle {
    pub user_id: i32,
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
}

/// Vehicle details captured on the signup form, before the owner exists.
#[derive(Debug, Clone)]
pub struct SignupVehicle {
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
}

impl SignupVehicle {
    pub fn for_user(self, user_id: i32) -> NewVehicle {
        NewVehicle {
            user_id,
            vehicle_number: self.vehicle_number,
            model: self.model,
            brand: self.brand,
        }
    }
}

/// Full overwrite for PUT: absent optional fields become NULL.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(treat_none_as_null = true)]
pub struct VehicleChanges {
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<String>,
}
