//! User repository for async database operations.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, SignupVehicle, User, Vehicle};

/// `AsyncDbPool` is an Arc internally, so the repository is cheap to clone.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a user and their first vehicle in one transaction.
    ///
    /// Fails with `AppError::Duplicate` when the email or username is taken,
    /// either by the pre-check or by the unique constraints if a concurrent
    /// signup slipped past it. Either way nothing is written.
    pub async fn register_with_vehicle(
        &self,
        new_user: NewUser,
        vehicle: SignupVehicle,
    ) -> Result<(User, Vehicle), AppError> {
        use crate::schema::{users, vehicles};
        let mut conn = self.pool.get().await?;

        conn.transaction::<_, AppError, _>(|conn| {
            async move {
                let existing: Option<User> = users::table
                    .filter(
                        users::email
                            .eq(&new_user.email)
                            .or(users::username.eq(&new_user.username)),
                    )
                    .select(User::as_select())
                    .first(conn)
                    .await
                    .optional()?;

                if let Some(existing) = existing {
                    let (field, value) = if existing.email == new_user.email {
                        ("email", new_user.email)
                    } else {
                        ("username", new_user.username)
                    };
                    return Err(AppError::Duplicate {
                        entity: "user".to_string(),
                        field: field.to_string(),
                        value,
                    });
                }

                let user: User = diesel::insert_into(users::table)
                    .values(&new_user)
                    .returning(User::as_returning())
                    .get_result(conn)
                    .await?;

                let registered: Vehicle = diesel::insert_into(vehicles::table)
                    .values(&vehicle.for_user(user.id))
                    .returning(Vehicle::as_returning())
                    .get_result(conn)
                    .await?;

                Ok((user, registered))
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Every user, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .select(User::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
