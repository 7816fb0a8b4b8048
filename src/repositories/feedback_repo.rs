use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Feedback, NewFeedback};
use crate::schema::{feedback, users};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: AsyncDbPool,
}

impl FeedbackRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(feedback::table)
            .values(&new_feedback)
            .returning(Feedback::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Every entry with its author's username (`None` for anonymous entries
    /// or deleted users), newest first.
    pub async fn list_with_authors(&self) -> Result<Vec<(Feedback, Option<String>)>, AppError> {
        let mut conn = self.pool.get().await?;

        feedback::table
            .left_join(users::table)
            .select((Feedback::as_select(), users::username.nullable()))
            .order((feedback::created_at.desc(), feedback::id.desc()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
