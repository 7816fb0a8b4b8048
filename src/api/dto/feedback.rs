use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::Experience;
use crate::services::{FeedbackSubmission, Review};

/// Feedback form. Either the legacy `feedback` string or a typed `rating`
/// must be present; the service enforces the remaining rules.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "user_id": 1,
    "feedback": "Rating: 4, Experience: good, Comment: Fast charger"
}))]
pub struct CreateFeedbackRequest {
    /// Absent for anonymous feedback.
    pub user_id: Option<i32>,
    /// Legacy `"Rating: N, Experience: E, Comment: C"` string.
    pub feedback: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: Option<i32>,
    /// `excellent`, `good`, `average` or `poor`.
    pub experience: Option<String>,
    pub comment: Option<String>,
}

impl From<CreateFeedbackRequest> for FeedbackSubmission {
    fn from(request: CreateFeedbackRequest) -> Self {
        Self {
            user_id: request.user_id,
            text: request.feedback,
            rating: request.rating,
            experience: request.experience,
            comment: request.comment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    /// `None` for anonymous entries.
    pub username: Option<String>,
    /// The stored legacy string.
    pub feedback: String,
    pub rating: Option<i32>,
    pub experience: Option<Experience>,
    pub comment: Option<String>,
    /// Typed rating, else parsed from `feedback`, else 5.
    #[schema(example = 4)]
    pub stars: i32,
    #[schema(example = "Fast charger")]
    pub description: String,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            username: review.username,
            feedback: review.text,
            rating: review.rating,
            experience: review.experience,
            comment: review.comment,
            stars: review.stars,
            description: review.description,
            created_at: format_timestamp(&review.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackListResponse {
    pub feedbacks: Vec<ReviewResponse>,
}
