//! Feedback submission and the public review listing.
//!
//! Entries carry both the legacy free-text string and typed
//! `rating`/`experience`/`comment` columns. Writes keep the two in step;
//! reads prefer the typed columns and fall back to parsing the text for
//! rows written before those columns existed.

use jiff::civil::DateTime;

use crate::error::{AppError, AppResult};
use crate::models::{Experience, Feedback, NewFeedback};
use crate::repositories::FeedbackRepository;
use crate::utils::feedback_text;

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

/// A feedback form as received. Every part is optional; see
/// [`FeedbackService::prepare`] for the rules.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSubmission {
    pub user_id: Option<i32>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub experience: Option<String>,
    pub comment: Option<String>,
}

/// A stored entry as shown on the reviews page.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: Option<String>,
    pub text: String,
    pub rating: Option<i32>,
    pub experience: Option<Experience>,
    pub comment: Option<String>,
    pub stars: i32,
    pub description: String,
    pub created_at: DateTime,
}

impl Review {
    fn from_row(entry: Feedback, username: Option<String>) -> Self {
        let stars = feedback_text::stars(entry.rating, &entry.body);
        let description = feedback_text::description(entry.comment.as_deref(), &entry.body);
        Self {
            id: entry.id,
            user_id: entry.user_id,
            username,
            text: entry.body,
            rating: entry.rating,
            experience: entry.experience,
            comment: entry.comment,
            stars,
            description,
            created_at: entry.created_at.to_jiff(),
        }
    }
}

#[derive(Clone)]
pub struct FeedbackService {
    repo: FeedbackRepository,
}

impl FeedbackService {
    pub fn new(repo: FeedbackRepository) -> Self {
        Self { repo }
    }

    /// Validates a submission and stores it. `user_id` may be absent for
    /// anonymous feedback.
    pub async fn create(&self, submission: FeedbackSubmission) -> AppResult<Feedback> {
        let new_feedback = Self::prepare(submission)?;
        let entry = self.repo.create(new_feedback).await?;
        tracing::info!(
            feedback_id = entry.id,
            user_id = ?entry.user_id,
            rating = ?entry.rating,
            "feedback submitted"
        );
        Ok(entry)
    }

    /// All entries, newest first, with stars and description resolved.
    pub async fn list_all(&self) -> AppResult<Vec<Review>> {
        let rows = self.repo.list_with_authors().await?;
        Ok(rows
            .into_iter()
            .map(|(entry, username)| Review::from_row(entry, username))
            .collect())
    }

    /// Turns a submission into the row to insert.
    ///
    /// - Empty text and no typed rating is rejected.
    /// - Text only: the legacy string is parsed once to fill the typed
    ///   columns. Out-of-range ratings and unknown experiences stay NULL.
    /// - Typed fields only: the legacy string is composed from them.
    /// - Both: stored as given.
    pub fn prepare(submission: FeedbackSubmission) -> AppResult<NewFeedback> {
        let text = submission
            .text
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        let comment = submission.comment.filter(|c| !c.trim().is_empty());

        if text.is_empty() && submission.rating.is_none() {
            return Err(AppError::Validation {
                field: "feedback".to_string(),
                reason: "Feedback is required.".to_string(),
            });
        }

        if let Some(rating) = submission.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(AppError::Validation {
                    field: "rating".to_string(),
                    reason: format!("Rating must be between {} and {}.", MIN_RATING, MAX_RATING),
                });
            }
        }

        let experience = match submission.experience.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Experience::parse(raw).ok_or_else(|| AppError::Validation {
                field: "experience".to_string(),
                reason: format!(
                    "Experience must be one of {}.",
                    Experience::ALL.map(|e| e.as_str()).join(", ")
                ),
            })?),
        };

        let has_typed = submission.rating.is_some() || experience.is_some() || comment.is_some();

        if !has_typed {
            let parts = feedback_text::parse(&text);
            return Ok(NewFeedback {
                user_id: submission.user_id,
                rating: parts
                    .rating
                    .filter(|r| (MIN_RATING..=MAX_RATING).contains(r)),
                experience: parts.experience.as_deref().and_then(Experience::parse),
                comment: parts.comment,
                body: text,
            });
        }

        let body = if text.is_empty() {
            feedback_text::compose(
                submission.rating,
                experience.map(|e| e.as_str()),
                comment.as_deref(),
            )
        } else {
            text
        };

        Ok(NewFeedback {
            user_id: submission.user_id,
            body,
            rating: submission.rating,
            experience,
            comment,
        })
    }
}
