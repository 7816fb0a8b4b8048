//! The legacy single-string feedback convention:
//! `"Rating: 4, Experience: good, Comment: Fast charger"`.
//!
//! Rows written before the typed `rating`/`experience`/`comment` columns
//! existed only carry this string, so it is parsed once on write and used
//! as a fallback on read.

use std::sync::OnceLock;

use regex::Regex;

/// Stars shown when neither a typed nor a parseable rating exists.
pub const DEFAULT_STARS: i32 = 5;

/// Pieces recovered from a legacy feedback string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackParts {
    pub rating: Option<i32>,
    pub experience: Option<String>,
    pub comment: Option<String>,
}

struct Patterns {
    rating: Regex,
    experience: Regex,
    comment: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        rating: Regex::new(r"(?i)Rating:\s*(\d+)").expect("valid rating regex"),
        experience: Regex::new(r"(?i)Experience:\s*([^,]+)").expect("valid experience regex"),
        comment: Regex::new(r"(?i)Comment:\s*([^,]+)").expect("valid comment regex"),
    })
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Splits a legacy string into its labelled parts. Labels may appear in any
/// order; missing or malformed parts are `None`.
pub fn parse(text: &str) -> FeedbackParts {
    let p = patterns();
    FeedbackParts {
        rating: capture(&p.rating, text).and_then(|r| r.parse().ok()),
        experience: capture(&p.experience, text),
        comment: capture(&p.comment, text),
    }
}

/// Builds the legacy string from typed values, skipping absent parts.
pub fn compose(rating: Option<i32>, experience: Option<&str>, comment: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(rating) = rating {
        parts.push(format!("Rating: {}", rating));
    }
    if let Some(experience) = experience.map(str::trim).filter(|s| !s.is_empty()) {
        parts.push(format!("Experience: {}", experience));
    }
    if let Some(comment) = comment.map(str::trim).filter(|s| !s.is_empty()) {
        parts.push(format!("Comment: {}", comment));
    }
    parts.join(", ")
}

/// Typed rating, else the parsed `Rating:` value, else [`DEFAULT_STARS`].
pub fn stars(rating: Option<i32>, text: &str) -> i32 {
    rating
        .or_else(|| parse(text).rating)
        .unwrap_or(DEFAULT_STARS)
}

/// Typed comment, else parsed `Comment:`, else parsed `Experience:`, else
/// the whole trimmed string.
pub fn description(comment: Option<&str>, text: &str) -> String {
    if let Some(comment) = comment.map(str::trim).filter(|s| !s.is_empty()) {
        return comment.to_string();
    }

    let parsed = parse(text);
    parsed
        .comment
        .or(parsed.experience)
        .unwrap_or_else(|| text.trim().to_string())
}
