use std::sync::OnceLock;

use regex::Regex;

/// Structured view of a PostgreSQL constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Table the constraint belongs to (`users`, `vehicles`, ...).
    pub entity: String,
    /// Offending column.
    pub field: String,
    /// Offending value when PostgreSQL reported one.
    pub value: Option<String>,
}

/// Extracts table/column/value triples from PostgreSQL error text.
///
/// Postgres reports constraint failures as free text plus an optional
/// constraint name, e.g.
///
/// ```text
/// duplicate key value violates unique constraint "users_email_key"
/// DETAIL: Key (email)=(a@b.c) already exists.
/// ```
///
/// The constraint name is authoritative when it follows the default
/// `<table>_<column>_<suffix>` naming that our migrations rely on; the
/// message text is used as a fallback.
pub struct ConstraintParser;

struct Patterns {
    key_value: Regex,
    column: Regex,
    relation: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

// Suffixes PostgreSQL appends to generated constraint names.
const SUFFIXES: [&str; 4] = ["_key", "_fkey", "_check", "_not_null"];

impl ConstraintParser {
    fn patterns() -> &'static Patterns {
        PATTERNS.get_or_init(|| Patterns {
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid key/value regex"),
            column: Regex::new(r#"column "([^"]+)""#).expect("valid column regex"),
            relation: Regex::new(r#"(?:relation|table) "([^"]+)""#).expect("valid relation regex"),
        })
    }

    /// Unique violation: entity and field come from the constraint name,
    /// the value from the `Key (..)=(..)` detail.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<ConstraintViolation> {
        let key_value = Self::key_value(message);

        if let Some((entity, field)) = constraint_name.and_then(Self::split_constraint_name) {
            return Some(ConstraintViolation {
                entity,
                field,
                value: key_value.map(|(_, v)| v),
            });
        }

        let (field, value) = key_value?;
        Some(ConstraintViolation {
            entity: Self::relation(message).unwrap_or_else(|| "resource".to_string()),
            field,
            value: Some(value),
        })
    }

    /// Foreign key violation on insert/update, e.g. a vehicle pointing at a
    /// user id that does not exist.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<ConstraintViolation> {
        // Same shape as a unique violation: "Key (user_id)=(999) is not present".
        Self::parse_unique_violation(message, constraint_name)
    }

    /// Not-null and check violations only name a column.
    pub fn parse_column_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<ConstraintViolation> {
        let from_name = constraint_name.and_then(Self::split_constraint_name);

        let field = Self::column(message).or_else(|| from_name.as_ref().map(|(_, f)| f.clone()))?;
        let entity = Self::relation(message)
            .or_else(|| from_name.map(|(e, _)| e))
            .unwrap_or_else(|| "resource".to_string());

        Some(ConstraintViolation {
            entity,
            field,
            value: None,
        })
    }

    /// Splits `<table>_<column>_<suffix>` into `(table, column)`.
    ///
    /// Table names in this schema never contain underscores, so everything
    /// between the first underscore and the suffix is the column
    /// (`vehicles_user_id_fkey` -> `("vehicles", "user_id")`).
    pub fn split_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = SUFFIXES
            .iter()
            .find_map(|suffix| constraint_name.strip_suffix(suffix))?;
        let (entity, field) = stem.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    fn key_value(message: &str) -> Option<(String, String)> {
        let caps = Self::patterns().key_value.captures(message)?;
        Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string()))
    }

    fn column(message: &str) -> Option<String> {
        Self::patterns()
            .column
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn relation(message: &str) -> Option<String> {
        Self::patterns()
            .relation
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_on_user_email() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(ana@example.com) already exists.";
        let parsed = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            parsed,
            Some(ConstraintViolation {
                entity: "users".to_string(),
                field: "email".to_string(),
                value: Some("ana@example.com".to_string()),
            })
        );
    }

    #[test]
    fn test_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (username)=(ana) already exists.";
        let parsed = ConstraintParser::parse_unique_violation(message, None).unwrap();
        assert_eq!(parsed.entity, "resource");
        assert_eq!(parsed.field, "username");
        assert_eq!(parsed.value.as_deref(), Some("ana"));
    }

    #[test]
    fn test_foreign_key_violation_keeps_multi_part_column() {
        let message = "insert or update on table \"vehicles\" violates foreign key constraint \"vehicles_user_id_fkey\"\nDETAIL: Key (user_id)=(999) is not present in table \"users\".";
        let parsed =
            ConstraintParser::parse_foreign_key_violation(message, Some("vehicles_user_id_fkey"))
                .unwrap();
        assert_eq!(parsed.entity, "vehicles");
        assert_eq!(parsed.field, "user_id");
        assert_eq!(parsed.value.as_deref(), Some("999"));
    }

    #[test]
    fn test_not_null_violation_reads_relation() {
        let message =
            "null value in column \"vehicle_number\" of relation \"vehicles\" violates not-null constraint";
        let parsed = ConstraintParser::parse_column_violation(message, None).unwrap();
        assert_eq!(parsed.entity, "vehicles");
        assert_eq!(parsed.field, "vehicle_number");
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_check_violation_falls_back_to_constraint_name() {
        let message = "new row violates check constraint \"feedback_rating_check\"";
        let parsed =
            ConstraintParser::parse_column_violation(message, Some("feedback_rating_check")).unwrap();
        assert_eq!(parsed.entity, "feedback");
        assert_eq!(parsed.field, "rating");
    }

    #[test]
    fn test_split_constraint_name() {
        assert_eq!(
            ConstraintParser::split_constraint_name("users_username_key"),
            Some(("users".to_string(), "username".to_string()))
        );
        assert_eq!(
            ConstraintParser::split_constraint_name("feedback_user_id_fkey"),
            Some(("feedback".to_string(), "user_id".to_string()))
        );
        assert_eq!(ConstraintParser::split_constraint_name("users_pkey"), None);
        assert_eq!(ConstraintParser::split_constraint_name("_key"), None);
    }

    #[test]
    fn test_unrelated_message_is_not_parsed() {
        let message = "canceling statement due to statement timeout";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_column_violation(message, None), None);
    }
}
