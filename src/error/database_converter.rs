use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

const VALUE_TOO_LONG: &str = "value too long for type";

/// Maps Diesel failures onto `AppError` so repositories can just use `?`.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error, tagging opaque failures with `operation`.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::not_found("resource", "id", "unknown"),
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint = info.constraint_name();

        let converted = match kind {
            DatabaseErrorKind::UniqueViolation => {
                ConstraintParser::parse_unique_violation(message, constraint).map(|v| {
                    AppError::Duplicate {
                        entity: v.entity,
                        field: v.field,
                        value: v.value.unwrap_or_default(),
                    }
                })
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                ConstraintParser::parse_foreign_key_violation(message, constraint).map(|v| {
                    AppError::Validation {
                        reason: match v.value {
                            Some(value) => {
                                format!("{} {} does not reference an existing row.", v.field, value)
                            }
                            None => format!("{} does not reference an existing row.", v.field),
                        },
                        field: v.field,
                    }
                })
            }
            DatabaseErrorKind::NotNullViolation => {
                ConstraintParser::parse_column_violation(message, constraint).map(|v| {
                    AppError::Validation {
                        reason: format!("{} is required for {}.", v.field, v.entity),
                        field: v.field,
                    }
                })
            }
            DatabaseErrorKind::CheckViolation => {
                ConstraintParser::parse_column_violation(message, constraint).map(|v| {
                    AppError::Validation {
                        reason: format!("{} violates a check on {}.", v.field, v.entity),
                        field: v.field,
                    }
                })
            }
            // SQLSTATE 22001 has no dedicated kind
            _ if message.starts_with(VALUE_TOO_LONG) => Some(AppError::Validation {
                field: "input".to_string(),
                reason: "A value is longer than allowed.".to_string(),
            }),
            _ => None,
        };

        converted.unwrap_or_else(|| AppError::Database {
            operation: operation.to_string(),
            source: anyhow::anyhow!("{:?}: {}", kind, message),
        })
    }
}
