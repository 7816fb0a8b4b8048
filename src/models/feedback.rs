use std::io::Write;

use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};

/// How the user rated the overall charging experience.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::Excellent,
        Experience::Good,
        Experience::Average,
        Experience::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Excellent => "excellent",
            Experience::Good => "good",
            Experience::Average => "average",
            Experience::Poor => "poor",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(raw))
    }
}

impl diesel::query_builder::QueryId for Experience {
    type QueryId = Experience;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for Experience {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for Experience {
    fn from_sql(bytes: <Pg as diesel::backend::Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Self::parse(&s).ok_or_else(|| format!("Unrecognized experience: {}", s).into())
    }
}

/// Feedback row. `body` is the legacy free-text column (`feedback` in SQL);
/// the typed columns are NULL for rows written before they existed.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Feedback {
    pub id: i32,
    pub user_id: Option<i32>,
    pub body: String,
    pub rating: Option<i32>,
    pub experience: Option<Experience>,
    pub comment: Option<String>,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::feedback)]
pub struct NewFeedback {
    pub user_id: Option<i32>,
    pub body: String,
    pub rating: Option<i32>,
    pub experience: Option<Experience>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_parse_ignores_case() {
        assert_eq!(Experience::parse("Good"), Some(Experience::Good));
        assert_eq!(Experience::parse(" POOR "), Some(Experience::Poor));
        assert_eq!(Experience::parse("great"), None);
    }
}
