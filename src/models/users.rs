use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/*
id UUID PRIMARY KEY,
name TEXT NOT NULL,
age INT NOT NULL,
gender TEXT NOT NULL,
sexuality TEXT NOT NULL,
desire TEXT NOT NULL,
lat DOUBLE PRECISION,
lng DOUBLE PRECISION,
created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
last_login TIMESTAMPTZ,

 */
// Profile rows are written by the account service; this subsystem only
// reads them.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub sexuality: String,
    pub desire: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// A discovery listing entry: the profile row plus the distance from the
/// requester in km, `null` when either side has no stored coordinates.
#[derive(Debug, Serialize)]
pub struct CandidateUser {
    #[serde(flatten)]
    pub user: User,
    pub distance: Option<f64>,
}

/// Conjunction of optional exact-match predicates over the users table.
/// Absent fields impose no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateFilters {
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub sexuality: Option<String>,
    pub desire: Option<String>,
}

impl CandidateFilters {
    /// Renders the active predicates as a `WHERE` clause of `$n`
    /// placeholders numbered from 1, in the same order the query layer
    /// binds values. Empty string when no filter is set.
    pub fn where_clause(&self) -> String {
        let mut predicates = Vec::new();
        if self.gender.is_some() {
            predicates.push(format!("gender = ${}", predicates.len() + 1));
        }
        if self.age.is_some() {
            predicates.push(format!("age = ${}", predicates.len() + 1));
        }
        if self.sexuality.is_some() {
            predicates.push(format!("sexuality = ${}", predicates.len() + 1));
        }
        if self.desire.is_some() {
            predicates.push(format!("desire = ${}", predicates.len() + 1));
        }

        if predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", predicates.join(" AND "))
        }
    }

    /// Number of placeholders `where_clause` emitted; further parameters
    /// (LIMIT/OFFSET) continue the numbering from here.
    pub fn param_count(&self) -> usize {
        [
            self.gender.is_some(),
            self.age.is_some(),
            self.sexuality.is_some(),
            self.desire.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Listing metadata returned alongside every discovery page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_users: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(total_users: i64, current_page: i64, per_page: i64) -> Self {
        let total_pages = if total_users == 0 {
            0
        } else {
            (total_users + per_page - 1) / per_page
        };
        Self {
            total_users,
            total_pages,
            current_page,
            per_page,
        }
    }

    /// Offset of the current page's slice, 1-indexed pages.
    pub fn offset(&self) -> i64 {
        (self.current_page - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_impose_no_constraint() {
        let filters = CandidateFilters::default();
        assert_eq!(filters.where_clause(), "");
        assert_eq!(filters.param_count(), 0);
    }

    #[test]
    fn full_filter_set_numbers_placeholders_in_bind_order() {
        let filters = CandidateFilters {
            gender: Some("male".to_string()),
            age: Some(30),
            sexuality: Some("straight".to_string()),
            desire: Some("friendship".to_string()),
        };
        assert_eq!(
            filters.where_clause(),
            " WHERE gender = $1 AND age = $2 AND sexuality = $3 AND desire = $4"
        );
        assert_eq!(filters.param_count(), 4);
    }

    #[test]
    fn partial_filters_renumber_from_one() {
        let filters = CandidateFilters {
            gender: None,
            age: Some(25),
            sexuality: None,
            desire: Some("dating".to_string()),
        };
        assert_eq!(filters.where_clause(), " WHERE age = $1 AND desire = $2");
        assert_eq!(filters.param_count(), 2);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let pagination = Pagination::new(25, 2, 10);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.offset(), 10);

        assert_eq!(Pagination::new(30, 3, 10).total_pages, 3);
        assert_eq!(Pagination::new(31, 1, 10).total_pages, 4);
        assert_eq!(Pagination::new(0, 1, 10).total_pages, 0);
    }

    #[test]
    fn first_page_starts_at_offset_zero() {
        assert_eq!(Pagination::new(25, 1, 10).offset(), 0);
    }
}
