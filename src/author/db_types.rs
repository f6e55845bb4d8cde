use crate::schema::author as AuthorTable;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Creation timestamps travel over the wire in this fixed pattern
/// (dd.MM.yyyy HH:mm:ss, server-default timezone).
pub const CREATED_AT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub fn format_created_at(created_at: &NaiveDateTime) -> String {
    created_at.format(CREATED_AT_FORMAT).to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, QueryableByName, Identifiable)]
#[diesel(table_name = AuthorTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthorRow {
    pub id: i32,
    pub author_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = AuthorTable)]
pub struct NewAuthorRow {
    pub author_name: String,
    pub created_at: NaiveDateTime,
}

/// Wire shape for POST /author/add; the response echoes the request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub author_name: String,
}

/// Wire shape for GET /author/{id}.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetails {
    pub author_name: String,
    pub created_at: String,
}

impl From<AuthorRow> for AuthorDetails {
    fn from(row: AuthorRow) -> Self {
        Self {
            created_at: format_created_at(&row.created_at),
            author_name: row.author_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_created_at_format() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_created_at(&epoch), "01.01.1970 00:00:00");

        let afternoon = NaiveDate::from_ymd_opt(2024, 12, 3)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(format_created_at(&afternoon), "03.12.2024 15:04:05");
    }

    #[test]
    fn test_author_record_wire_name() {
        let record = AuthorRecord {
            author_name: "Круглов Квадрат Тестович".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "authorName": "Круглов Квадрат Тестович" })
        );
    }
}
