use crate::author::db_types::{AuthorRow, NewAuthorRow};
use anyhow::Result;
use chrono::NaiveDateTime;
use diesel::PgConnection;
use diesel::prelude::*;
use std::collections::HashMap;

pub fn insert_author(
    conn: &mut PgConnection,
    name: &str,
    created_at: NaiveDateTime,
) -> Result<AuthorRow> {
    use crate::schema::author::table as AuthorTable;

    let row = diesel::insert_into(AuthorTable)
        .values(&NewAuthorRow {
            author_name: name.to_string(),
            created_at,
        })
        .get_result::<AuthorRow>(conn)?;

    Ok(row)
}

pub fn find_author(conn: &mut PgConnection, author_id: i32) -> Result<Option<AuthorRow>> {
    use crate::schema::author::dsl::*;

    let row = author
        .filter(id.eq(author_id))
        .get_result::<AuthorRow>(conn)
        .optional()?;

    Ok(row)
}

/// Batched form of the per-record author lookup used by the stats path; one
/// query per distinct set of ids instead of one per record.
pub fn authors_by_ids(
    conn: &mut PgConnection,
    ids: &[i32],
) -> Result<HashMap<i32, AuthorRow>> {
    use crate::schema::author::dsl::*;

    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = author
        .filter(id.eq_any(ids))
        .load::<AuthorRow>(conn)?;

    Ok(rows.into_iter().map(|row| (row.id, row)).collect())
}
