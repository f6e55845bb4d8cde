use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Local;

use crate::{
    api::{error::ApiError, validation},
    author::{
        db_types::{AuthorDetails, AuthorRecord},
        operations,
    },
    utils::{app_config::AppConfig, db},
};

/// POST /author/add - Append an author
pub async fn add_author(
    State(app_config): State<AppConfig>,
    Json(body): Json<AuthorRecord>,
) -> Result<(StatusCode, Json<AuthorRecord>), ApiError> {
    validation::validate_author_name(&body.author_name)?;

    let created_at = Local::now().naive_local();
    let stored = db::with_transaction(&app_config.pool, |conn| {
        operations::insert_author(conn, &body.author_name, created_at)
    })
    .map_err(|e| ApiError::database_error(format!("Failed to store author: {}", e)))?;

    Ok((
        StatusCode::OK,
        Json(AuthorRecord {
            author_name: stored.author_name,
        }),
    ))
}

/// GET /author/{id} - Look up an author by id
pub async fn get_author_by_id(
    State(app_config): State<AppConfig>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<AuthorDetails>), ApiError> {
    let row = db::with_transaction(&app_config.pool, |conn| operations::find_author(conn, id))
        .map_err(|e| ApiError::database_error(format!("Failed to load author: {}", e)))?;

    match row {
        Some(row) => Ok((StatusCode::OK, Json(AuthorDetails::from(row)))),
        None => Err(ApiError::not_found("Author")),
    }
}
