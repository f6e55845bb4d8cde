use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    api::{error::ApiError, validation},
    author::operations::authors_by_ids,
    budget::{
        db_types::{BudgetRecord, BudgetYearStatsResponse},
        operations,
        stats::{YearStatsQuery, compose_year_stats},
    },
    utils::{app_config::AppConfig, db},
};

/// POST /budget/add - Append a budget record
pub async fn add_budget_record(
    State(app_config): State<AppConfig>,
    Json(body): Json<BudgetRecord>,
) -> Result<(StatusCode, Json<BudgetRecord>), ApiError> {
    validation::validate_budget_record(&body)?;

    let stored = db::with_transaction(&app_config.pool, |conn| {
        operations::insert_record(conn, &body)
    })
    .map_err(|e| ApiError::database_error(format!("Failed to store budget record: {}", e)))?;

    Ok((StatusCode::OK, Json(BudgetRecord::from(stored))))
}

/// Query parameters for GET /budget/year/{year}/stats
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStatsParams {
    pub limit: i64,
    pub offset: i64,
    pub author_name: Option<String>,
}

/// GET /budget/year/{year}/stats - Yearly totals plus a paginated, sorted,
/// optionally author-filtered listing
pub async fn get_year_stats(
    State(app_config): State<AppConfig>,
    Path(year): Path<i32>,
    Query(params): Query<YearStatsParams>,
) -> Result<(StatusCode, Json<BudgetYearStatsResponse>), ApiError> {
    let query = YearStatsQuery {
        limit: params.limit,
        offset: params.offset,
        author_name: params.author_name,
    };
    validation::validate_stats_query(&query)?;

    // One transaction, so the year query and the author lookup read the same
    // snapshot.
    let stats = db::with_transaction(&app_config.pool, |conn| {
        let rows = operations::records_for_year(conn, year)?;

        let mut author_ids: Vec<i32> = rows.iter().filter_map(|row| row.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors = authors_by_ids(conn, &author_ids)?;

        Ok(compose_year_stats(rows, &authors, &query))
    })
    .map_err(|e| ApiError::database_error(format!("Failed to load year stats: {}", e)))?;

    Ok((StatusCode::OK, Json(stats)))
}
