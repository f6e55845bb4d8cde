use crate::author::db_types::{AuthorRow, format_created_at};
use crate::budget::db_types::{BudgetRecordWithAuthor, BudgetRow, BudgetYearStatsResponse};
use std::collections::{BTreeMap, HashMap};

/// Pagination and filter arguments for the year-stats pipeline.
#[derive(Debug, Clone)]
pub struct YearStatsQuery {
    pub limit: i64,
    pub offset: i64,
    pub author_name: Option<String>,
}

/// Composes the year-stats response from the rows of one year and the
/// authors they reference.
///
/// Pipeline order matters: enrichment runs first, the author-name filter
/// applies to enriched records, `total` and `totalByType` cover the whole
/// filtered set, and only `items` is sorted and paginated.
pub fn compose_year_stats(
    rows: Vec<BudgetRow>,
    authors: &HashMap<i32, AuthorRow>,
    query: &YearStatsQuery,
) -> BudgetYearStatsResponse {
    let enriched = rows
        .into_iter()
        .map(|row| enrich(row, authors))
        .collect::<Vec<_>>();

    let mut filtered = match &query.author_name {
        None => enriched,
        Some(fragment) => {
            let needle = fragment.to_lowercase();
            enriched
                .into_iter()
                .filter(|item| {
                    item.author_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
                })
                .collect()
        }
    };

    let total = filtered.len() as i64;

    let mut total_by_type: BTreeMap<String, i64> = BTreeMap::new();
    for item in &filtered {
        *total_by_type
            .entry(item.budget_type.as_str().to_string())
            .or_insert(0) += i64::from(item.amount);
    }

    // Month ascending, amount descending; stable, so exact ties keep their
    // storage order within an invocation.
    filtered.sort_by(|a, b| a.month.cmp(&b.month).then(b.amount.cmp(&a.amount)));

    let items = filtered
        .into_iter()
        .skip(query.offset.max(0) as usize)
        .take(query.limit.max(0) as usize)
        .collect();

    BudgetYearStatsResponse {
        total,
        total_by_type,
        items,
    }
}

fn enrich(row: BudgetRow, authors: &HashMap<i32, AuthorRow>) -> BudgetRecordWithAuthor {
    // A dangling author id degrades to absent author fields rather than
    // failing the whole request.
    let author = row.author_id.and_then(|author_id| authors.get(&author_id));

    BudgetRecordWithAuthor {
        year: row.year,
        month: row.month,
        amount: row.amount,
        budget_type: row.budget_type,
        author_name: author.map(|a| a.author_name.clone()),
        author_created_at: author.map(|a| format_created_at(&a.created_at)),
    }
}
