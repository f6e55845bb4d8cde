use crate::api::error::ApiError;
use crate::budget::db_types::BudgetRecord;
use crate::budget::stats::YearStatsQuery;

pub const MIN_YEAR: i32 = 1900;
pub const MIN_AUTHOR_NAME_LEN: usize = 2;

pub fn validate_budget_record(record: &BudgetRecord) -> Result<(), ApiError> {
    if record.year < MIN_YEAR {
        return Err(ApiError::bad_request(format!(
            "year must be {} or later",
            MIN_YEAR
        )));
    }
    if !(1..=12).contains(&record.month) {
        return Err(ApiError::bad_request("month must be between 1 and 12"));
    }
    if record.amount < 1 {
        return Err(ApiError::bad_request("amount must be at least 1"));
    }

    Ok(())
}

pub fn validate_author_name(name: &str) -> Result<(), ApiError> {
    // Character count, not byte length; author names are not ASCII-only.
    if name.chars().count() < MIN_AUTHOR_NAME_LEN {
        return Err(ApiError::bad_request(format!(
            "authorName must be at least {} characters",
            MIN_AUTHOR_NAME_LEN
        )));
    }

    Ok(())
}

pub fn validate_stats_query(query: &YearStatsQuery) -> Result<(), ApiError> {
    if query.limit < 0 {
        return Err(ApiError::bad_request("limit must not be negative"));
    }
    if query.offset < 0 {
        return Err(ApiError::bad_request("offset must not be negative"));
    }
    if let Some(fragment) = &query.author_name {
        validate_author_name(fragment)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::db_types::BudgetType;

    fn record(year: i32, month: i32, amount: i32) -> BudgetRecord {
        BudgetRecord {
            year,
            month,
            amount,
            budget_type: BudgetType::Income,
            author_id: None,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_budget_record(&record(2020, 5, 10)).is_ok());
        assert!(validate_budget_record(&record(1900, 1, 1)).is_ok());
        assert!(validate_budget_record(&record(2030, 12, 1)).is_ok());
    }

    #[test]
    fn test_year_before_1900_rejected() {
        assert!(validate_budget_record(&record(1899, 5, 10)).is_err());
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        assert!(validate_budget_record(&record(2020, -5, 5)).is_err());
        assert!(validate_budget_record(&record(2020, 0, 5)).is_err());
        assert!(validate_budget_record(&record(2020, 13, 5)).is_err());
        assert!(validate_budget_record(&record(2020, 15, 5)).is_err());
    }

    #[test]
    fn test_amount_below_one_rejected() {
        assert!(validate_budget_record(&record(2020, 5, 0)).is_err());
        assert!(validate_budget_record(&record(2020, 5, -10)).is_err());
    }

    #[test]
    fn test_author_name_length_counts_characters() {
        assert!(validate_author_name("Юй").is_ok());
        assert!(validate_author_name("Я").is_err());
        assert!(validate_author_name("").is_err());
        assert!(validate_author_name("Круглов Квадрат Тестович").is_ok());
    }

    #[test]
    fn test_stats_query_bounds() {
        let ok = YearStatsQuery {
            limit: 3,
            offset: 0,
            author_name: Some("Кв".to_string()),
        };
        assert!(validate_stats_query(&ok).is_ok());

        let negative_limit = YearStatsQuery {
            limit: -1,
            offset: 0,
            author_name: None,
        };
        assert!(validate_stats_query(&negative_limit).is_err());

        let negative_offset = YearStatsQuery {
            limit: 1,
            offset: -1,
            author_name: None,
        };
        assert!(validate_stats_query(&negative_offset).is_err());

        let short_filter = YearStatsQuery {
            limit: 1,
            offset: 0,
            author_name: Some("К".to_string()),
        };
        assert!(validate_stats_query(&short_filter).is_err());
    }
}
