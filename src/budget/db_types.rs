use crate::schema::budget as BudgetTable;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::BudgetType"]
pub enum BudgetType {
    Income,
    Expense,
    Commission,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Income => "Income",
            BudgetType::Expense => "Expense",
            BudgetType::Commission => "Commission",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, QueryableByName, Identifiable)]
#[diesel(table_name = BudgetTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BudgetRow {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: BudgetType,
    pub author_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = BudgetTable)]
pub struct NewBudgetRow {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: BudgetType,
    pub author_id: Option<i32>,
}

/// Wire shape for POST /budget/add; the response echoes the request, no id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i32>,
}

impl From<BudgetRow> for BudgetRecord {
    fn from(row: BudgetRow) -> Self {
        Self {
            year: row.year,
            month: row.month,
            amount: row.amount,
            budget_type: row.budget_type,
            author_id: row.author_id,
        }
    }
}

impl From<&BudgetRecord> for NewBudgetRow {
    fn from(record: &BudgetRecord) -> Self {
        Self {
            year: record.year,
            month: record.month,
            amount: record.amount,
            budget_type: record.budget_type,
            author_id: record.author_id,
        }
    }
}

/// Stats listing item: a budget record enriched with the resolved author
/// name and formatted creation date. Both fields stay absent for records
/// without an author (or whose author id no longer resolves).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecordWithAuthor {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetYearStatsResponse {
    pub total: i64,
    pub total_by_type: BTreeMap<String, i64>,
    pub items: Vec<BudgetRecordWithAuthor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_budget_record_round_trip() {
        let record = BudgetRecord {
            year: 2020,
            month: 5,
            amount: 10,
            budget_type: BudgetType::Income,
            author_id: Some(1),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "year": 2020, "month": 5, "amount": 10, "type": "Income", "authorId": 1 })
        );

        let parsed: BudgetRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_author_id_omitted_when_absent() {
        let record = BudgetRecord {
            year: 2030,
            month: 1,
            amount: 1,
            budget_type: BudgetType::Expense,
            author_id: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("authorId").is_none());

        let parsed: BudgetRecord =
            serde_json::from_value(json!({ "year": 2030, "month": 1, "amount": 1, "type": "Expense" }))
                .unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_budget_type_names() {
        assert_eq!(
            serde_json::to_value(BudgetType::Commission).unwrap(),
            json!("Commission")
        );
        assert_eq!(BudgetType::Income.as_str(), "Income");
        assert_eq!(BudgetType::Expense.as_str(), "Expense");
    }

    #[test]
    fn test_empty_stats_serialize_as_empty_map_and_list() {
        let stats = BudgetYearStatsResponse {
            total: 0,
            total_by_type: BTreeMap::new(),
            items: Vec::new(),
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            json!({ "total": 0, "totalByType": {}, "items": [] })
        );
    }
}
