use crate::budget::db_types::{BudgetRecord, BudgetRow, NewBudgetRow};
use anyhow::Result;
use diesel::PgConnection;
use diesel::prelude::*;

pub fn insert_record(conn: &mut PgConnection, record: &BudgetRecord) -> Result<BudgetRow> {
    use crate::schema::budget::table as BudgetTable;

    let row = diesel::insert_into(BudgetTable)
        .values(&NewBudgetRow::from(record))
        .get_result::<BudgetRow>(conn)?;

    Ok(row)
}

/// All records for a year, in storage order; the stats pipeline imposes its
/// own ordering downstream.
pub fn records_for_year(conn: &mut PgConnection, target_year: i32) -> Result<Vec<BudgetRow>> {
    use crate::schema::budget::dsl::*;

    let rows = budget
        .filter(year.eq(target_year))
        .load::<BudgetRow>(conn)?;

    Ok(rows)
}
