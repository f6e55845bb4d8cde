use anyhow::Result;
use diesel::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

pub fn get_conn(pool: &DbPool) -> Result<DbConn> {
    let conn = pool.get()?;

    Ok(conn)
}

/// Unit of work: checks out a connection and runs `f` inside one
/// transaction. Commits on Ok, rolls back on Err, on every exit path.
pub fn with_transaction<T, F>(pool: &DbPool, f: F) -> Result<T>
where
    F: FnOnce(&mut PgConnection) -> Result<T>,
{
    let mut conn = get_conn(pool)?;

    conn.transaction(|conn| f(conn))
}
