use super::schema::{self, Columns, Conf};
use crate::Result;
use rusqlite::{params, Connection};

pub fn select(conn: &Connection) -> Result<Conf> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
        "#,
        projection = Conf::projection(),
        table = schema::TABLE_NAME,
    );
    conn.prepare(&sql)?
        .query_row((), Conf::mapper())
        .map_err(Into::into)
}

pub fn set_top_users_limit(limit: u32, conn: &Connection) -> Result<Conf> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {top_users_limit} = ?1
        "#,
        table = schema::TABLE_NAME,
        top_users_limit = Columns::TopUsersLimit.as_str(),
    );
    conn.execute(&sql, params![limit])?;
    select(conn)
}

pub fn set_default_utc_offset_minutes(minutes: i32, conn: &Connection) -> Result<Conf> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {default_utc_offset_minutes} = ?1
        "#,
        table = schema::TABLE_NAME,
        default_utc_offset_minutes = Columns::DefaultUtcOffsetMinutes.as_str(),
    );
    conn.execute(&sql, params![minutes])?;
    select(conn)
}
