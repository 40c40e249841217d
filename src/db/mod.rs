pub mod conf;
pub mod migration;
pub mod saved_report;

use crate::{filesystem::data_dir_file_path, Result};
use deadpool_sqlite::{Config, Hook, Pool, Runtime};
use rusqlite::Connection;
use std::sync::Arc;
use tracing::warn;

pub const DB_FILE_NAME: &str = "booked-reports.db";

pub fn open_connection() -> Result<Connection> {
    let conn = Connection::open(data_dir_file_path(DB_FILE_NAME)?)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}

pub fn pool() -> Result<Arc<Pool>> {
    let pool_size = std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(8);
    let pool = Config::new(data_dir_file_path(DB_FILE_NAME)?)
        .builder(Runtime::Tokio1)?
        .max_size(pool_size)
        .post_create(Hook::Fn(Box::new(|conn, _| {
            if let Ok(conn) = conn.lock() {
                if let Err(e) = conn.pragma_update(None, "synchronous", "NORMAL") {
                    warn!(error = %e, "Failed to set synchronous mode");
                }
            }
            Ok(())
        })))
        .build()?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
pub mod test {
    pub fn conn() -> rusqlite::Connection {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        super::migration::run(&mut conn).unwrap();
        conn
    }
}
