use crate::{db, report::SavedReportRepo};
use deadpool_sqlite::{Config, Runtime};
use rusqlite::Connection;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

static MEM_DB_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn mock_state() -> State {
    let uri = format!(
        "file::testdb_{}:?mode=memory&cache=shared",
        MEM_DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let mut conn = Connection::open(&uri).unwrap();
    db::migration::run(&mut conn).unwrap();
    let pool = Arc::new(Config::new(uri).create_pool(Runtime::Tokio1).unwrap());
    State {
        saved_report_repo: SavedReportRepo::new(&pool),
        pool,
        conn,
    }
}

pub struct State {
    pub pool: Arc<deadpool_sqlite::Pool>,
    pub conn: Connection,
    pub saved_report_repo: SavedReportRepo,
}
