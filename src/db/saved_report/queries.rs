use super::{blocking_queries, schema::SavedReportRow};
use crate::report::SavedReport;
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn insert(report: SavedReport, pool: &Pool) -> Result<SavedReportRow> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(&report, conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<Option<SavedReportRow>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}

pub async fn select_by_owner_id(owner_id: i64, pool: &Pool) -> Result<Vec<SavedReportRow>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_owner_id(owner_id, conn))
        .await?
}
