use super::{DecodeError, SavedReport};
use crate::db::saved_report::{queries, schema::SavedReportRow};
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use std::sync::Arc;
use tracing::warn;

/// Outcome of loading one report out of a listing. A row that can't be decoded
/// is reported on its own and doesn't fail its siblings.
#[derive(Debug)]
pub struct LoadedReport {
    pub id: i64,
    pub report_name: String,
    pub report: Result<SavedReport, DecodeError>,
}

impl From<SavedReportRow> for LoadedReport {
    fn from(row: SavedReportRow) -> Self {
        let report = row.decode();
        if let Err(e) = &report {
            warn!(id = row.id, owner_id = row.owner_id, error = %e, "Failed to decode saved report");
        }
        LoadedReport {
            id: row.id,
            report_name: row.report_name,
            report,
        }
    }
}

pub struct SavedReportRepo {
    pool: Arc<Pool>,
}

impl SavedReportRepo {
    pub fn new(pool: &Arc<Pool>) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn save(&self, report: &SavedReport) -> Result<SavedReport> {
        let row = queries::insert(report.clone(), &self.pool).await?;
        Ok(row.decode()?)
    }

    pub async fn load(&self, id: i64) -> Result<SavedReport> {
        let row = queries::select_by_id(id, &self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Saved report {id} does not exist")))?;
        row.decode().map_err(|e| {
            warn!(id, error = %e, "Failed to decode saved report");
            e.into()
        })
    }

    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<LoadedReport>> {
        Ok(queries::select_by_owner_id(owner_id, &self.pool)
            .await?
            .into_iter()
            .map(LoadedReport::from)
            .collect())
    }
}
