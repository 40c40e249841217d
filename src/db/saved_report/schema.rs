use crate::report::{DecodeError, SavedReport};
use rusqlite::Row;
use std::sync::OnceLock;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "saved_report";

pub enum Columns {
    Id,
    ReportName,
    OwnerId,
    Serialized,
    CreatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::ReportName => "report_name",
            Columns::OwnerId => "owner_id",
            Columns::Serialized => "serialized",
            Columns::CreatedAt => "created_at",
        }
    }
}

/// A stored row before its configuration string is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReportRow {
    pub id: i64,
    pub report_name: String,
    pub owner_id: i64,
    pub serialized: String,
    pub created_at: OffsetDateTime,
}

impl SavedReportRow {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::Id,
                Columns::ReportName,
                Columns::OwnerId,
                Columns::Serialized,
                Columns::CreatedAt,
            ]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<SavedReportRow> {
        |row| {
            Ok(SavedReportRow {
                id: row.get(Columns::Id.as_str())?,
                report_name: row.get(Columns::ReportName.as_str())?,
                owner_id: row.get(Columns::OwnerId.as_str())?,
                serialized: row.get(Columns::Serialized.as_str())?,
                created_at: row.get(Columns::CreatedAt.as_str())?,
            })
        }
    }

    pub fn decode(&self) -> Result<SavedReport, DecodeError> {
        SavedReport::from_storage(
            self.report_name.clone(),
            self.owner_id,
            self.created_at,
            &self.serialized,
            self.id,
        )
    }
}
