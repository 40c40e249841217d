use super::schema::{self, Columns, SavedReportRow};
use crate::report::{serializer, SavedReport};
use crate::Result;
use rusqlite::{named_params, params, Connection, OptionalExtension};
use time::format_description::well_known::Rfc3339;

pub fn insert(report: &SavedReport, conn: &Connection) -> Result<SavedReportRow> {
    let sql = format!(
        r#"
            INSERT INTO {table} (
                {report_name},
                {owner_id},
                {serialized},
                {created_at}
            ) VALUES (
                :report_name,
                :owner_id,
                :serialized,
                :created_at
            )
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        report_name = Columns::ReportName.as_str(),
        owner_id = Columns::OwnerId.as_str(),
        serialized = Columns::Serialized.as_str(),
        created_at = Columns::CreatedAt.as_str(),
        projection = SavedReportRow::projection(),
    );
    let params = named_params! {
        ":report_name": report.report_name(),
        ":owner_id": report.owner_id(),
        ":serialized": serializer::serialize(report)?,
        ":created_at": report.created_at().format(&Rfc3339)?,
    };
    conn.query_row(&sql, params, SavedReportRow::mapper())
        .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Option<SavedReportRow>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = SavedReportRow::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], SavedReportRow::mapper())
        .optional()
        .map_err(Into::into)
}

pub fn select_by_owner_id(owner_id: i64, conn: &Connection) -> Result<Vec<SavedReportRow>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {owner_id} = ?1
            ORDER BY {id} DESC
        "#,
        projection = SavedReportRow::projection(),
        table = schema::TABLE_NAME,
        owner_id = Columns::OwnerId.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_map(params![owner_id], SavedReportRow::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

#[cfg(test)]
pub fn insert_raw(
    report_name: &str,
    owner_id: i64,
    serialized: &str,
    conn: &Connection,
) -> Result<SavedReportRow> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({report_name}, {owner_id}, {serialized})
            VALUES (?1, ?2, ?3)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        report_name = Columns::ReportName.as_str(),
        owner_id = Columns::OwnerId.as_str(),
        serialized = Columns::Serialized.as_str(),
        projection = SavedReportRow::projection(),
    );
    conn.query_row(
        &sql,
        params![report_name, owner_id, serialized],
        SavedReportRow::mapper(),
    )
    .map_err(Into::into)
}
