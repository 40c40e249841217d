use super::{arg, parse_arg, today};
use crate::db;
use crate::report::CannedReport;
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

pub async fn run(args: &[String], pool: &Arc<Pool>) -> Result<()> {
    let token = arg(args, 0, "canned_report")?;
    let report = CannedReport::from_str(token)
        .map_err(|_| Error::CLI(format!("Unknown canned report: {token}")))?;
    let conf = db::conf::queries::select(pool).await?;
    let utc_offset_minutes = match args.get(1) {
        Some(_) => parse_arg(args, 1, "utc_offset_minutes")?,
        None => conf.default_utc_offset_minutes,
    };
    let today = today(utc_offset_minutes)?;
    info!(%report, %today, "Building canned report");
    let command = report.command(today, conf.top_users_limit);
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}
