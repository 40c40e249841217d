use super::{arg, parse_arg, today};
use crate::db;
use crate::report::{serializer, LoadedReport, SavedReportRepo};
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub async fn run(args: &[String], pool: &Arc<Pool>) -> Result<()> {
    let repo = SavedReportRepo::new(pool);
    let action = arg(args, 0, "action")?;
    let res = match action {
        "add" => {
            let owner_id: i64 = parse_arg(args, 1, "owner_id")?;
            let report_name = arg(args, 2, "report_name")?;
            let serialized = arg(args, 3, "serialized")?;
            let report = serializer::deserialize(report_name, owner_id, serialized)?;
            let saved = repo.save(&report).await?;
            info!(id = ?saved.id(), owner_id, "Saved report");
            serde_json::to_value(saved)?
        }
        "show" => serde_json::to_value(repo.load(parse_arg(args, 1, "id")?).await?)?,
        "list" => Value::Array(
            repo.list_by_owner(parse_arg(args, 1, "owner_id")?)
                .await?
                .iter()
                .map(loaded_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        "command" => {
            let report = repo.load(parse_arg(args, 1, "id")?).await?;
            info!(id = ?report.id(), filter = ?report.filter(), "Building report command");
            let conf = db::conf::queries::select(pool).await?;
            serde_json::to_value(report.command(today(conf.default_utc_offset_minutes)?))?
        }
        _ => Err(Error::CLI(format!("Unknown saved-report action: {action}")))?,
    };
    println!("{}", serde_json::to_string_pretty(&res)?);
    Ok(())
}

fn loaded_json(loaded: &LoadedReport) -> Result<Value> {
    Ok(match &loaded.report {
        Ok(report) => json!({
            "id": loaded.id,
            "report_name": loaded.report_name,
            "report": serde_json::to_value(report)?,
        }),
        Err(e) => json!({
            "id": loaded.id,
            "report_name": loaded.report_name,
            "error": e.to_string(),
        }),
    })
}

#[cfg(test)]
mod test {
    use crate::test::mock_state;
    use crate::Result;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|it| it.to_string()).collect()
    }

    #[tokio::test]
    async fn add_list_show_command() -> Result<()> {
        let state = mock_state();
        super::run(
            &args(&[
                "add",
                "1",
                "January",
                "range=custom;range_start=2012-01-01;range_end=2012-01-31;resourceid=3;scheduleid=;userid=;groupid=;accessoryid=",
            ]),
            &state.pool,
        )
        .await?;
        super::run(&args(&["list", "1"]), &state.pool).await?;
        super::run(&args(&["show", "1"]), &state.pool).await?;
        super::run(&args(&["command", "1"]), &state.pool).await?;
        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_malformed() {
        let state = mock_state();
        let res = super::run(&args(&["add", "1", "broken", "usage=bogus"]), &state.pool).await;
        assert!(matches!(res, Err(crate::Error::Decode(_))));
    }

    #[tokio::test]
    async fn unknown_action() {
        let state = mock_state();
        let res = super::run(&args(&["rename"]), &state.pool).await;
        assert!(matches!(res, Err(crate::Error::CLI(_))));
    }
}
