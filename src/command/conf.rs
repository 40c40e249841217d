use super::{arg, parse_arg};
use crate::db::conf::{blocking_queries, schema::Conf};
use crate::{Error, Result};
use rusqlite::Connection;
use serde_json::json;
use tracing::info;

pub fn run(args: &[String], conn: &Connection) -> Result<()> {
    let action = arg(args, 0, "action")?;
    let conf = match action {
        "show" => blocking_queries::select(conn)?,
        "set-top-users-limit" => {
            let limit = parse_arg(args, 1, "limit")?;
            info!(limit, "Updating top users limit");
            blocking_queries::set_top_users_limit(limit, conn)?
        }
        "set-utc-offset" => {
            let minutes = parse_arg(args, 1, "utc_offset_minutes")?;
            info!(minutes, "Updating default UTC offset");
            blocking_queries::set_default_utc_offset_minutes(minutes, conn)?
        }
        _ => Err(Error::CLI(format!("Unknown conf action: {action}")))?,
    };
    print(&conf)
}

fn print(conf: &Conf) -> Result<()> {
    let json = json!({
        "default_utc_offset_minutes": conf.default_utc_offset_minutes,
        "top_users_limit": conf.top_users_limit,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::db::conf::blocking_queries;
    use crate::db::test::conn;
    use crate::{Error, Result};

    #[test]
    fn set_top_users_limit() -> Result<()> {
        let conn = conn();
        super::run(&["set-top-users-limit".to_string(), "10".to_string()], &conn)?;
        assert_eq!(10, blocking_queries::select(&conn)?.top_users_limit);
        Ok(())
    }

    #[test]
    fn set_utc_offset() -> Result<()> {
        let conn = conn();
        super::run(&["set-utc-offset".to_string(), "120".to_string()], &conn)?;
        assert_eq!(120, blocking_queries::select(&conn)?.default_utc_offset_minutes);
        Ok(())
    }

    #[test]
    fn rejects_negative_limit() {
        let conn = conn();
        let res = super::run(&["set-top-users-limit".to_string(), "-1".to_string()], &conn);
        assert!(matches!(res, Err(Error::CLI(_))));
    }
}
