use crate::{Error, Result};
use rusqlite::Connection;
use std::fs::remove_file;
use tracing::info;

pub fn run(args: &[String], db: Connection) -> Result<()> {
    let first_arg = match args.first() {
        Some(some) => some,
        None => Err(Error::CLI("No DB actions passed".into()))?,
    };

    match first_arg.as_str() {
        // Migrations run on every start
        "migrate" => {}
        "drop" => drop(db)?,
        _ => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn drop(db: Connection) -> Result<()> {
    let path = db
        .path()
        .map(ToOwned::to_owned)
        .ok_or(Error::Generic("Failed to find database path".into()))?;
    db.close().map_err(|(_, e)| e)?;
    remove_file(&path)?;
    info!(?path, "Database file was removed");
    Ok(())
}
