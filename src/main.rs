pub use error::Error;
mod command;
mod db;
mod error;
mod filesystem;
mod report;
#[cfg(test)]
mod test;
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut conn = db::open_connection()?;
    db::migration::run(&mut conn)?;

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "db" => command::db::run(&args[2..], conn)?,
        "conf" => command::conf::run(&args[2..], &conn)?,
        "saved-report" => command::saved_report::run(&args[2..], &db::pool()?).await?,
        "canned-report" => command::canned_report::run(&args[2..], &db::pool()?).await?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cfg!(debug_assertions) {
        builder.init();
    } else {
        builder.json().init();
    }
}
