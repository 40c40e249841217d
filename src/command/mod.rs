pub mod canned_report;
pub mod conf;
pub mod db;
pub mod saved_report;

use crate::{Error, Result};
use std::str::FromStr;
use time::{Date, OffsetDateTime, UtcOffset};

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::CLI(format!("Missing argument: {name}")))
}

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &str) -> Result<T> {
    let value = arg(args, index, name)?;
    value
        .parse()
        .map_err(|_| Error::CLI(format!("Invalid {name}: {value}")))
}

fn today(utc_offset_minutes: i32) -> Result<Date> {
    let offset = UtcOffset::from_whole_seconds(utc_offset_minutes.saturating_mul(60))?;
    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod test {
    use crate::{Error, Result};

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|it| it.to_string()).collect()
    }

    #[test]
    fn parse_arg() -> Result<()> {
        let args = args(&["42", "x"]);
        assert_eq!(42, super::parse_arg::<i64>(&args, 0, "id")?);
        assert!(matches!(
            super::parse_arg::<i64>(&args, 1, "id"),
            Err(Error::CLI(_)),
        ));
        assert!(matches!(
            super::parse_arg::<i64>(&args, 2, "id"),
            Err(Error::CLI(_)),
        ));
        Ok(())
    }

    #[test]
    fn today_rejects_out_of_range_offset() {
        assert!(super::today(-300).is_ok());
        assert!(matches!(super::today(60 * 48), Err(Error::ComponentRange(_))));
    }
}
