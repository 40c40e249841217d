//! Flat `key=value;...` codec for saved report configurations.
//!
//! Values are never escaped, so only enum tokens, integers and dates may be
//! written here. The filter keys exist since the first stored version and are
//! mandatory; every other key falls back to a default when missing.

use super::model::{RangeMode, ReportFilter, ReportRange, SavedReport};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

const USAGE: &str = "usage";
const SELECTION: &str = "selection";
const GROUP_BY: &str = "groupby";
const RANGE: &str = "range";
const RANGE_START: &str = "range_start";
const RANGE_END: &str = "range_end";
const RESOURCE_ID: &str = "resourceid";
const SCHEDULE_ID: &str = "scheduleid";
const USER_ID: &str = "userid";
const GROUP_ID: &str = "groupid";
const ACCESSORY_ID: &str = "accessoryid";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LEGACY_DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Malformed(String),
    UnknownValue { key: &'static str, value: String },
    InvalidDate { key: &'static str, value: String },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Malformed(err) => write!(f, "Malformed saved report: {err}"),
            DecodeError::UnknownValue { key, value } => {
                write!(f, "Unknown value for {key}: {value}")
            }
            DecodeError::InvalidDate { key, value } => {
                write!(f, "Invalid date for {key}: {value}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

pub fn serialize(report: &SavedReport) -> Result<String, time::error::Format> {
    Ok(format!(
        "{USAGE}={};{SELECTION}={};{GROUP_BY}={};{RANGE}={};{RANGE_START}={};{RANGE_END}={};{RESOURCE_ID}={};{SCHEDULE_ID}={};{USER_ID}={};{GROUP_ID}={};{ACCESSORY_ID}={}",
        report.usage(),
        report.selection(),
        report.group_by(),
        report.range().mode(),
        format_bound(report.range_start(), Date::MIN)?,
        format_bound(report.range_end(), Date::MAX)?,
        format_id(report.resource_id()),
        format_id(report.schedule_id()),
        format_id(report.user_id()),
        format_id(report.group_id()),
        format_id(report.accessory_id()),
    ))
}

pub fn deserialize(
    report_name: impl Into<String>,
    owner_id: i64,
    serialized: &str,
) -> Result<SavedReport, DecodeError> {
    let values = split_pairs(serialized)?;
    Ok(SavedReport::new(
        report_name,
        owner_id,
        parse_token(&values, USAGE)?,
        parse_token(&values, SELECTION)?,
        parse_token(&values, GROUP_BY)?,
        parse_range(&values)?,
        parse_filter(&values)?,
    ))
}

fn split_pairs(serialized: &str) -> Result<HashMap<&str, &str>, DecodeError> {
    let mut values = HashMap::new();
    for pair in serialized.split(';').filter(|it| !it.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| DecodeError::Malformed(format!("pair without '=': {pair}")))?;
        values.insert(key, value);
    }
    Ok(values)
}

fn parse_token<T: FromStr + Default>(
    values: &HashMap<&str, &str>,
    key: &'static str,
) -> Result<T, DecodeError> {
    match values.get(key) {
        Some(value) => T::from_str(value).map_err(|_| DecodeError::UnknownValue {
            key,
            value: value.to_string(),
        }),
        None => Ok(T::default()),
    }
}

fn parse_range(values: &HashMap<&str, &str>) -> Result<ReportRange, DecodeError> {
    if !values.contains_key(RANGE) {
        return Ok(ReportRange::all_time());
    }
    let mode: RangeMode = parse_token(values, RANGE)?;
    let start = parse_bound(values, RANGE_START, Date::MIN)?;
    let end = parse_bound(values, RANGE_END, Date::MAX)?;
    ReportRange::new(mode, start, end)
        .map_err(|_| DecodeError::Malformed(format!("range starts after it ends: {start} > {end}")))
}

fn parse_bound(
    values: &HashMap<&str, &str>,
    key: &'static str,
    open: Date,
) -> Result<Date, DecodeError> {
    let value = values.get(key).copied().unwrap_or_default();
    if value.is_empty() {
        return Ok(open);
    }
    Date::parse(value, DATE_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(value, LEGACY_DATE_TIME_FORMAT).map(|it| it.date()))
        .map_err(|_| DecodeError::InvalidDate {
            key,
            value: value.to_string(),
        })
}

fn parse_filter(values: &HashMap<&str, &str>) -> Result<ReportFilter, DecodeError> {
    Ok(ReportFilter {
        resource_id: parse_id(values, RESOURCE_ID)?,
        schedule_id: parse_id(values, SCHEDULE_ID)?,
        user_id: parse_id(values, USER_ID)?,
        group_id: parse_id(values, GROUP_ID)?,
        accessory_id: parse_id(values, ACCESSORY_ID)?,
    })
}

fn parse_id(values: &HashMap<&str, &str>, key: &'static str) -> Result<Option<i64>, DecodeError> {
    let value = values
        .get(key)
        .ok_or_else(|| DecodeError::Malformed(format!("missing {key}")))?;
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| DecodeError::Malformed(format!("{key} is not an id: {value}")))
}

fn format_bound(date: Date, open: Date) -> Result<String, time::error::Format> {
    if date == open {
        Ok(String::new())
    } else {
        date.format(DATE_FORMAT)
    }
}

fn format_id(id: Option<i64>) -> String {
    id.map(|it| it.to_string()).unwrap_or_default()
}
