use super::command::ReportCommand;
use super::serializer::{self, DecodeError};
use crate::{Error, Result};
use serde::Serialize;
use strum::{Display, EnumString};
use time::{Date, Duration, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    #[default]
    Resources,
    Accessories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResultSelection {
    #[default]
    FullList,
    Time,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    None,
    Resource,
    Schedule,
    User,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    #[default]
    AllTime,
    CurrentWeek,
    CurrentMonth,
    Today,
    Custom,
}

/// A named range plus the bounds it was stored with. `Date::MIN` and
/// `Date::MAX` stand for a missing lower or upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRange {
    mode: RangeMode,
    start: Date,
    end: Date,
}

impl Default for ReportRange {
    fn default() -> Self {
        ReportRange::all_time()
    }
}

impl ReportRange {
    pub fn all_time() -> Self {
        ReportRange {
            mode: RangeMode::AllTime,
            start: Date::MIN,
            end: Date::MAX,
        }
    }

    pub fn relative(mode: RangeMode) -> Self {
        ReportRange {
            mode,
            start: Date::MIN,
            end: Date::MAX,
        }
    }

    #[cfg(test)]
    pub fn custom(start: Date, end: Date) -> Result<Self> {
        Self::new(RangeMode::Custom, start, end)
    }

    pub fn new(mode: RangeMode, start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInput(format!(
                "Range start {start} is after range end {end}"
            )));
        }
        Ok(ReportRange { mode, start, end })
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Concrete `[start, end)` bounds for a user whose local date is `today`.
    pub fn resolve(&self, today: Date) -> (Date, Date) {
        match self.mode {
            RangeMode::AllTime => (Date::MIN, Date::MAX),
            RangeMode::Custom => (self.start, self.end),
            RangeMode::Today => (today, today.next_day().unwrap_or(Date::MAX)),
            RangeMode::CurrentWeek => {
                let days_since_sunday = today.weekday().number_days_from_sunday();
                let start = today
                    .checked_sub(Duration::days(days_since_sunday.into()))
                    .unwrap_or(Date::MIN);
                let end = start.checked_add(Duration::days(7)).unwrap_or(Date::MAX);
                (start, end)
            }
            RangeMode::CurrentMonth => {
                let start = today.replace_day(1).unwrap_or(today);
                let next_month = start.month().next();
                let end = match next_month {
                    time::Month::January => {
                        Date::from_calendar_date(start.year() + 1, next_month, 1)
                    }
                    _ => Date::from_calendar_date(start.year(), next_month, 1),
                }
                .unwrap_or(Date::MAX);
                (start, end)
            }
        }
    }

    pub fn is_open_ended(&self, today: Date) -> bool {
        self.resolve(today) == (Date::MIN, Date::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportFilter {
    pub resource_id: Option<i64>,
    pub schedule_id: Option<i64>,
    pub user_id: Option<i64>,
    pub group_id: Option<i64>,
    pub accessory_id: Option<i64>,
}

impl ReportFilter {
    #[cfg(test)]
    pub fn by_resource(resource_id: i64) -> Self {
        ReportFilter {
            resource_id: Some(resource_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedReport {
    id: Option<i64>,
    report_name: String,
    owner_id: i64,
    usage: Usage,
    selection: ResultSelection,
    group_by: GroupBy,
    range: ReportRange,
    filter: ReportFilter,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl SavedReport {
    pub fn new(
        report_name: impl Into<String>,
        owner_id: i64,
        usage: Usage,
        selection: ResultSelection,
        group_by: GroupBy,
        range: ReportRange,
        filter: ReportFilter,
    ) -> Self {
        SavedReport {
            id: None,
            report_name: report_name.into(),
            owner_id,
            usage,
            selection,
            group_by,
            range,
            filter,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn from_storage(
        report_name: impl Into<String>,
        owner_id: i64,
        created_at: OffsetDateTime,
        serialized: &str,
        id: i64,
    ) -> Result<Self, DecodeError> {
        let report = serializer::deserialize(report_name, owner_id, serialized)?;
        Ok(SavedReport {
            id: Some(id),
            created_at,
            ..report
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn report_name(&self) -> &str {
        &self.report_name
    }

    pub fn owner_id(&self) -> i64 {
        self.owner_id
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn selection(&self) -> ResultSelection {
        self.selection
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    pub fn range(&self) -> &ReportRange {
        &self.range
    }

    pub fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn range_start(&self) -> Date {
        self.range.start()
    }

    pub fn range_end(&self) -> Date {
        self.range.end()
    }

    pub fn resource_id(&self) -> Option<i64> {
        self.filter.resource_id
    }

    pub fn schedule_id(&self) -> Option<i64> {
        self.filter.schedule_id
    }

    pub fn user_id(&self) -> Option<i64> {
        self.filter.user_id
    }

    pub fn group_id(&self) -> Option<i64> {
        self.filter.group_id
    }

    pub fn accessory_id(&self) -> Option<i64> {
        self.filter.accessory_id
    }

    pub fn command(&self, today: Date) -> ReportCommand {
        let mut command = ReportCommand::new()
            .select(self.selection)
            .of(self.usage)
            .group_by(self.group_by)
            .filtered_by(self.filter);
        if !self.range.is_open_ended(today) {
            let (start, end) = self.range.resolve(today);
            command = command.within(start, end);
        }
        command
    }
}

#[cfg(test)]
mod test {
    use super::{GroupBy, RangeMode, ReportFilter, ReportRange, ResultSelection, SavedReport, Usage};
    use crate::{Error, Result};
    use std::str::FromStr;
    use time::macros::{date, datetime};
    use time::Date;

    #[test]
    fn tokens_are_snake_case() {
        assert_eq!("full_list", ResultSelection::FullList.to_string());
        assert_eq!("all_time", RangeMode::AllTime.to_string());
        assert_eq!("current_week", RangeMode::CurrentWeek.to_string());
        assert_eq!(Usage::Accessories, Usage::from_str("accessories").unwrap());
        assert_eq!(GroupBy::Group, GroupBy::from_str("group").unwrap());
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert!(Usage::from_str("RESOURCES").is_err());
        assert!(ResultSelection::from_str("FullList").is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(Usage::Resources, Usage::default());
        assert_eq!(ResultSelection::FullList, ResultSelection::default());
        assert_eq!(GroupBy::None, GroupBy::default());
        assert_eq!(ReportRange::all_time(), ReportRange::default());
    }

    #[test]
    fn custom_range_rejects_inverted_bounds() {
        let res = ReportRange::custom(date!(2012 - 02 - 01), date!(2012 - 01 - 01));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn resolve_current_week_starts_on_sunday() -> Result<()> {
        // 2012-01-18 is a Wednesday
        let range = ReportRange::relative(RangeMode::CurrentWeek);
        assert_eq!(
            (date!(2012 - 01 - 15), date!(2012 - 01 - 22)),
            range.resolve(date!(2012 - 01 - 18)),
        );
        // Sunday is the first day of its own week
        assert_eq!(
            (date!(2012 - 01 - 15), date!(2012 - 01 - 22)),
            range.resolve(date!(2012 - 01 - 15)),
        );
        Ok(())
    }

    #[test]
    fn resolve_current_month() {
        let range = ReportRange::relative(RangeMode::CurrentMonth);
        assert_eq!(
            (date!(2012 - 02 - 01), date!(2012 - 03 - 01)),
            range.resolve(date!(2012 - 02 - 29)),
        );
        assert_eq!(
            (date!(2012 - 12 - 01), date!(2013 - 01 - 01)),
            range.resolve(date!(2012 - 12 - 31)),
        );
    }

    #[test]
    fn resolve_today_and_all_time() {
        assert_eq!(
            (date!(2012 - 12 - 31), date!(2013 - 01 - 01)),
            ReportRange::relative(RangeMode::Today).resolve(date!(2012 - 12 - 31)),
        );
        assert_eq!(
            (Date::MIN, Date::MAX),
            ReportRange::all_time().resolve(date!(2012 - 12 - 31)),
        );
        assert!(ReportRange::all_time().is_open_ended(date!(2012 - 12 - 31)));
    }

    #[test]
    fn pass_through_accessors() -> Result<()> {
        let report = SavedReport::new(
            "name",
            1,
            Usage::Resources,
            ResultSelection::Count,
            GroupBy::User,
            ReportRange::custom(date!(2012 - 01 - 01), date!(2012 - 01 - 31))?,
            ReportFilter {
                schedule_id: Some(2),
                group_id: Some(4),
                ..Default::default()
            },
        );
        assert_eq!(None, report.id());
        assert_eq!(date!(2012 - 01 - 01), report.range_start());
        assert_eq!(date!(2012 - 01 - 31), report.range_end());
        assert_eq!(None, report.resource_id());
        assert_eq!(Some(2), report.schedule_id());
        assert_eq!(None, report.user_id());
        assert_eq!(Some(4), report.group_id());
        assert_eq!(None, report.accessory_id());
        Ok(())
    }

    #[test]
    fn from_storage_sets_late_bound_fields() -> Result<()> {
        let created_at = datetime!(2012-03-04 05:06:07 UTC);
        let report = SavedReport::from_storage(
            "stored",
            7,
            created_at,
            "resourceid=;scheduleid=;userid=;groupid=;accessoryid=",
            42,
        )?;
        assert_eq!(Some(42), report.id());
        assert_eq!(created_at, report.created_at());
        assert_eq!("stored", report.report_name());
        assert_eq!(7, report.owner_id());
        Ok(())
    }

    #[test]
    fn command_skips_open_ended_range() {
        let report = SavedReport::new(
            "name",
            1,
            Usage::Accessories,
            ResultSelection::Time,
            GroupBy::Resource,
            ReportRange::all_time(),
            ReportFilter::by_resource(3),
        );
        let command = report.command(date!(2012 - 01 - 18));
        assert_eq!(None, command.start);
        assert_eq!(None, command.end);
        assert_eq!(Some(3), command.filter.resource_id);
        assert_eq!(Usage::Accessories, command.usage);
    }

    #[test]
    fn command_resolves_relative_range() {
        let report = SavedReport::new(
            "name",
            1,
            Usage::Resources,
            ResultSelection::Count,
            GroupBy::None,
            ReportRange::relative(RangeMode::CurrentMonth),
            ReportFilter::default(),
        );
        let command = report.command(date!(2012 - 01 - 18));
        assert_eq!(Some(date!(2012 - 01 - 01)), command.start);
        assert_eq!(Some(date!(2012 - 02 - 01)), command.end);
    }
}
