use super::model::{GroupBy, ReportFilter, ResultSelection, Usage};
use serde::Serialize;
use time::Date;

/// What to aggregate, over which rows, and how to bucket the result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReportCommand {
    pub selection: ResultSelection,
    pub usage: Usage,
    pub group_by: GroupBy,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub limit: Option<u32>,
    pub filter: ReportFilter,
}

impl ReportCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, selection: ResultSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn select_time(self) -> Self {
        self.select(ResultSelection::Time)
    }

    pub fn select_count(self) -> Self {
        self.select(ResultSelection::Count)
    }

    pub fn of(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    pub fn of_resources(self) -> Self {
        self.of(Usage::Resources)
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn group_by_resource(self) -> Self {
        self.group_by(GroupBy::Resource)
    }

    pub fn group_by_user(self) -> Self {
        self.group_by(GroupBy::User)
    }

    pub fn within(mut self, start: Date, end: Date) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn limited_to(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filtered_by(mut self, filter: ReportFilter) -> Self {
        self.filter = filter;
        self
    }
}
