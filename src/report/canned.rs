use super::command::ReportCommand;
use super::model::{RangeMode, ReportRange};
use strum::{Display, EnumIter, EnumString};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CannedReport {
    ResourceCountAllTime,
    ResourceCountThisWeek,
    ResourceCountThisMonth,
    ResourceTimeAllTime,
    ResourceTimeThisWeek,
    ResourceTimeThisMonth,
    UserTimeAllTime,
    UserTimeThisWeek,
    UserTimeThisMonth,
    UserCountAllTime,
    UserCountThisWeek,
    UserCountThisMonth,
}

impl CannedReport {
    fn range(&self) -> RangeMode {
        use CannedReport::*;
        match self {
            ResourceCountAllTime | ResourceTimeAllTime | UserTimeAllTime | UserCountAllTime => {
                RangeMode::AllTime
            }
            ResourceCountThisWeek | ResourceTimeThisWeek | UserTimeThisWeek | UserCountThisWeek => {
                RangeMode::CurrentWeek
            }
            ResourceCountThisMonth
            | ResourceTimeThisMonth
            | UserTimeThisMonth
            | UserCountThisMonth => RangeMode::CurrentMonth,
        }
    }

    /// `today` is the requesting user's local date, `top_users_limit` caps the
    /// per-user rankings.
    pub fn command(&self, today: Date, top_users_limit: u32) -> ReportCommand {
        use CannedReport::*;
        let command = match self {
            ResourceCountAllTime | ResourceCountThisWeek | ResourceCountThisMonth => {
                ReportCommand::new()
                    .select_count()
                    .of_resources()
                    .group_by_resource()
            }
            ResourceTimeAllTime | ResourceTimeThisWeek | ResourceTimeThisMonth => {
                ReportCommand::new()
                    .select_time()
                    .of_resources()
                    .group_by_resource()
            }
            UserTimeAllTime | UserTimeThisWeek | UserTimeThisMonth => ReportCommand::new()
                .select_time()
                .of_resources()
                .group_by_user()
                .limited_to(top_users_limit),
            UserCountAllTime | UserCountThisWeek | UserCountThisMonth => ReportCommand::new()
                .select_count()
                .of_resources()
                .group_by_user()
                .limited_to(top_users_limit),
        };
        match self.range() {
            RangeMode::AllTime => command,
            mode => {
                let (start, end) = ReportRange::relative(mode).resolve(today);
                command.within(start, end)
            }
        }
    }
}
