use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "conf";

pub enum Columns {
    DefaultUtcOffsetMinutes,
    TopUsersLimit,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::DefaultUtcOffsetMinutes => "default_utc_offset_minutes",
            Columns::TopUsersLimit => "top_users_limit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conf {
    pub default_utc_offset_minutes: i32,
    pub top_users_limit: u32,
}

impl Conf {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [Columns::DefaultUtcOffsetMinutes, Columns::TopUsersLimit]
                .iter()
                .map(Columns::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Self> {
        |row| {
            Ok(Self {
                default_utc_offset_minutes: row.get(Columns::DefaultUtcOffsetMinutes.as_str())?,
                top_users_limit: row.get(Columns::TopUsersLimit.as_str())?,
            })
        }
    }
}
