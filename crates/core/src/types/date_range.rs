use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How far back a search reaches. Parsing never fails: anything that is not
/// `today` or `month` is treated as `week`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DateRange {
    Today,
    #[default]
    Week,
    Month,
}

impl DateRange {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("today") {
            DateRange::Today
        } else if trimmed.eq_ignore_ascii_case("month") {
            DateRange::Month
        } else {
            DateRange::Week
        }
    }

    pub fn days(self) -> u64 {
        match self {
            DateRange::Today => 1,
            DateRange::Week => 7,
            DateRange::Month => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn start_date(self, now: DateTime<Utc>) -> NaiveDate {
        now.date_naive()
            .checked_sub_days(Days::new(self.days()))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn from_param(self, now: DateTime<Utc>) -> String {
        self.start_date(now).format(DATE_FORMAT).to_string()
    }
}

impl From<&str> for DateRange {
    fn from(value: &str) -> Self {
        DateRange::parse(value)
    }
}

impl From<String> for DateRange {
    fn from(value: String) -> Self {
        DateRange::parse(&value)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
