//! Resolution of named report periods into concrete date ranges.
//!
//! Reports are bounded by a period token such as `this_week` or
//! `last_month`. This module turns those tokens into inclusive
//! start/end dates relative to a reference day. Two tokens are never
//! resolved here: `custom` (the caller supplies explicit dates) and `all`
//! (the report builders omit the date clause entirely).

use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The named periods a report can be bounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "today" => Ok(Period::Today),
            "yesterday" => Ok(Period::Yesterday),
            "this_week" => Ok(Period::ThisWeek),
            "last_week" => Ok(Period::LastWeek),
            "this_month" => Ok(Period::ThisMonth),
            "last_month" => Ok(Period::LastMonth),
            "this_year" => Ok(Period::ThisYear),
            "last_year" => Ok(Period::LastYear),
            other => Err(Error::InvalidPeriod(Message::UnknownPeriod(other.to_string()))),
        }
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

/// Turns period tokens into date ranges relative to a reference day.
pub struct PeriodResolver {
    start_of_week: Weekday,
}

impl PeriodResolver {
    pub fn new(start_of_week: Weekday) -> Self {
        PeriodResolver { start_of_week }
    }

    /// Resolves a token like `last_week` against the given reference day.
    ///
    /// Fails with [`Error::InvalidPeriod`] for unknown tokens; `custom`
    /// and `all` are deliberately unknown here.
    pub fn resolve(&self, token: &str, today: NaiveDate) -> Result<DateRange> {
        Ok(self.range(token.parse()?, today))
    }

    pub fn range(&self, period: Period, today: NaiveDate) -> DateRange {
        match period {
            Period::Today => DateRange { start: today, end: today },
            Period::Yesterday => {
                let yesterday = today - Duration::days(1);
                DateRange { start: yesterday, end: yesterday }
            }
            Period::ThisWeek => {
                let start = self.week_start(today);
                DateRange { start, end: start + Duration::days(6) }
            }
            Period::LastWeek => {
                let start = self.week_start(today) - Duration::days(7);
                DateRange { start, end: start + Duration::days(6) }
            }
            Period::ThisMonth => DateRange {
                start: month_start(today),
                end: month_end(today),
            },
            Period::LastMonth => {
                let end = month_start(today) - Duration::days(1);
                DateRange { start: month_start(end), end }
            }
            Period::ThisYear => year_range(today.year()),
            Period::LastYear => year_range(today.year() - 1),
        }
    }

    fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let offset = (7 + date.weekday().num_days_from_sunday() as i64
            - self.start_of_week.num_days_from_sunday() as i64)
            % 7;
        date - Duration::days(offset)
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| next - Duration::days(1))
        .unwrap_or(date)
}

fn year_range(year: i32) -> DateRange {
    DateRange {
        start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
        end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
    }
}
