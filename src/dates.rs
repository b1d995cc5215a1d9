use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;

const QUERY_FORMAT: &str = "%Y%m%d";

/// Inclusive window of calendar days sent to the report endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn day(today: NaiveDate) -> Self {
        Self {
            from: today,
            to: today,
        }
    }

    /// Monday of the week containing `today`, through `today`.
    pub fn week_to_date(today: NaiveDate) -> Self {
        let offset = today.weekday().num_days_from_monday() as i64;
        Self {
            from: today - Duration::days(offset),
            to: today,
        }
    }

    pub fn month_to_date(today: NaiveDate) -> Self {
        let from = today.with_day(1).unwrap_or(today);
        Self { from, to: today }
    }

    pub fn query_bounds(&self) -> (String, String) {
        (
            self.from.format(QUERY_FORMAT).to_string(),
            self.to.format(QUERY_FORMAT).to_string(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Month,
    Week,
    Day,
}

impl Period {
    /// Fetch order for a run.
    pub const ALL: [Period; 3] = [Period::Month, Period::Week, Period::Day];
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month => write!(f, "month"),
            Period::Week => write!(f, "week"),
            Period::Day => write!(f, "day"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PeriodRanges {
    pub month: DateRange,
    pub week: DateRange,
    pub day: DateRange,
}

impl PeriodRanges {
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            month: DateRange::month_to_date(today),
            week: DateRange::week_to_date(today),
            day: DateRange::day(today),
        }
    }

    pub fn get(&self, period: Period) -> &DateRange {
        match period {
            Period::Month => &self.month,
            Period::Week => &self.week,
            Period::Day => &self.day,
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())
}
