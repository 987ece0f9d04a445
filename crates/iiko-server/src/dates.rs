//! Date and time formats used by the server API.
//!
//! | Format                       | Used by |
//! |------------------------------|---------|
//! | `DD.MM.YYYY`                 | reports, cash sessions, price lists |
//! | `YYYY-MM-DD`                 | document export |
//! | `yyyy-MM-ddTHH:mm:ss.SSS`    | events, cash session events |
//! | `yyyy-MM-ddTHH:mm:ss`        | balance report |

use chrono::{NaiveDate, NaiveDateTime};

use iiko_client::Params;

/// `DD.MM.YYYY`
pub fn day_month_year(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `yyyy-MM-ddTHH:mm:ss.SSS`
pub fn iso_millis(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// `yyyy-MM-ddTHH:mm:ss`
pub fn iso_seconds(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Inclusive date interval, sent as `dateFrom` / `dateTo` (`DD.MM.YYYY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("dateFrom", day_month_year(self.from))
            .with("dateTo", day_month_year(self.to))
    }
}

/// Half-open time interval, sent as `from_time` / `to_time`.
///
/// Both ends are optional: the server defaults `from_time` to the start of
/// the current day and leaves `to_time` open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl TimeRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("from_time", self.from.map(iso_millis))
            .with_opt("to_time", self.to.map(iso_millis))
    }
}
