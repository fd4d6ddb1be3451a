use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A calendar day, independent of time zone and locale.
///
/// Serialized as `YYYY-MM-DD` so it can be used directly as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn days_before(self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }

    /// Short label such as `Oct 15`.
    pub fn short_label(self) -> String {
        self.0.format("%b %-d").to_string()
    }

    /// Monday that starts the ISO week containing this day.
    pub fn week_start(self) -> Self {
        Self(self.0 - Duration::days(self.0.weekday().num_days_from_monday() as i64))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

impl TryFrom<String> for DayKey {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(value: DayKey) -> Self {
        value.to_string()
    }
}
