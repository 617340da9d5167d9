//! Calendar helpers shared by the aggregators: inclusive date ranges and months.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Builds a period, swapping the bounds when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            tracing::debug!(%start, %end, "period bounds reversed; swapping");
            return Self {
                start: end,
                end: start,
            };
        }
        Self { start, end }
    }

    pub fn month(year_month: YearMonth) -> Self {
        Self {
            start: year_month.first_day(),
            end: year_month.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A calendar month, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| EngineError::InvalidInput(format!("invalid month {year}-{month}")))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Quarter number, 1 through 4.
    pub fn quarter(&self) -> u32 {
        (self.month() + 2) / 3
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Last day of the month; the final month chrono supports ends at `NaiveDate::MAX`.
    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn succ(&self) -> Option<Self> {
        self.offset(1)
    }

    pub fn pred(&self) -> Option<Self> {
        self.offset(-1)
    }

    /// Shifts by `months`, or `None` when the result leaves chrono's date range.
    pub fn offset(&self, months: i32) -> Option<Self> {
        let delta = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(delta)
        } else {
            self.0.checked_sub_months(delta)
        };
        shifted.map(Self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidInput(format!("expected YYYY-MM, got `{value}`"));
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_period_is_swapped() {
        let period = Period::new(date(2024, 3, 31), date(2024, 3, 1));
        assert_eq!(period.start, date(2024, 3, 1));
        assert_eq!(period.end, date(2024, 3, 31));
    }

    #[test]
    fn period_contains_both_bounds() {
        let period = Period::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(period.contains(date(2024, 1, 1)));
        assert!(period.contains(date(2024, 1, 31)));
        assert!(!period.contains(date(2024, 2, 1)));
        assert_eq!(period.days(), 31);
    }

    #[test]
    fn month_bounds_handle_leap_years() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        let dec = YearMonth::new(2023, 12).unwrap();
        assert_eq!(dec.last_day(), date(2023, 12, 31));
        assert_eq!(dec.succ(), YearMonth::new(2024, 1).ok());
    }

    #[test]
    fn year_month_formats_zero_padded() {
        let ym: YearMonth = "2024-3".parse().unwrap();
        assert_eq!(ym.to_string(), "2024-03");
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
    }

    #[test]
    fn offsets_cross_year_boundaries() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.offset(-11), YearMonth::new(2023, 2).ok());
        assert_eq!(jan.pred(), YearMonth::new(2023, 12).ok());
        assert_eq!(YearMonth::containing(date(2024, 5, 17)).to_string(), "2024-05");
    }

    #[test]
    fn last_supported_month_ends_at_max_date() {
        let last = YearMonth::containing(NaiveDate::MAX);
        assert_eq!(last.last_day(), NaiveDate::MAX);
        assert_eq!(last.succ(), None);
        assert_eq!(Period::month(last).end, NaiveDate::MAX);
    }

    #[test]
    fn offsets_outside_the_calendar_are_none() {
        let first = YearMonth::containing(NaiveDate::MIN);
        assert_eq!(first.pred(), None);
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.offset(-4_000_000), None);
        assert_eq!(jan.offset(i32::MAX), None);
        assert!(jan.offset(0).is_some());
    }

    #[test]
    fn quarter_rounds_up() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().quarter(), 1);
        assert_eq!(YearMonth::new(2024, 3).unwrap().quarter(), 1);
        assert_eq!(YearMonth::new(2024, 4).unwrap().quarter(), 2);
        assert_eq!(YearMonth::new(2024, 12).unwrap().quarter(), 4);
    }
}
