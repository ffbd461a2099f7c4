use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing interval unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(8)", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Day,
    Week,
    Month,
    Year,
}

impl PeriodUnit {
    /// Single-letter unit code used by processor forms (D, W, M, Y)
    pub fn code(&self) -> &'static str {
        match self {
            PeriodUnit::Day => "D",
            PeriodUnit::Week => "W",
            PeriodUnit::Month => "M",
            PeriodUnit::Year => "Y",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodUnit::Day => write!(f, "day"),
            PeriodUnit::Week => write!(f, "week"),
            PeriodUnit::Month => write!(f, "month"),
            PeriodUnit::Year => write!(f, "year"),
        }
    }
}

/// Billing interval of an item, e.g. every 3 months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    pub unit: PeriodUnit,
    pub count: u16,
}

impl PaymentPeriod {
    pub fn new(unit: PeriodUnit, count: u16) -> Self {
        Self { unit, count }
    }

    pub fn monthly() -> Self {
        Self::new(PeriodUnit::Month, 1)
    }

    /// Whether the period is measured in calendar months
    pub fn is_month_based(&self) -> bool {
        matches!(self.unit, PeriodUnit::Month | PeriodUnit::Year)
    }
}

impl fmt::Display for PaymentPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "1 {}", self.unit)
        } else {
            write!(f, "{} {}s", self.count, self.unit)
        }
    }
}

/// Days that do not exist in every month start at 29
const LAST_SAFE_DAY_OF_MONTH: u32 = 28;

/// Whether a billing anchor on `date` must be moved to the first of the next month.
///
/// Month-based periods anchored on the 29th, 30th or 31st would drift whenever a
/// shorter month comes along, so those anchors get pushed forward.
pub fn day_needs_adjustment(period: PaymentPeriod, date: NaiveDate) -> bool {
    period.is_month_based() && date.day() > LAST_SAFE_DAY_OF_MONTH
}

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Signed number of days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// First day of the month following `date`
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while next.day() != 1 {
        next += Duration::days(1);
    }
    next
}
