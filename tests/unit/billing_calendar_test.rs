// Billing calendar rules: end-of-month anchors and period arithmetic

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::{Datelike, Duration, NaiveDate};
use helpers::date;
use payee::core::calendar::{day_needs_adjustment, days_between, first_of_next_month};
use payee::core::{PaymentPeriod, PeriodUnit};
use proptest::prelude::*;

#[test]
fn test_month_based_periods_adjust_late_days() {
    let monthly = PaymentPeriod::new(PeriodUnit::Month, 1);
    let yearly = PaymentPeriod::new(PeriodUnit::Year, 1);

    assert!(!day_needs_adjustment(monthly, date(2026, 1, 28)));
    assert!(day_needs_adjustment(monthly, date(2026, 1, 29)));
    assert!(day_needs_adjustment(monthly, date(2026, 1, 31)));
    assert!(day_needs_adjustment(yearly, date(2024, 2, 29)));
    assert!(!day_needs_adjustment(yearly, date(2026, 2, 1)));
}

#[test]
fn test_day_and_week_periods_never_adjust() {
    for unit in [PeriodUnit::Day, PeriodUnit::Week] {
        let period = PaymentPeriod::new(unit, 2);
        assert!(!day_needs_adjustment(period, date(2026, 1, 31)));
        assert!(!day_needs_adjustment(period, date(2026, 3, 30)));
    }
}

#[test]
fn test_first_of_next_month_across_year_end() {
    assert_eq!(first_of_next_month(date(2026, 12, 31)), date(2027, 1, 1));
    assert_eq!(first_of_next_month(date(2026, 12, 1)), date(2027, 1, 1));
    assert_eq!(first_of_next_month(date(2024, 2, 29)), date(2024, 3, 1));
}

#[test]
fn test_period_display() {
    assert_eq!(PaymentPeriod::monthly().to_string(), "1 month");
    assert_eq!(PaymentPeriod::new(PeriodUnit::Year, 2).to_string(), "2 years");
}

proptest! {
    #[test]
    fn first_of_next_month_is_within_a_month(offset in 0i64..20_000) {
        let day = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset);
        let next = first_of_next_month(day);

        prop_assert_eq!(next.day(), 1);
        prop_assert!(next > day);
        prop_assert!(days_between(day, next) <= 31);
    }

    #[test]
    fn days_between_is_antisymmetric(a in 0i64..20_000, b in 0i64..20_000) {
        let base = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let (x, y) = (base + Duration::days(a), base + Duration::days(b));

        prop_assert_eq!(days_between(x, y), -days_between(y, x));
        prop_assert_eq!(days_between(x, y), b - a);
    }
}
