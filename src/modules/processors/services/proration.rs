use chrono::{Datelike, NaiveDate};

use crate::core::calendar::{day_needs_adjustment, days_between, first_of_next_month};
use crate::modules::processors::models::Transaction;

/// Days left in the item's current billing period, as seen on `today`.
///
/// Negative when the due date has already passed. When the due date lies ahead, the
/// period is anchored on the due date; an anchor that needs end-of-month adjustment
/// is moved to the first of the following month and the extra days are counted.
pub fn calculate_remaining_days_on(transaction: &Transaction, today: NaiveDate) -> i64 {
    let item = &transaction.item;

    let remaining_days = days_between(today, item.due_payment_date);
    let anchor = if remaining_days > 0 {
        item.due_payment_date
    } else {
        today
    };

    if day_needs_adjustment(item.payment_period, anchor) {
        do_days_adjustment(anchor, remaining_days)
    } else {
        remaining_days
    }
}

/// Add the days needed to walk from `date` to the next first-of-month
pub fn do_days_adjustment(date: NaiveDate, remaining_days: i64) -> i64 {
    if date.day() == 1 {
        return remaining_days;
    }
    remaining_days + days_between(date, first_of_next_month(date))
}
