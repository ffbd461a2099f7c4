use async_trait::async_trait;
use chrono::NaiveDate;

use super::proration;
use crate::core::calendar;
use crate::core::{AppError, Result};
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction};

/// A payment processor that takes the customer's browser via a posted form.
///
/// Implementations only decide which fields the processor expects; rendering and
/// persistence are handled by `ProcessorService`.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Which processor this is
    fn kind(&self) -> ProcessorKind;

    /// Add authentication, pricing and the destination URL for a new purchase
    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        fields: FieldMap,
    ) -> Result<FieldMap>;

    /// Add the fields for an in-place subscription change
    async fn amend_hash_change_subscription(
        &self,
        _transaction: &Transaction,
        _fields: FieldMap,
    ) -> Result<FieldMap> {
        Err(AppError::not_implemented(format!(
            "{} does not support subscription changes",
            self.kind()
        )))
    }

    /// First day on which a subscription for this transaction may be started
    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate;

    /// Days left in the current billing period
    fn calculate_remaining_days(&self, transaction: &Transaction) -> i64 {
        self.calculate_remaining_days_on(transaction, calendar::today())
    }

    /// See [`proration::calculate_remaining_days_on`]
    fn calculate_remaining_days_on(&self, transaction: &Transaction, today: NaiveDate) -> i64 {
        proration::calculate_remaining_days_on(transaction, today)
    }

    /// Only meaningful for processors where renewals are bought manually
    fn ready_for_subscription(&self, transaction: &Transaction) -> bool {
        self.ready_for_subscription_on(transaction, calendar::today())
    }

    fn ready_for_subscription_on(&self, transaction: &Transaction, today: NaiveDate) -> bool {
        today >= self.subscription_allowed_date(transaction)
    }
}
