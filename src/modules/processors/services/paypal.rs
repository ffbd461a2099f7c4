use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use super::processor_trait::PaymentProcessor;
use crate::config::PayPalConfig;
use crate::core::{AppError, PeriodUnit, Result};
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction, ACTION_KEY};

const PAYPAL_LIVE_URL: &str = "https://www.paypal.com/cgi-bin/webscr";
const PAYPAL_SANDBOX_URL: &str = "https://www.sandbox.paypal.com/cgi-bin/webscr";

/// PayPal Payments Standard (buy now and subscribe buttons)
pub struct PayPalProcessor {
    config: PayPalConfig,
}

impl PayPalProcessor {
    pub fn new(config: PayPalConfig) -> Self {
        Self { config }
    }

    pub fn checkout_url(&self) -> &'static str {
        if self.config.sandbox {
            PAYPAL_SANDBOX_URL
        } else {
            PAYPAL_LIVE_URL
        }
    }

    fn insert_common_fields(&self, transaction: &Transaction, fields: &mut FieldMap) {
        let item = &transaction.item;

        fields
            .insert(ACTION_KEY, self.checkout_url())
            .insert("business", &self.config.business)
            .insert("item_name", &item.product)
            .insert("item_number", item.id)
            .insert("custom", transaction.id)
            .insert("currency_code", item.currency)
            .insert("charset", "utf-8")
            .insert("no_shipping", 1);

        if let Some(ref notify_url) = self.config.notify_url {
            fields.insert("notify_url", notify_url);
        }
        if let Some(ref return_url) = self.config.return_url {
            fields.insert("return", return_url);
        }
    }

    fn insert_subscription_fields(
        &self,
        transaction: &Transaction,
        fields: &mut FieldMap,
    ) -> Result<()> {
        let item = &transaction.item;
        let period = item.payment_period;

        // Billing cycle limits of the subscribe button
        let max_count = match period.unit {
            PeriodUnit::Day => 90,
            PeriodUnit::Week => 52,
            PeriodUnit::Month => 24,
            PeriodUnit::Year => 5,
        };
        if period.count == 0 || period.count > max_count {
            return Err(AppError::validation(format!(
                "PayPal cannot bill every {}",
                period
            )));
        }

        fields
            .insert("cmd", "_xclick-subscriptions")
            .insert("a3", item.currency.format_price(item.price))
            .insert("p3", period.count)
            .insert("t3", period.unit.code())
            .insert("src", 1)
            .insert("sra", 1);

        Ok(())
    }
}

#[async_trait]
impl PaymentProcessor for PayPalProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::PayPal
    }

    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        let item = &transaction.item;
        self.insert_common_fields(transaction, &mut fields);

        if item.is_subscription() {
            self.insert_subscription_fields(transaction, &mut fields)?;
        } else {
            fields
                .insert("cmd", "_xclick")
                .insert("amount", item.currency.format_price(item.price))
                .insert("quantity", 1);
        }

        Ok(fields)
    }

    async fn amend_hash_change_subscription(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        if !transaction.item.is_subscription() {
            return Err(AppError::validation(format!(
                "Transaction {} is not a subscription",
                transaction.id
            )));
        }

        self.insert_common_fields(transaction, &mut fields);
        self.insert_subscription_fields(transaction, &mut fields)?;
        // Modify the existing profile only, never open a second one
        fields.insert("modify", 2);

        Ok(fields)
    }

    /// One day ahead of the due date, so the new profile is active when the period ends
    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate {
        transaction.item.due_payment_date - Duration::days(1)
    }
}
