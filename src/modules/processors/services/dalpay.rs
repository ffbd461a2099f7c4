use async_trait::async_trait;
use chrono::NaiveDate;

use super::processor_trait::PaymentProcessor;
use crate::config::DalPayConfig;
use crate::core::Result;
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction, ACTION_KEY};

/// DalPay checkout.
///
/// DalPay has no recurring billing we rely on: subscriptions are renewed by buying
/// the next period once it becomes due.
pub struct DalPayProcessor {
    config: DalPayConfig,
}

impl DalPayProcessor {
    pub fn new(config: DalPayConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PaymentProcessor for DalPayProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::DalPay
    }

    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        let item = &transaction.item;

        fields
            .insert(ACTION_KEY, &self.config.checkout_url)
            .insert("mer_id", &self.config.merchant_id)
            .insert("pageid", &self.config.page_id)
            .insert("item1_desc", &item.product)
            .insert("item1_price", item.currency.format_price(item.price))
            .insert("item1_qty", 1)
            .insert("currency", item.currency)
            .insert("user1", transaction.id);

        Ok(fields)
    }

    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate {
        transaction.item.due_payment_date
    }
}
