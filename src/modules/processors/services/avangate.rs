use async_trait::async_trait;
use chrono::NaiveDate;

use super::processor_trait::PaymentProcessor;
use super::signing::{hmac_sha256_hex, length_prefixed};
use crate::config::AvangateConfig;
use crate::core::Result;
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction, ACTION_KEY};

/// Avangate buy-link checkout with a signed dynamic price
pub struct AvangateProcessor {
    config: AvangateConfig,
}

impl AvangateProcessor {
    pub fn new(config: AvangateConfig) -> Self {
        Self { config }
    }

    /// Signature over the length-prefixed values that fix the price of the order
    fn sign(&self, values: &[&str]) -> Result<String> {
        hmac_sha256_hex(&self.config.secret_key, &length_prefixed(values.iter().copied()))
    }
}

#[async_trait]
impl PaymentProcessor for AvangateProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Avangate
    }

    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        let item = &transaction.item;
        let price = item.currency.format_price(item.price);
        let currency = item.currency.to_string();
        let reference = transaction.id.to_string();

        let signature = self.sign(&[
            self.config.merchant_code.as_str(),
            item.product.as_str(),
            "1",
            price.as_str(),
            currency.as_str(),
            reference.as_str(),
        ])?;

        fields
            .insert(ACTION_KEY, &self.config.checkout_url)
            .insert("MERCHANT", &self.config.merchant_code)
            .insert("PRODS", &item.product)
            .insert("QTY", 1)
            .insert(format!("PRICES[{}][{}]", item.product, currency), &price)
            .insert("CURRENCY", &currency)
            .insert("REF", &reference)
            .insert("SIGNATURE", signature);

        if item.is_subscription() {
            fields.insert("RENEWAL", item.payment_period.to_string());
        }

        Ok(fields)
    }

    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate {
        transaction.item.due_payment_date
    }
}
