use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::processor_trait::PaymentProcessor;
use super::signing::{encode_query, hmac_sha256_hex};
use crate::config::RecurlyConfig;
use crate::core::{AppError, Result};
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction, ACTION_KEY};

/// Recurly hosted payment pages. Recurly runs the renewals itself.
pub struct RecurlyProcessor {
    config: RecurlyConfig,
}

impl RecurlyProcessor {
    pub fn new(config: RecurlyConfig) -> Self {
        Self { config }
    }

    pub fn hosted_page_url(&self, plan_code: &str, account_code: &str) -> String {
        format!(
            "https://{}.recurly.com/subscribe/{}/{}",
            self.config.subdomain,
            urlencoding::encode(plan_code),
            urlencoding::encode(account_code)
        )
    }
}

#[async_trait]
impl PaymentProcessor for RecurlyProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Recurly
    }

    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        let item = &transaction.item;
        if !item.is_subscription() {
            return Err(AppError::validation(
                "Recurly hosted pages only sell subscriptions",
            ));
        }

        let account_code = transaction.id.to_string();
        let currency = item.currency.to_string();
        let timestamp = Utc::now().timestamp().to_string();

        // Protected parameters, sorted by name
        let protected = encode_query([
            ("account_code", account_code.as_str()),
            ("currency", currency.as_str()),
            ("plan_code", item.product.as_str()),
            ("timestamp", timestamp.as_str()),
        ]);
        let signature = hmac_sha256_hex(&self.config.private_key, &protected)?;

        fields
            .insert(ACTION_KEY, self.hosted_page_url(&item.product, &account_code))
            .insert("quantity", 1)
            .insert("currency", currency)
            .insert("timestamp", timestamp)
            .insert("signature", signature);

        Ok(fields)
    }

    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate {
        transaction.created_at.date_naive()
    }
}
