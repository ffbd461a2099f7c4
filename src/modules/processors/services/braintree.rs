use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sha2::{Digest, Sha256};

use super::processor_trait::PaymentProcessor;
use super::signing::{encode_query, hmac_sha256_hex};
use crate::config::BraintreeConfig;
use crate::core::Result;
use crate::modules::processors::models::{FieldMap, ProcessorKind, Transaction, ACTION_KEY};

const BRAINTREE_LIVE_URL: &str = "https://api.braintreegateway.com";
const BRAINTREE_SANDBOX_URL: &str = "https://sandbox.braintreegateway.com";
const TRANSPARENT_REDIRECT_API_VERSION: &str = "2";

/// Braintree transparent redirect.
///
/// Card details go straight from the browser to Braintree; our part is the signed
/// `tr_data` that pins the amount and the kind of request.
pub struct BraintreeProcessor {
    config: BraintreeConfig,
}

impl BraintreeProcessor {
    pub fn new(config: BraintreeConfig) -> Self {
        Self { config }
    }

    pub fn transparent_redirect_url(&self) -> String {
        let base = if self.config.sandbox {
            BRAINTREE_SANDBOX_URL
        } else {
            BRAINTREE_LIVE_URL
        };
        format!(
            "{}/merchants/{}/transparent_redirect_requests",
            base, self.config.merchant_id
        )
    }

    /// `<hex hmac>|<query>`, keyed with the SHA-256 digest of the private key
    fn tr_data(&self, params: &[(&str, &str)]) -> Result<String> {
        let query = encode_query(params.iter().copied());
        let key = hex::encode(Sha256::digest(self.config.private_key.as_bytes()));
        let signature = hmac_sha256_hex(&key, &query)?;
        Ok(format!("{}|{}", signature, query))
    }
}

#[async_trait]
impl PaymentProcessor for BraintreeProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Braintree
    }

    async fn amend_hash_new_purchase(
        &self,
        transaction: &Transaction,
        mut fields: FieldMap,
    ) -> Result<FieldMap> {
        let item = &transaction.item;
        let time = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let transaction_id = transaction.id.to_string();
        let amount = item.currency.format_price(item.price);

        let mut params: Vec<(&str, &str)> = vec![
            ("api_version", TRANSPARENT_REDIRECT_API_VERSION),
            ("public_key", self.config.public_key.as_str()),
            ("redirect_url", self.config.redirect_url.as_str()),
            ("time", time.as_str()),
        ];

        if item.is_subscription() {
            // Vault the card; the subscription is created once the customer exists
            params.push(("kind", "create_customer"));
            params.push((
                "customer[custom_fields][payee_transaction]",
                transaction_id.as_str(),
            ));
        } else {
            params.push(("kind", "create_transaction"));
            params.push(("transaction[amount]", amount.as_str()));
            params.push(("transaction[order_id]", transaction_id.as_str()));
            params.push(("transaction[type]", "sale"));
        }

        let tr_data = self.tr_data(&params)?;

        fields
            .insert(ACTION_KEY, self.transparent_redirect_url())
            .insert("tr_data", tr_data);

        Ok(fields)
    }

    fn subscription_allowed_date(&self, transaction: &Transaction) -> NaiveDate {
        transaction.item.due_payment_date
    }
}
