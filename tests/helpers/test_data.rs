// Test Data Factory
//
// Builds transactions and processor configurations with fixed, readable values.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use payee::config::{
    AvangateConfig, BraintreeConfig, DalPayConfig, PayPalConfig, ProcessorsConfig, RecurlyConfig,
};
use payee::core::{Currency, PaymentPeriod, PeriodUnit};
use payee::processors::{Item, ItemKind, ProcessorKind, Transaction};

pub const DALPAY_TEST_URL: &str = "https://dalpay.test/cgi-bin/order2/processorder1.pl";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test data factory for transactions and configuration
pub struct TestDataFactory;

impl TestDataFactory {
    /// Transaction for a $19.99 monthly "pro-plan"
    pub fn transaction(
        id: i64,
        processor: ProcessorKind,
        kind: ItemKind,
        due_payment_date: NaiveDate,
    ) -> Transaction {
        Transaction {
            id,
            processor,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            item: Item {
                id: id * 10,
                product: "pro-plan".to_string(),
                price: dec!(19.99),
                currency: Currency::USD,
                kind,
                due_payment_date,
                payment_period: PaymentPeriod::monthly(),
                subscription_reference: None,
            },
        }
    }

    /// Same as [`Self::transaction`] with a custom billing period
    pub fn transaction_with_period(
        processor: ProcessorKind,
        due_payment_date: NaiveDate,
        unit: PeriodUnit,
        count: u16,
    ) -> Transaction {
        let mut transaction =
            Self::transaction(1, processor, ItemKind::Subscription, due_payment_date);
        transaction.item.payment_period = PaymentPeriod::new(unit, count);
        transaction
    }

    /// Credentials for every processor, pointing at test endpoints
    pub fn processors_config() -> ProcessorsConfig {
        ProcessorsConfig {
            dalpay: Some(DalPayConfig {
                merchant_id: "M100".to_string(),
                page_id: "1".to_string(),
                checkout_url: DALPAY_TEST_URL.to_string(),
            }),
            paypal: Some(PayPalConfig {
                business: "billing@example.com".to_string(),
                sandbox: true,
                notify_url: None,
                return_url: Some("https://shop.example.com/thanks".to_string()),
            }),
            avangate: Some(AvangateConfig {
                merchant_code: "ACME".to_string(),
                secret_key: "avangate-secret".to_string(),
                checkout_url: "https://avangate.test/order/checkout.php".to_string(),
            }),
            braintree: Some(BraintreeConfig {
                merchant_id: "m123".to_string(),
                public_key: "pub".to_string(),
                private_key: "priv".to_string(),
                sandbox: true,
                redirect_url: "https://shop.example.com/braintree".to_string(),
            }),
            recurly: Some(RecurlyConfig {
                subdomain: "acme".to_string(),
                private_key: "recurly-key".to_string(),
            }),
        }
    }
}
