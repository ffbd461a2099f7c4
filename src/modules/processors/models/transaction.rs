use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProcessorKind;
use crate::core::{Currency, PaymentPeriod};

/// What kind of billing an item carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(16)", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Purchase,
    Subscription,
}

/// Billable item owned by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub product: String,
    pub price: Decimal,
    pub currency: Currency,
    pub kind: ItemKind,
    pub due_payment_date: NaiveDate,
    pub payment_period: PaymentPeriod,
    /// Processor-side subscription id, once one exists
    pub subscription_reference: Option<String>,
}

impl Item {
    pub fn is_subscription(&self) -> bool {
        self.kind == ItemKind::Subscription
    }

    /// Bring the billing state up to date before a new purchase.
    ///
    /// A lapsed subscription restarts from `today`. Returns whether anything changed.
    pub fn adjust(&mut self, today: NaiveDate) -> bool {
        if self.is_subscription() && self.due_payment_date < today {
            self.due_payment_date = today;
            return true;
        }
        false
    }
}

/// A purchase or subscription change routed through one processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub processor: ProcessorKind,
    pub item: Item,
    pub created_at: DateTime<Utc>,
}
