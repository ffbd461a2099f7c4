use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;
use crate::modules::processors::models::{FieldMap, ProcessorKind};

/// A confirmed payment reported by a processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub transaction_id: i64,
    pub processor: ProcessorKind,
    pub amount: Decimal,
    pub currency: Currency,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Stopped,
    Canceled,
}

/// A processor-side subscription tied to one of our items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub item_id: i64,
    pub processor: ProcessorKind,
    /// Processor's own id for the subscription
    pub reference: String,
    pub status: SubscriptionStatus,
}

/// Lifecycle notification fanned out to callbacks
#[derive(Debug, Clone)]
pub enum CallbackEvent {
    Payment(Payment),
    SubscriptionStarted(Subscription),
    SubscriptionStopped(Subscription),
    /// `fields` carries the processor's notification payload
    SubscriptionCreated {
        fields: FieldMap,
        subscription: Subscription,
    },
    SubscriptionCanceled {
        fields: FieldMap,
        subscription: Subscription,
    },
}

impl CallbackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CallbackEvent::Payment(_) => "payment",
            CallbackEvent::SubscriptionStarted(_) => "subscription_start",
            CallbackEvent::SubscriptionStopped(_) => "subscription_stop",
            CallbackEvent::SubscriptionCreated { .. } => "subscription_created",
            CallbackEvent::SubscriptionCanceled { .. } => "subscription_canceled",
        }
    }
}
