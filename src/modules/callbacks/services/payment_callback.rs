use tracing::info;

use crate::modules::callbacks::models::{Payment, Subscription};
use crate::modules::processors::models::FieldMap;

/// Hooks for payment and subscription lifecycle events.
///
/// Every hook does nothing by default; implement only the ones you need.
///
/// `on_subscription_start` may fire for a subscription that is already running and
/// `on_subscription_stop` for one that is already stopped. Treat both as idempotent
/// notifications, not exactly-once events.
pub trait PaymentCallback: Send + Sync {
    fn on_payment(&self, _payment: &Payment) {}

    fn on_subscription_start(&self, _subscription: &Subscription) {}

    fn on_subscription_stop(&self, _subscription: &Subscription) {}

    fn on_subscription_created(&self, _fields: &FieldMap, _subscription: &Subscription) {}

    fn on_subscription_canceled(&self, _fields: &FieldMap, _subscription: &Subscription) {}
}

/// Callback that records every event in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingCallback;

impl PaymentCallback for LoggingCallback {
    fn on_payment(&self, payment: &Payment) {
        info!(
            transaction_id = payment.transaction_id,
            processor = %payment.processor,
            amount = %payment.amount,
            currency = %payment.currency,
            "Payment received"
        );
    }

    fn on_subscription_start(&self, subscription: &Subscription) {
        info!(
            item_id = subscription.item_id,
            processor = %subscription.processor,
            reference = %subscription.reference,
            "Subscription started"
        );
    }

    fn on_subscription_stop(&self, subscription: &Subscription) {
        info!(
            item_id = subscription.item_id,
            processor = %subscription.processor,
            reference = %subscription.reference,
            "Subscription stopped"
        );
    }

    fn on_subscription_created(&self, fields: &FieldMap, subscription: &Subscription) {
        info!(
            item_id = subscription.item_id,
            processor = %subscription.processor,
            reference = %subscription.reference,
            field_count = fields.len(),
            "Subscription created"
        );
    }

    fn on_subscription_canceled(&self, fields: &FieldMap, subscription: &Subscription) {
        info!(
            item_id = subscription.item_id,
            processor = %subscription.processor,
            reference = %subscription.reference,
            field_count = fields.len(),
            "Subscription canceled"
        );
    }
}
