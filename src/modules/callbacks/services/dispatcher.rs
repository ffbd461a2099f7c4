use std::sync::Arc;

use tracing::debug;

use super::payment_callback::PaymentCallback;
use crate::modules::callbacks::models::CallbackEvent;

/// Fans lifecycle events out to every registered callback, in registration order.
///
/// Events are not deduplicated; a repeated event reaches the callbacks again.
#[derive(Default, Clone)]
pub struct CallbackDispatcher {
    callbacks: Vec<Arc<dyn PaymentCallback>>,
}

impl CallbackDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, callback: Arc<dyn PaymentCallback>) {
        self.callbacks.push(callback);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn dispatch(&self, event: &CallbackEvent) {
        debug!(
            event = event.name(),
            callbacks = self.callbacks.len(),
            "Dispatching callback event"
        );

        for callback in &self.callbacks {
            dispatch_event(callback.as_ref(), event);
        }
    }
}

/// Route one event to the matching hook of `callback`
pub fn dispatch_event(callback: &dyn PaymentCallback, event: &CallbackEvent) {
    match event {
        CallbackEvent::Payment(payment) => callback.on_payment(payment),
        CallbackEvent::SubscriptionStarted(subscription) => {
            callback.on_subscription_start(subscription)
        }
        CallbackEvent::SubscriptionStopped(subscription) => {
            callback.on_subscription_stop(subscription)
        }
        CallbackEvent::SubscriptionCreated {
            fields,
            subscription,
        } => callback.on_subscription_created(fields, subscription),
        CallbackEvent::SubscriptionCanceled {
            fields,
            subscription,
        } => callback.on_subscription_canceled(fields, subscription),
    }
}
