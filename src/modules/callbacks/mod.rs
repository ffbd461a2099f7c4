pub mod models;
pub mod services;

pub use models::{CallbackEvent, Payment, Subscription, SubscriptionStatus};
pub use services::{CallbackDispatcher, LoggingCallback, PaymentCallback};
