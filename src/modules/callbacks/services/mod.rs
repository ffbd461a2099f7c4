pub mod dispatcher;
pub mod payment_callback;

pub use dispatcher::{dispatch_event, CallbackDispatcher};
pub use payment_callback::{LoggingCallback, PaymentCallback};
