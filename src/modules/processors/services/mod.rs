pub mod avangate;
pub mod braintree;
pub mod dalpay;
pub mod paypal;
pub mod processor_service;
pub mod processor_trait;
pub mod proration;
pub mod recurly;
pub mod redirect;
pub mod signing;

pub use avangate::AvangateProcessor;
pub use braintree::BraintreeProcessor;
pub use dalpay::DalPayProcessor;
pub use paypal::PayPalProcessor;
pub use processor_service::{ProcessorInfo, ProcessorService, Proration};
pub use processor_trait::PaymentProcessor;
pub use recurly::RecurlyProcessor;
pub use redirect::{escape_html, redirect_to_processor, render_redirect_form};
