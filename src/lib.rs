//! Payee payment processor integration library
//!
//! Sends customers to external payment processors (Avangate, PayPal, Braintree,
//! DalPay, Recurly) with auto-submitting forms, and computes billing-period proration.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::callbacks;
pub use modules::processors;
