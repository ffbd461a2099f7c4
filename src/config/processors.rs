use crate::core::{AppError, Result};
use std::env;

pub const DALPAY_CHECKOUT_URL: &str = "https://secure.dalpay.com/cgi-bin/order2/processorder1.pl";
pub const AVANGATE_CHECKOUT_URL: &str = "https://secure.avangate.com/order/checkout.php";

#[derive(Debug, Clone)]
pub struct DalPayConfig {
    pub merchant_id: String,
    pub page_id: String,
    pub checkout_url: String,
}

#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub business: String,
    pub sandbox: bool,
    pub notify_url: Option<String>,
    pub return_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AvangateConfig {
    pub merchant_code: String,
    pub secret_key: String,
    pub checkout_url: String,
}

#[derive(Debug, Clone)]
pub struct BraintreeConfig {
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
    pub sandbox: bool,
    pub redirect_url: String,
}

#[derive(Debug, Clone)]
pub struct RecurlyConfig {
    pub subdomain: String,
    pub private_key: String,
}

/// Credentials for every processor; a processor is enabled when its section is present
#[derive(Debug, Clone, Default)]
pub struct ProcessorsConfig {
    pub dalpay: Option<DalPayConfig>,
    pub paypal: Option<PayPalConfig>,
    pub avangate: Option<AvangateConfig>,
    pub braintree: Option<BraintreeConfig>,
    pub recurly: Option<RecurlyConfig>,
}

impl ProcessorsConfig {
    pub fn from_env() -> Result<Self> {
        let dalpay = match optional_var("DALPAY_MERCHANT_ID") {
            Some(merchant_id) => Some(DalPayConfig {
                merchant_id,
                page_id: required_var("DALPAY_PAGE_ID")?,
                checkout_url: optional_var("DALPAY_CHECKOUT_URL")
                    .unwrap_or_else(|| DALPAY_CHECKOUT_URL.to_string()),
            }),
            None => None,
        };

        let paypal = match optional_var("PAYPAL_BUSINESS") {
            Some(business) => Some(PayPalConfig {
                business,
                sandbox: bool_var("PAYPAL_SANDBOX", true)?,
                notify_url: optional_var("PAYPAL_NOTIFY_URL"),
                return_url: optional_var("PAYPAL_RETURN_URL"),
            }),
            None => None,
        };

        let avangate = match optional_var("AVANGATE_MERCHANT_CODE") {
            Some(merchant_code) => Some(AvangateConfig {
                merchant_code,
                secret_key: required_var("AVANGATE_SECRET_KEY")?,
                checkout_url: optional_var("AVANGATE_CHECKOUT_URL")
                    .unwrap_or_else(|| AVANGATE_CHECKOUT_URL.to_string()),
            }),
            None => None,
        };

        let braintree = match optional_var("BRAINTREE_MERCHANT_ID") {
            Some(merchant_id) => Some(BraintreeConfig {
                merchant_id,
                public_key: required_var("BRAINTREE_PUBLIC_KEY")?,
                private_key: required_var("BRAINTREE_PRIVATE_KEY")?,
                sandbox: bool_var("BRAINTREE_SANDBOX", true)?,
                redirect_url: required_var("BRAINTREE_REDIRECT_URL")?,
            }),
            None => None,
        };

        let recurly = match optional_var("RECURLY_SUBDOMAIN") {
            Some(subdomain) => Some(RecurlyConfig {
                subdomain,
                private_key: required_var("RECURLY_PRIVATE_KEY")?,
            }),
            None => None,
        };

        Ok(ProcessorsConfig {
            dalpay,
            paypal,
            avangate,
            braintree,
            recurly,
        })
    }

    /// Whether no processor is configured at all
    pub fn is_empty(&self) -> bool {
        self.dalpay.is_none()
            && self.paypal.is_none()
            && self.avangate.is_none()
            && self.braintree.is_none()
            && self.recurly.is_none()
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(name: &str) -> Result<String> {
    optional_var(name).ok_or_else(|| AppError::Configuration(format!("{} not set", name)))
}

fn bool_var(name: &str, default: bool) -> Result<bool> {
    match optional_var(name) {
        None => Ok(default),
        Some(v) => match v.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(AppError::Configuration(format!("Invalid {}", name))),
        },
    }
}
