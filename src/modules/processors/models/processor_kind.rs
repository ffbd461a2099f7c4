use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported payment processors, with the stable numeric ids stored alongside transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    Avangate = 1,
    PayPal = 2,
    Braintree = 3,
    DalPay = 4,
    Recurly = 5,
}

impl ProcessorKind {
    pub const ALL: [ProcessorKind; 5] = [
        ProcessorKind::Avangate,
        ProcessorKind::PayPal,
        ProcessorKind::Braintree,
        ProcessorKind::DalPay,
        ProcessorKind::Recurly,
    ];

    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProcessorKind::Avangate => "avangate",
            ProcessorKind::PayPal => "paypal",
            ProcessorKind::Braintree => "braintree",
            ProcessorKind::DalPay => "dalpay",
            ProcessorKind::Recurly => "recurly",
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ProcessorKind {
    type Error = String;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        ProcessorKind::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| format!("Unknown processor id: {}", id))
    }
}

impl std::str::FromStr for ProcessorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown processor: {}", s))
    }
}
