use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the configured processors, with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(3)", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Japanese Yen (no decimal places)
    JPY,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            Currency::USD | Currency::EUR | Currency::GBP => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Validates that a price is representable in this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        if amount.scale() > self.scale() && amount != self.round(amount) {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self,
                self.scale(),
                amount.scale()
            ));
        }

        if amount < Decimal::ZERO {
            return Err(format!("{} amount cannot be negative", self));
        }

        Ok(())
    }

    /// Formats a price the way processor forms expect it: plain digits, fixed scale
    pub fn format_price(&self, amount: Decimal) -> String {
        format!("{:.*}", self.scale() as usize, self.round(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
            Currency::JPY => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
