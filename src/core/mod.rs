pub mod calendar;
pub mod currency;
pub mod error;

pub use calendar::{PaymentPeriod, PeriodUnit};
pub use currency::Currency;
pub use error::{AppError, Result};
