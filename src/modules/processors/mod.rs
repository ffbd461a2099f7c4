pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{FieldMap, Item, ItemKind, ProcessorKind, Transaction};
pub use repositories::{
    InMemoryTransactionRepository, MySqlTransactionRepository, TransactionRepository,
};
pub use services::{PaymentProcessor, ProcessorInfo, ProcessorService, Proration};
