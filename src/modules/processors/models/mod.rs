pub mod field_map;
pub mod processor_kind;
pub mod transaction;

pub use field_map::{FieldMap, ACTION_KEY, CSRF_TOKEN_KEY, PURCHASE_ID_KEY};
pub use processor_kind::ProcessorKind;
pub use transaction::{Item, ItemKind, Transaction};
