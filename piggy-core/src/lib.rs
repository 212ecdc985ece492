//! piggy-core: transaction model, category taxonomy and shared helpers

pub mod error;
pub mod money;
pub mod taxonomy;
pub mod transaction;

pub use error::{Error, Result};
pub use taxonomy::{CategoryConfig, CategoryRule, Taxonomy, TaxonomyBuilder, TaxonomyConfig};
pub use transaction::{Flow, Transaction, UNCATEGORIZED};
