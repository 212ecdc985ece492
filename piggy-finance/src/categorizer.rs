//! Deterministic keyword categorizer.
//!
//! Walks the taxonomy in priority order and returns the first category with
//! a keyword contained in the lower-cased description. Amount, date and
//! previously assigned categories play no part.

use piggy_core::{Taxonomy, Transaction};
use tracing::debug;

/// Categorize a single description
pub fn categorize<'a>(description: &str, taxonomy: &'a Taxonomy) -> &'a str {
    let lowered = description.to_lowercase();
    taxonomy
        .rules()
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.name())
        .unwrap_or_else(|| taxonomy.other())
}

/// Assign a category to every transaction that does not have one yet.
/// Returns the number of transactions categorized by this call.
pub fn categorize_all(transactions: &mut [Transaction], taxonomy: &Taxonomy) -> usize {
    let mut assigned = 0;
    for txn in transactions.iter_mut() {
        if txn.is_categorized() {
            debug!(description = %txn.description, category = txn.category(), "already categorized, skipping");
            continue;
        }
        let category = categorize(&txn.description, taxonomy);
        if txn.assign_category(category).is_ok() {
            assigned += 1;
        }
    }
    assigned
}
