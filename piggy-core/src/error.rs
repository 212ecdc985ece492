//! Error types for piggy-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("duplicate category in taxonomy: {0}")]
    DuplicateCategory(String),

    #[error("category '{category}' has an empty keyword (it would match every description)")]
    EmptyKeyword { category: String },

    #[error("fallback category name must not be empty")]
    EmptyFallback,

    #[error("transaction is already categorized as '{0}'")]
    CategoryAlreadyAssigned(String),
}

pub type Result<T> = std::result::Result<T, Error>;
