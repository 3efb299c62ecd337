//! Error types for mining runs.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, MiningError>;

/// Input rejected before mining starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    #[error("minimum support must be in (0, 1], got {0}")]
    InvalidSupport(f64),

    #[error("minimum confidence must be in (0, 1], got {0}")]
    InvalidConfidence(f64),

    #[error("maximum itemset length must be at least 1")]
    InvalidMaxLen,

    #[error("item catalog is empty")]
    EmptyCatalog,

    #[error("item {0} appears more than once in the catalog")]
    DuplicateItem(String),

    #[error("transaction collection is empty")]
    EmptyTransactions,

    #[error("transaction {transaction} contains item {item} which is not in the catalog")]
    UnknownItem { transaction: usize, item: String },
}
