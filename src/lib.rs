//! Apriori market-basket mining.
//!
//! Finds frequent, closed and maximal itemsets over a transaction collection and
//! derives the association rules that clear a confidence threshold.
//!
//! ```
//! use basket::{mine, Itemset};
//!
//! let catalog = ['a', 'b', 'c', 'd', 'e'];
//! let transactions: Vec<Vec<char>> = ["acd", "bce", "abce", "be"]
//!     .iter()
//!     .map(|t| t.chars().collect())
//!     .collect();
//!
//! let result = mine(0.5, 0.8, &catalog, &transactions).unwrap();
//! assert_eq!(result.frequent.len(), 9);
//! assert_eq!(result.maximal, vec![Itemset::from("ac"), Itemset::from("bce")]);
//! assert_eq!(result.rules.len(), 5);
//! ```

pub mod apriori;
pub mod config;
pub mod engine;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use apriori::{AssociationRule, FrequentItemset, FrequentLevel, Item, Itemset};
pub use config::AprioriConfig;
pub use engine::{apriori, apriori_from_matrix, mine, MiningResult};
pub use error::{MiningError, Result};
