pub mod builder;
pub mod candidates;
pub mod combinations;
pub mod itemset;
pub mod lattice;
pub mod mining;
pub mod rules;
pub mod storage;
pub mod support;


pub use itemset::{FrequentItemset, Item, Itemset};
pub use lattice::{summarize_lattice, LatticeSummary};
pub use mining::apriori_levels;
pub use rules::{generate_rules, AssociationRule};
pub use storage::{FrequentLevel, ItemsetStorage};
