use super::combinations::proper_subsets;
use super::itemset::{FrequentItemset, Item, Itemset};
use indexmap::IndexMap;
use std::fmt;

/// Association rule: antecedent => consequent
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule<T> {
    pub antecedent: Itemset<T>,
    pub consequent: Itemset<T>,
    /// Support count of antecedent ∪ consequent
    pub support: usize,
    pub antecedent_support: usize,
    pub consequent_support: usize,
    /// support / antecedent_support
    pub confidence: f64,
    /// confidence / relative consequent support
    pub lift: f64,
}

impl<T: fmt::Display> fmt::Display for AssociationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

/// Strong rules of every frequent itemset with at least two labels.
///
/// Each non-empty proper subset is tried as antecedent; subsets are visited by
/// increasing size, then canonical order, and itemsets in `frequent` order.
pub fn generate_rules<T: Item>(
    frequent: &IndexMap<Itemset<T>, FrequentItemset<T>>,
    min_confidence: f64,
    transaction_count: usize,
) -> Vec<AssociationRule<T>> {
    let mut rules = Vec::new();

    for record in frequent.values().filter(|record| record.itemset.len() >= 2) {
        for antecedent_items in proper_subsets(record.itemset.items()) {
            let Some(antecedent) = frequent.get(antecedent_items.as_slice()) else {
                continue;
            };
            let confidence = record.support as f64 / antecedent.support as f64;
            if confidence < min_confidence {
                continue;
            }

            let consequent = record.itemset.difference(&antecedent_items);
            let Some(consequent_support) = frequent.get(consequent.items()).map(|c| c.support) else {
                continue;
            };
            let lift = confidence * transaction_count as f64 / consequent_support as f64;

            rules.push(AssociationRule {
                antecedent: antecedent.itemset.clone(),
                consequent,
                support: record.support,
                antecedent_support: antecedent.support,
                consequent_support,
                confidence,
                lift,
            });
        }
    }

    rules
}
