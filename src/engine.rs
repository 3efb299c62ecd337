//! Single entry point: thresholds, catalog and transactions in, the four
//! result collections out.

use crate::apriori::{
    apriori_levels, generate_rules, summarize_lattice, AssociationRule, FrequentItemset, Item,
    Itemset,
};
use crate::config::AprioriConfig;
use crate::error::{MiningError, Result};
use indexmap::IndexMap;
use ndarray::ArrayView2;
use std::collections::HashSet;
use tracing::info;

/// Everything produced by one mining run.
#[derive(Debug, Clone)]
pub struct MiningResult<T> {
    /// Every frequent itemset, by ascending size.
    pub frequent: IndexMap<Itemset<T>, FrequentItemset<T>>,
    /// Frequent itemsets without a frequent superset of equal support.
    pub closed: IndexMap<Itemset<T>, FrequentItemset<T>>,
    /// Frequent itemsets without any frequent superset, by size then label order.
    pub maximal: Vec<Itemset<T>>,
    pub rules: Vec<AssociationRule<T>>,
    pub transaction_count: usize,
}

impl<T: Item> MiningResult<T> {
    pub fn support_of(&self, items: &[T]) -> Option<usize> {
        self.frequent.get(items).map(|record| record.support)
    }

    pub fn relative_support(&self, items: &[T]) -> Option<f64> {
        self.frequent
            .get(items)
            .map(|record| record.relative_support(self.transaction_count))
    }

    /// Largest frequent itemset size, 0 when nothing is frequent.
    pub fn max_itemset_size(&self) -> usize {
        self.frequent.keys().map(Itemset::len).max().unwrap_or(0)
    }
}

/// Mines with default switches and the two thresholds.
pub fn mine<T, Tx>(
    min_support: f64,
    min_confidence: f64,
    catalog: &[T],
    transactions: &[Tx],
) -> Result<MiningResult<T>>
where
    T: Item,
    Tx: AsRef<[T]> + Sync,
{
    apriori(&AprioriConfig::new(min_support, min_confidence), catalog, transactions)
}

pub fn apriori<T, Tx>(
    config: &AprioriConfig,
    catalog: &[T],
    transactions: &[Tx],
) -> Result<MiningResult<T>>
where
    T: Item,
    Tx: AsRef<[T]> + Sync,
{
    validate_input(config, catalog, transactions)?;

    let levels = apriori_levels(config, catalog, transactions);
    let summary = summarize_lattice(&levels);

    let frequent: IndexMap<Itemset<T>, FrequentItemset<T>> = levels
        .iter()
        .flat_map(|level| level.to_records())
        .map(|record| (record.itemset.clone(), record))
        .collect();
    let closed: IndexMap<Itemset<T>, FrequentItemset<T>> = summary
        .closed
        .into_iter()
        .map(|record| (record.itemset.clone(), record))
        .collect();
    let rules = generate_rules(&frequent, config.min_confidence, transactions.len());

    info!(
        transactions = transactions.len(),
        levels = levels.len(),
        frequent = frequent.len(),
        closed = closed.len(),
        maximal = summary.maximal.len(),
        rules = rules.len(),
        "apriori run finished"
    );

    Ok(MiningResult {
        frequent,
        closed,
        maximal: summary.maximal,
        rules,
        transaction_count: transactions.len(),
    })
}

/// Mines a one-hot matrix: rows are transactions, columns are items, non-zero
/// cells mark presence. Items are reported as column indices.
pub fn apriori_from_matrix(
    config: &AprioriConfig,
    transactions: ArrayView2<i32>,
) -> Result<MiningResult<usize>> {
    let catalog: Vec<usize> = (0..transactions.ncols()).collect();
    let transaction_list = matrix_to_transactions(transactions);
    apriori(config, &catalog, &transaction_list)
}

/// Convert binary transaction matrix to list of item sets
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

fn validate_input<T, Tx>(config: &AprioriConfig, catalog: &[T], transactions: &[Tx]) -> Result<()>
where
    T: Item,
    Tx: AsRef<[T]>,
{
    config.validate()?;

    if catalog.is_empty() {
        return Err(MiningError::EmptyCatalog);
    }
    let mut known = HashSet::with_capacity(catalog.len());
    for item in catalog {
        if !known.insert(item) {
            return Err(MiningError::DuplicateItem(format!("{:?}", item)));
        }
    }

    if transactions.is_empty() {
        return Err(MiningError::EmptyTransactions);
    }
    for (idx, transaction) in transactions.iter().enumerate() {
        if let Some(item) = transaction.as_ref().iter().find(|item| !known.contains(item)) {
            return Err(MiningError::UnknownItem {
                transaction: idx,
                item: format!("{:?}", item),
            });
        }
    }

    Ok(())
}
