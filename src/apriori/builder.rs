use super::itemset::{Item, Itemset};
use super::storage::FrequentLevel;
use super::support::count_supports;

/// Frequent 1-itemsets, in catalog order.
///
/// Items below `min_count` are dropped here and never take part in a later join.
pub fn build_first_level<T, Tx>(
    min_count: usize,
    catalog: &[T],
    transactions: &[Tx],
    parallel: bool,
) -> FrequentLevel<T>
where
    T: Item,
    Tx: AsRef<[T]> + Sync,
{
    let singletons: Vec<Itemset<T>> = catalog.iter().cloned().map(Itemset::singleton).collect();
    let supports = count_supports(&singletons, transactions, parallel);

    let mut level = FrequentLevel::with_capacity(1, singletons.len());
    for (itemset, support) in singletons.iter().zip(supports) {
        if support >= min_count {
            level.add_itemset(itemset, support);
        }
    }
    level
}
