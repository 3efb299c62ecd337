use super::builder::build_first_level;
use super::candidates::generate_candidates;
use super::itemset::{Item, Itemset};
use super::storage::FrequentLevel;
use super::support::{count_supports, support_threshold};
use crate::config::AprioriConfig;
use tracing::debug;

/// Keeps the counted candidates reaching `min_count`, ordered by itemset.
pub fn filter_frequent<T: Item>(
    counted: impl IntoIterator<Item = (Itemset<T>, usize)>,
    itemset_size: usize,
    min_count: usize,
) -> FrequentLevel<T> {
    let mut frequent: Vec<(Itemset<T>, usize)> = counted
        .into_iter()
        .filter(|&(_, support)| support >= min_count)
        .collect();
    frequent.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    let mut level = FrequentLevel::with_capacity(itemset_size, frequent.len());
    for (itemset, support) in &frequent {
        level.add_itemset(itemset, *support);
    }
    level
}

/// Runs the level-wise search and returns one non-empty level per itemset size.
pub fn apriori_levels<T, Tx>(
    config: &AprioriConfig,
    catalog: &[T],
    transactions: &[Tx],
) -> Vec<FrequentLevel<T>>
where
    T: Item,
    Tx: AsRef<[T]> + Sync,
{
    let min_count = support_threshold(config.min_support, transactions.len());
    let mut levels = Vec::new();

    let mut current = build_first_level(min_count, catalog, transactions, config.parallel);
    debug!(level = 1, candidates = catalog.len(), frequent = current.len(), min_count, "counted level");

    while !current.is_empty() {
        if config.max_len.is_some_and(|max| current.itemset_size >= max) {
            levels.push(current);
            break;
        }

        let next_size = current.itemset_size + 1;
        let candidates = generate_candidates(&current, config.prune_subsets);
        let supports = count_supports(&candidates, transactions, config.parallel);
        let num_candidates = candidates.len();
        let next = filter_frequent(candidates.into_iter().zip(supports), next_size, min_count);
        debug!(level = next_size, candidates = num_candidates, frequent = next.len(), "counted level");

        levels.push(current);
        current = next;
    }

    levels
}
