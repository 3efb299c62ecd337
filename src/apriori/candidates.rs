use super::itemset::{Item, Itemset};
use super::storage::FrequentLevel;
use std::collections::HashSet;

/// Joins two k-itemsets into a (k+1)-candidate.
///
/// The pair joins only when both share the same first k-1 labels and the last
/// label of `a` is strictly below the last label of `b`; the candidate is `a`
/// followed by the last label of `b`.
pub fn join<T: Item>(a: &[T], b: &[T]) -> Option<Itemset<T>> {
    if a.len() != b.len() {
        return None;
    }
    let (a_last, a_prefix) = a.split_last()?;
    let (b_last, b_prefix) = b.split_last()?;
    if a_prefix != b_prefix || a_last >= b_last {
        return None;
    }

    let mut items = Vec::with_capacity(a.len() + 1);
    items.extend_from_slice(a);
    items.push(b_last.clone());
    Some(Itemset::from_canonical(items))
}

/// True when dropping some label of `candidate` leaves a set missing from `frequent`.
pub fn has_infrequent_subset<T: Item>(candidate: &[T], frequent: &HashSet<&[T]>) -> bool {
    let mut subset = Vec::with_capacity(candidate.len().saturating_sub(1));
    (0..candidate.len()).any(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, item)| item.clone()),
        );
        !frequent.contains(subset.as_slice())
    })
}

/// Every (k+1)-candidate derivable from `level`, sorted canonically.
///
/// Pairs are tried in both orders so the level does not need to be sorted.
pub fn generate_candidates<T: Item>(level: &FrequentLevel<T>, prune: bool) -> Vec<Itemset<T>> {
    let frequent: HashSet<&[T]> = if prune {
        level.iter_itemsets().collect()
    } else {
        HashSet::new()
    };

    let mut candidates = Vec::new();
    for i in 0..level.len() {
        let a = level.get_itemset(i);
        for j in (i + 1)..level.len() {
            let b = level.get_itemset(j);
            let Some(candidate) = join(a, b).or_else(|| join(b, a)) else {
                continue;
            };
            if prune && has_infrequent_subset(candidate.items(), &frequent) {
                continue;
            }
            candidates.push(candidate);
        }
    }

    candidates.sort_unstable();
    candidates
}
