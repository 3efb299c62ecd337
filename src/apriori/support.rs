use super::itemset::{Item, Itemset};
use rayon::prelude::*;

/// True when every label of `needle` occurs in `haystack`.
///
/// Neither slice needs to be sorted and repeated labels in `haystack` are harmless.
pub fn is_subset<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    needle.iter().all(|item| haystack.contains(item))
}

/// Number of transactions that contain `itemset`.
pub fn count_support<T, Tx>(itemset: &[T], transactions: &[Tx]) -> usize
where
    T: PartialEq,
    Tx: AsRef<[T]>,
{
    transactions
        .iter()
        .filter(|transaction| is_subset(itemset, transaction.as_ref()))
        .count()
}

/// Support of every candidate, in candidate order.
pub fn count_supports<T, Tx>(candidates: &[Itemset<T>], transactions: &[Tx], parallel: bool) -> Vec<usize>
where
    T: Item,
    Tx: AsRef<[T]> + Sync,
{
    if parallel {
        candidates
            .par_iter()
            .map(|candidate| count_support(candidate.items(), transactions))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| count_support(candidate.items(), transactions))
            .collect()
    }
}

/// Smallest support count satisfying `count >= min_support * num_transactions`.
pub fn support_threshold(min_support: f64, num_transactions: usize) -> usize {
    (min_support * num_transactions as f64).ceil() as usize
}
