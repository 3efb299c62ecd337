use super::itemset::{FrequentItemset, Item, Itemset};
use super::storage::FrequentLevel;
use super::support::is_subset;

/// Closed and maximal itemsets of a finished lattice.
#[derive(Debug, Clone)]
pub struct LatticeSummary<T> {
    pub closed: Vec<FrequentItemset<T>>,
    pub maximal: Vec<Itemset<T>>,
}

/// Classifies every itemset of `levels` as closed and/or maximal.
///
/// Support is anti-monotone, so any frequent superset with equal support implies
/// one exactly a single label larger; only the next level has to be scanned.
/// Output is ascending by size, then canonical order within a size.
pub fn summarize_lattice<T: Item>(levels: &[FrequentLevel<T>]) -> LatticeSummary<T> {
    let mut closed = Vec::new();
    let mut maximal = Vec::new();

    for (depth, level) in levels.iter().enumerate() {
        let next = levels
            .get(depth + 1)
            .filter(|next| next.itemset_size == level.itemset_size + 1);

        let mut records = level.to_records();
        records.sort_unstable_by(|a, b| a.itemset.cmp(&b.itemset));

        for record in records {
            let mut has_superset = false;
            let mut has_equal_superset = false;
            if let Some(next) = next {
                for (superset, support) in next.iter() {
                    if is_subset(record.itemset.items(), superset) {
                        has_superset = true;
                        if support == record.support {
                            has_equal_superset = true;
                            break;
                        }
                    }
                }
            }

            if !has_superset {
                maximal.push(record.itemset.clone());
            }
            if !has_equal_superset {
                closed.push(record);
            }
        }
    }

    LatticeSummary { closed, maximal }
}
