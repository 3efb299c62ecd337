//! Property-based tests for the frequent-itemset lattice and rule generation.

use basket::apriori::candidates::generate_candidates;
use basket::apriori::support::count_support;
use basket::{apriori, AprioriConfig, FrequentLevel, Itemset, MiningResult};
use proptest::prelude::*;
use std::collections::HashSet;

const NUM_ITEMS: u8 = 8;

fn catalog() -> Vec<u8> {
    (0..NUM_ITEMS).collect()
}

/// Random transactions over a small catalog so that long itemsets turn up.
fn arb_transactions() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(0..NUM_ITEMS, 0..NUM_ITEMS as usize),
        1..24,
    )
}

fn thresholds() -> impl Strategy<Value = (f64, f64)> {
    (0.1f64..=1.0, 0.1f64..=1.0)
}

fn run(transactions: &[Vec<u8>], min_support: f64, min_confidence: f64) -> MiningResult<u8> {
    let config = AprioriConfig::new(min_support, min_confidence);
    apriori(&config, &catalog(), transactions).expect("generated input is well-formed")
}

fn is_proper_subset(x: &Itemset<u8>, y: &Itemset<u8>) -> bool {
    x.len() < y.len() && x.is_subset_of(y.items())
}

proptest! {
    /// Support never grows along a superset chain.
    #[test]
    fn support_is_anti_monotone(
        transactions in arb_transactions(),
        x in prop::collection::vec(0..NUM_ITEMS, 0..4),
        extra in prop::collection::vec(0..NUM_ITEMS, 1..4),
    ) {
        let x = Itemset::new(x);
        let y: Itemset<u8> = x.items().iter().chain(&extra).cloned().collect();
        prop_assert!(count_support(y.items(), &transactions) <= count_support(x.items(), &transactions));
    }

    /// Every reported support is exact and meets the threshold.
    #[test]
    fn frequent_supports_are_exact(transactions in arb_transactions(), (sup, conf) in thresholds()) {
        let result = run(&transactions, sup, conf);
        for (itemset, record) in &result.frequent {
            prop_assert_eq!(&record.itemset, itemset);
            prop_assert_eq!(record.support, count_support(itemset.items(), &transactions));
            prop_assert!(record.support as f64 >= sup * transactions.len() as f64);
        }
    }

    /// An itemset is closed iff no frequent proper superset shares its support.
    #[test]
    fn closed_itemsets_are_exact(transactions in arb_transactions(), (sup, conf) in thresholds()) {
        let result = run(&transactions, sup, conf);
        for (itemset, record) in &result.frequent {
            let has_equal_superset = result.frequent.values().any(|other| {
                is_proper_subset(itemset, &other.itemset) && other.support == record.support
            });
            prop_assert_eq!(result.closed.contains_key(itemset), !has_equal_superset);
        }
    }

    /// An itemset is maximal iff it has no frequent proper superset; maximal implies closed.
    #[test]
    fn maximal_itemsets_are_exact(transactions in arb_transactions(), (sup, conf) in thresholds()) {
        let result = run(&transactions, sup, conf);
        let maximal: HashSet<&Itemset<u8>> = result.maximal.iter().collect();
        prop_assert_eq!(maximal.len(), result.maximal.len());

        for itemset in result.frequent.keys() {
            let has_superset = result.frequent.keys().any(|other| is_proper_subset(itemset, other));
            prop_assert_eq!(maximal.contains(itemset), !has_superset);
        }
        for itemset in &result.maximal {
            prop_assert!(result.closed.contains_key(itemset));
        }
        for pair in result.maximal.windows(2) {
            prop_assert!((pair[0].len(), &pair[0]) < (pair[1].len(), &pair[1]));
        }
    }

    /// Emitted rules clear the confidence bar and split their itemset exactly.
    #[test]
    fn rules_respect_confidence(transactions in arb_transactions(), (sup, conf) in thresholds()) {
        let result = run(&transactions, sup, conf);
        for rule in &result.rules {
            prop_assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());
            prop_assert!(rule.antecedent.items().iter().all(|item| !rule.consequent.contains(item)));

            let union: Itemset<u8> = rule
                .antecedent
                .items()
                .iter()
                .chain(rule.consequent.items())
                .cloned()
                .collect();
            prop_assert_eq!(result.support_of(union.items()), Some(rule.support));
            prop_assert_eq!(result.support_of(rule.antecedent.items()), Some(rule.antecedent_support));
            prop_assert!(rule.support as f64 / rule.antecedent_support as f64 >= conf);
            prop_assert!(rule.confidence >= conf);
        }
    }

    /// Candidate joins never repeat and always come out strictly sorted.
    #[test]
    fn join_is_sound(
        itemsets in prop::collection::btree_set(prop::collection::btree_set(0..NUM_ITEMS, 3), 0..20),
    ) {
        let mut level = FrequentLevel::new(3);
        for itemset in &itemsets {
            level.add_itemset(&Itemset::new(itemset.iter().cloned().collect()), 1);
        }

        let candidates = generate_candidates(&level, false);
        let unique: HashSet<&Itemset<u8>> = candidates.iter().collect();
        prop_assert_eq!(unique.len(), candidates.len());
        for candidate in &candidates {
            prop_assert_eq!(candidate.len(), 4);
            prop_assert!(candidate.items().windows(2).all(|w| w[0] < w[1]));
        }

        let pruned = generate_candidates(&level, true);
        prop_assert!(pruned.iter().all(|candidate| unique.contains(candidate)));
    }

    /// Pruning, parallel counting and repeated runs all agree.
    #[test]
    fn runs_are_deterministic(transactions in arb_transactions(), (sup, conf) in thresholds()) {
        let baseline = run(&transactions, sup, conf);
        let config = AprioriConfig::new(sup, conf)
            .with_subset_pruning(false)
            .with_parallelism(false);
        let other = apriori(&config, &catalog(), &transactions).expect("generated input is well-formed");

        prop_assert_eq!(&baseline.frequent, &other.frequent);
        prop_assert_eq!(&baseline.closed, &other.closed);
        prop_assert_eq!(&baseline.maximal, &other.maximal);
        prop_assert_eq!(&baseline.rules, &other.rules);
    }
}
