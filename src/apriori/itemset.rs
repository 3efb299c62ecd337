use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Anything usable as an item label.
pub trait Item: Ord + Clone + Hash + fmt::Debug + Send + Sync {}

impl<T: Ord + Clone + Hash + fmt::Debug + Send + Sync> Item for T {}

/// Duplicate-free set of labels kept in ascending order.
///
/// Equality, hashing and ordering all follow the sorted label sequence, so an
/// `Itemset<T>` can be looked up in maps by a plain `&[T]` slice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Item> Itemset<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Wraps labels that are already strictly ascending.
    pub(crate) fn from_canonical(items: Vec<T>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn is_subset_of(&self, haystack: &[T]) -> bool {
        super::support::is_subset(&self.items, haystack)
    }

    /// Labels of `self` that are not in `other`, still in canonical order.
    pub fn difference(&self, other: &[T]) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();
        Self { items }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Item> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Item> From<Vec<T>> for Itemset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl From<&str> for Itemset<char> {
    fn from(labels: &str) -> Self {
        labels.chars().collect()
    }
}

impl<T> Borrow<[T]> for Itemset<T> {
    fn borrow(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for Itemset<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

/// An itemset paired with the number of transactions containing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequentItemset<T> {
    pub itemset: Itemset<T>,
    pub support: usize,
}

impl<T: Item> FrequentItemset<T> {
    pub fn new(itemset: Itemset<T>, support: usize) -> Self {
        Self { itemset, support }
    }

    /// Support as a fraction of `transaction_count`.
    pub fn relative_support(&self, transaction_count: usize) -> f64 {
        if transaction_count == 0 {
            return 0.0;
        }
        self.support as f64 / transaction_count as f64
    }
}
