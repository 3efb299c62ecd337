use super::itemset::{FrequentItemset, Item, Itemset};

/// Flat storage for equally sized itemsets and their supports.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Frequent itemsets of one size, written once by the level-wise miner.
#[derive(Debug, Clone)]
pub struct FrequentLevel<T> {
    storage: ItemsetStorage<T>,
    pub itemset_size: usize,
}

impl<T: Item> ItemsetStorage<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    pub fn add_itemset(&mut self, itemset: &Itemset<T>, support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(itemset.items());
        self.offsets.push((start, itemset.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<T: Item> Default for ItemsetStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn with_capacity(itemset_size: usize, estimated_itemsets: usize) -> Self {
        let estimated_items = estimated_itemsets * itemset_size;
        Self {
            storage: ItemsetStorage::with_capacity(estimated_items, estimated_itemsets),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, itemset: &Itemset<T>, support: usize) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.storage.add_itemset(itemset, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets with their supports, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }

    pub fn to_records(&self) -> Vec<FrequentItemset<T>> {
        self.iter()
            .map(|(items, support)| {
                FrequentItemset::new(Itemset::from_canonical(items.to_vec()), support)
            })
            .collect()
    }
}
