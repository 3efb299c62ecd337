/// Iterator over the `k`-element combinations of a slice, in lexicographic
/// position order.
///
/// Positions are kept on an explicit index stack instead of recursing, so the
/// depth of `k` costs nothing beyond the stack itself.
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            started: false,
            done: k == 0 || k > items.len(),
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.items[i].clone()).collect()
    }

    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[pos] += 1;
        for i in (pos + 1)..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.current())
    }
}

pub fn combinations<T: Clone>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations::new(items, k)
}

/// Every non-empty proper subset, by increasing size.
pub fn proper_subsets<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..items.len()).flat_map(move |k| combinations(items, k))
}
