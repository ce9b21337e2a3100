//! # Insertion-Ordered Counter

use core::{borrow::Borrow, hash::Hash};

use crate::types::{OTHashMap, hash_map_with_capacity};

/// A counter which remembers the order keys were first seen in.
///
/// Iteration, and [`first_max`](Self::first_max) tie-breaking,
/// follow first-insertion order.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    index: OTHashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> OrderedCounter<K> {
    /// Create an empty counter with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: hash_map_with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Add `n` to the count for `key`.
    ///
    /// The key is only cloned the first time it is seen.
    pub fn add<Q>(
        &mut self,
        key: &Q,
        n: usize,
    ) where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                let key = key.to_owned();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    /// Get the count for `key`; zero if it was never seen.
    pub fn get<Q>(
        &self,
        key: &Q,
    ) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Iterate ``(key, count)`` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// The entry with the highest count.
    ///
    /// Ties go to the key inserted first.
    pub fn first_max(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, n) in self.iter() {
            match best {
                Some((_, best_n)) if n <= best_n => {}
                _ => best = Some((key, n)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut counter: OrderedCounter<String> = OrderedCounter::default();
        counter.add("pear", 1);
        counter.add("apple", 2);
        counter.add("pear", 1);
        counter.add("fig", 1);

        let items: Vec<(&str, usize)> = counter.iter().map(|(k, n)| (k.as_str(), n)).collect();
        assert_eq!(items, vec![("pear", 2), ("apple", 2), ("fig", 1)]);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.total(), 5);
        assert_eq!(counter.get("apple"), 2);
        assert_eq!(counter.get("kiwi"), 0);
    }

    #[test]
    fn test_first_max_tie_break() {
        let mut counter: OrderedCounter<(usize, usize)> = OrderedCounter::with_capacity(4);
        assert_eq!(counter.first_max(), None);

        counter.add(&(3, 4), 1);
        counter.add(&(1, 2), 2);
        counter.add(&(0, 9), 2);
        assert_eq!(counter.first_max(), Some((&(1, 2), 2)));

        counter.add(&(0, 9), 1);
        assert_eq!(counter.first_max(), Some((&(0, 9), 3)));
    }
}
