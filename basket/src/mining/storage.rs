use std::collections::HashMap;
use std::sync::Arc;

use super::itemset::Itemset;
use super::vertical::{VerticalDb, Vocabulary};

/// Frequent itemsets with their support counts, as returned by an engine.
#[derive(Debug, Clone)]
pub struct FrequentItemsets {
    vocabulary: Arc<Vocabulary>,
    supports: HashMap<Itemset, usize>,
    num_transactions: usize,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub itemset_size: usize,
    itemsets: Vec<(Itemset, usize)>,
}

impl FrequentItemsets {
    pub(crate) fn new(db: &VerticalDb) -> Self {
        Self {
            vocabulary: Arc::clone(db.vocabulary()),
            supports: HashMap::new(),
            num_transactions: db.num_transactions(),
        }
    }

    /// Records an itemset; returns false if it was already present.
    pub(crate) fn insert(&mut self, itemset: Itemset, support: usize) -> bool {
        debug_assert!(!itemset.is_empty());
        self.supports.insert(itemset, support).is_none()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn support_count(&self, itemset: &Itemset) -> Option<usize> {
        self.supports.get(itemset).copied()
    }

    /// Support as a fraction of all transactions.
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.support_count(itemset)
            .map(|count| count as f64 / self.num_transactions as f64)
    }

    pub fn max_itemset_size(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.supports.iter().map(|(itemset, &count)| (itemset, count))
    }

    /// Entries ordered by size, then lexicographically.
    pub fn sorted(&self) -> Vec<(&Itemset, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = (1..=self.max_itemset_size())
            .map(FrequentLevel::new)
            .collect();
        for (itemset, count) in self.sorted() {
            levels[itemset.len() - 1].itemsets.push((itemset.clone(), count));
        }
        levels
    }

    pub fn names(&self, itemset: &Itemset) -> Vec<String> {
        self.vocabulary.names(itemset)
    }

    /// Every entry with item names resolved, in canonical order.
    pub fn named(&self) -> Vec<(Vec<String>, usize)> {
        self.sorted()
            .into_iter()
            .map(|(itemset, count)| (self.names(itemset), count))
            .collect()
    }

    pub fn support_count_of<S: AsRef<str>>(&self, names: &[S]) -> Option<usize> {
        self.vocabulary
            .itemset(names)
            .and_then(|itemset| self.support_count(&itemset))
    }

    /// Same itemsets with the same counts, independent of which engine ran.
    pub fn same_itemsets(&self, other: &FrequentItemsets) -> bool {
        self.num_transactions == other.num_transactions && self.named() == other.named()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            itemsets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.itemsets.iter().map(|(itemset, _)| itemset)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.itemsets.iter().map(|(itemset, count)| (itemset, *count))
    }
}
