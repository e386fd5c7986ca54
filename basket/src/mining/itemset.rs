use std::collections::HashSet;

/// Interned item identifier. Ids follow the lexicographic order of item names.
pub type ItemId = u32;

/// Canonical itemset: sorted, duplicate-free item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    fn from_sorted(items: Vec<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Every item but the last.
    pub fn prefix(&self) -> &[ItemId] {
        &self.0[..self.0.len().saturating_sub(1)]
    }

    pub fn last(&self) -> Option<ItemId> {
        self.0.last().copied()
    }

    /// Appends an item greater than every current member.
    pub fn extended(&self, item: ItemId) -> Self {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.extend_from_slice(&self.0);
        items.push(item);
        Self::from_sorted(items)
    }

    /// The subset with the item at `index` removed.
    pub fn without(&self, index: usize) -> Self {
        let mut items = self.0.clone();
        items.remove(index);
        Self::from_sorted(items)
    }

    /// Items of `self` not present in `other`.
    pub fn difference(&self, other: &Itemset) -> Self {
        Self::from_sorted(
            self.0
                .iter()
                .copied()
                .filter(|&item| !other.contains(item))
                .collect(),
        )
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Indices of the transactions that contain an item or itemset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TidSet(HashSet<u32>);

impl TidSet {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    pub fn insert(&mut self, tid: u32) -> bool {
        self.0.insert(tid)
    }

    pub fn contains(&self, tid: u32) -> bool {
        self.0.contains(&tid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up every member of the smaller set in the larger one.
    pub fn intersection(&self, other: &TidSet) -> TidSet {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .copied()
            .filter(|tid| large.0.contains(tid))
            .collect()
    }

    pub fn intersect_with(&mut self, other: &TidSet) {
        if self.len() <= other.len() {
            self.0.retain(|tid| other.0.contains(tid));
        } else {
            *self = self.intersection(other);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for TidSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
