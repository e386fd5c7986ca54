//! Vertical (item -> TID-set) encoding of a transaction list.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use ndarray::ArrayView2;

use super::error::{MiningError, Result};
use super::itemset::{ItemId, Itemset, TidSet};

/// A basket of normalized item identifiers.
pub trait Transaction {
    fn items(&self) -> impl Iterator<Item = &str> + '_;
}

impl<S: AsRef<str>> Transaction for [S] {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> Transaction for [S; N] {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> Transaction for Vec<S> {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> Transaction for HashSet<S> {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> Transaction for BTreeSet<S> {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(AsRef::as_ref)
    }
}

impl<T: Transaction + ?Sized> Transaction for &T {
    fn items(&self) -> impl Iterator<Item = &str> + '_ {
        (**self).items()
    }
}

/// Item names interned in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, ItemId>,
}

impl Vocabulary {
    fn from_sorted(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id as ItemId))
            .collect();
        Self { names, index }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: ItemId) -> &str {
        &self.names[id as usize]
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.index.get(name).copied()
    }

    pub fn names(&self, itemset: &Itemset) -> Vec<String> {
        itemset
            .items()
            .iter()
            .map(|&id| self.name(id).to_owned())
            .collect()
    }

    /// Resolves names to a canonical itemset, `None` if any name is unknown.
    pub fn itemset<S: AsRef<str>>(&self, names: &[S]) -> Option<Itemset> {
        names
            .iter()
            .map(|name| self.id(name.as_ref()))
            .collect::<Option<Vec<_>>>()
            .map(Itemset::new)
    }
}

/// TID-sets indexed by item id, plus the transaction count.
#[derive(Debug, Clone)]
pub struct VerticalDb {
    vocabulary: Arc<Vocabulary>,
    tidsets: Vec<TidSet>,
    num_transactions: usize,
}

impl VerticalDb {
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn tidset(&self, item: ItemId) -> &TidSet {
        &self.tidsets[item as usize]
    }

    /// Items in ascending id order with their TID-sets.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &TidSet)> {
        self.tidsets
            .iter()
            .enumerate()
            .map(|(id, tids)| (id as ItemId, tids))
    }

    pub fn threshold(&self, min_support: f64) -> SupportThreshold {
        SupportThreshold::new(min_support, self.num_transactions)
    }
}

/// Minimum support shared by both engines.
///
/// Counts are compared as ratios of the transaction count: `count / N` is the
/// nearest double to the exact fraction, so a count whose fraction equals
/// `min_support` is admitted. The product `min_support * N` can round above
/// the integer it stands for (0.07 * 100 gives 7.000000000000001).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportThreshold {
    min_support: f64,
    num_transactions: usize,
}

impl SupportThreshold {
    pub fn new(min_support: f64, num_transactions: usize) -> Self {
        Self {
            min_support,
            num_transactions,
        }
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn admits(&self, count: usize) -> bool {
        self.num_transactions > 0
            && count as f64 / self.num_transactions as f64 >= self.min_support
    }
}

/// Transaction index as stored in a TID-set.
pub(crate) fn transaction_id(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| MiningError::TooManyTransactions { count: index + 1 })
}

pub fn encode<T: Transaction>(transactions: &[T]) -> Result<VerticalDb> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyInput);
    }

    let mut by_name: HashMap<&str, TidSet> = HashMap::new();
    for (index, transaction) in transactions.iter().enumerate() {
        let tid = transaction_id(index)?;
        for item in transaction.items() {
            by_name.entry(item).or_default().insert(tid);
        }
    }

    let mut entries: Vec<(&str, TidSet)> = by_name.into_iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let (names, tidsets): (Vec<String>, Vec<TidSet>) = entries
        .into_iter()
        .map(|(name, tids)| (name.to_owned(), tids))
        .unzip();

    Ok(VerticalDb {
        vocabulary: Arc::new(Vocabulary::from_sorted(names)),
        tidsets,
        num_transactions: transactions.len(),
    })
}

/// Encodes a one-hot transaction matrix; column `j` is item `labels[j]`.
pub fn encode_matrix<S: AsRef<str>>(matrix: ArrayView2<i32>, labels: &[S]) -> Result<VerticalDb> {
    let (rows, columns) = matrix.dim();
    if labels.len() != columns {
        return Err(MiningError::LabelMismatch {
            labels: labels.len(),
            columns,
        });
    }
    if rows == 0 {
        return Err(MiningError::EmptyInput);
    }

    let transactions: Vec<Vec<&str>> = matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .zip(labels)
                .filter(|&(&cell, _)| cell != 0)
                .map(|(_, label)| label.as_ref())
                .collect()
        })
        .collect();

    encode(&transactions)
}
