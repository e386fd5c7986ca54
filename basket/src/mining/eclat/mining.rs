use tracing::debug;

use super::class::EquivalenceClass;
use crate::mining::error::{MiningError, Result};
use crate::mining::itemset::Itemset;
use crate::mining::miner::FrequentItemsetMiner;
use crate::mining::storage::FrequentItemsets;
use crate::mining::vertical::{SupportThreshold, VerticalDb};

/// Depth-first miner over equivalence classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eclat;

impl FrequentItemsetMiner for Eclat {
    fn mine(&self, db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets> {
        eclat_algorithm(db, min_support)
    }
}

pub fn eclat_algorithm(db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets> {
    if db.num_transactions() == 0 {
        return Err(MiningError::EmptyInput);
    }

    let threshold = db.threshold(min_support);
    let mut frequent = FrequentItemsets::new(db);

    let root = EquivalenceClass::root(db, threshold);
    debug!(items = root.len(), min_support, "eclat root class");

    eclat_recursive(&Itemset::default(), &root, threshold, &mut frequent);
    Ok(frequent)
}

fn eclat_recursive(
    prefix: &Itemset,
    class: &EquivalenceClass,
    threshold: SupportThreshold,
    frequent: &mut FrequentItemsets,
) {
    for (index, (item, tids)) in class.members().iter().enumerate() {
        let itemset = prefix.extended(*item);
        let fresh = frequent.insert(itemset.clone(), tids.len());
        debug_assert!(fresh, "eclat reached {itemset:?} twice");

        // Only later members extend `item`, so each itemset is reached once.
        let child = class.child(index, threshold);
        if !child.is_empty() {
            eclat_recursive(&itemset, &child, threshold, frequent);
        }
    }
}
