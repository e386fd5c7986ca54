use std::collections::HashSet;

use tracing::debug;

use super::candidates::apriori_gen;
use crate::mining::error::{MiningError, Result};
use crate::mining::itemset::Itemset;
use crate::mining::miner::FrequentItemsetMiner;
use crate::mining::storage::FrequentItemsets;
use crate::mining::vertical::VerticalDb;

/// Level-wise miner: join, prune, then count by TID-set intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apriori;

impl FrequentItemsetMiner for Apriori {
    fn mine(&self, db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets> {
        apriori_algorithm(db, min_support)
    }
}

pub fn apriori_algorithm(db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets> {
    if db.num_transactions() == 0 {
        return Err(MiningError::EmptyInput);
    }

    let threshold = db.threshold(min_support);
    let mut frequent = FrequentItemsets::new(db);

    let mut level: HashSet<Itemset> = HashSet::new();
    for (item, tids) in db.items() {
        let support = tids.len();
        if threshold.admits(support) {
            let itemset = Itemset::singleton(item);
            level.insert(itemset.clone());
            frequent.insert(itemset, support);
        }
    }
    debug!(k = 1, frequent = level.len(), min_support, "apriori level");

    let mut k = 2;
    while !level.is_empty() {
        let candidates = apriori_gen(&level)?;
        let num_candidates = candidates.len();

        let mut next = HashSet::new();
        for candidate in candidates {
            let support = support_count(db, &candidate);
            if threshold.admits(support) {
                frequent.insert(candidate.clone(), support);
                next.insert(candidate);
            }
        }

        debug!(k, candidates = num_candidates, frequent = next.len(), "apriori level");
        level = next;
        k += 1;
    }

    Ok(frequent)
}

fn support_count(db: &VerticalDb, candidate: &Itemset) -> usize {
    let Some((&first, rest)) = candidate.items().split_first() else {
        return 0;
    };
    let mut tids = db.tidset(first).clone();
    for &item in rest {
        if tids.is_empty() {
            break;
        }
        tids.intersect_with(db.tidset(item));
    }
    tids.len()
}
