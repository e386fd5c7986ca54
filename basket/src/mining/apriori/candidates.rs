use std::collections::HashSet;

use crate::mining::error::{MiningError, Result};
use crate::mining::itemset::Itemset;

/// Builds the size-k candidates from the frequent (k-1)-itemsets.
///
/// Two itemsets are joined when they agree on everything but their last item;
/// a joined candidate survives only if each of its (k-1)-subsets is frequent.
pub fn apriori_gen(frequent: &HashSet<Itemset>) -> Result<Vec<Itemset>> {
    let mut sorted: Vec<&Itemset> = frequent.iter().collect();
    sorted.sort_unstable();

    let Some(first) = sorted.first() else {
        return Ok(Vec::new());
    };
    let size = first.len();
    if let Some(bad) = sorted.iter().find(|itemset| itemset.len() != size) {
        return Err(MiningError::MalformedItemset {
            expected: size,
            found: bad.len(),
        });
    }

    let mut candidates = Vec::new();
    for (i, left) in sorted.iter().enumerate() {
        for right in &sorted[i + 1..] {
            // Sorted order keeps itemsets sharing a prefix adjacent.
            if left.prefix() != right.prefix() {
                break;
            }
            let Some(last) = right.last() else {
                continue;
            };
            let candidate = left.extended(last);

            let closed = (0..candidate.len()).all(|idx| frequent.contains(&candidate.without(idx)));
            if closed {
                candidates.push(candidate);
            }
        }
    }

    Ok(candidates)
}
