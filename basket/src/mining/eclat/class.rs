use crate::mining::itemset::{ItemId, TidSet};
use crate::mining::vertical::{SupportThreshold, VerticalDb};

/// Items sharing a common prefix, each with the TID-set of prefix + item.
/// Members are kept in ascending item order.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceClass {
    members: Vec<(ItemId, TidSet)>,
}

impl EquivalenceClass {
    /// The root class: every item meeting `threshold` on its own.
    pub fn root(db: &VerticalDb, threshold: SupportThreshold) -> Self {
        Self {
            members: db
                .items()
                .filter(|(_, tids)| threshold.admits(tids.len()))
                .map(|(item, tids)| (item, tids.clone()))
                .collect(),
        }
    }

    /// Extensions of the member at `index` by every later member whose
    /// intersected TID-set still meets `threshold`.
    pub fn child(&self, index: usize, threshold: SupportThreshold) -> Self {
        let (_, tids_a) = &self.members[index];
        Self {
            members: self.members[index + 1..]
                .iter()
                .filter_map(|(item_b, tids_b)| {
                    let joined = tids_a.intersection(tids_b);
                    threshold.admits(joined.len()).then_some((*item_b, joined))
                })
                .collect(),
        }
    }

    pub fn members(&self) -> &[(ItemId, TidSet)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
