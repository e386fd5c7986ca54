use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::apriori::Apriori;
use super::eclat::Eclat;
use super::error::Result;
use super::storage::FrequentItemsets;
use super::vertical::VerticalDb;

/// Anything that turns a vertical encoding into a frequent-itemset table.
pub trait FrequentItemsetMiner {
    fn mine(&self, db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Apriori,
    Eclat,
}

impl Algorithm {
    pub fn miner(self) -> &'static dyn FrequentItemsetMiner {
        match self {
            Algorithm::Apriori => &Apriori,
            Algorithm::Eclat => &Eclat,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Apriori => "Apriori",
            Algorithm::Eclat => "Eclat",
        }
    }
}

impl FrequentItemsetMiner for Algorithm {
    fn mine(&self, db: &VerticalDb, min_support: f64) -> Result<FrequentItemsets> {
        self.miner().mine(db, min_support)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
