pub mod mining;

#[cfg(feature = "python")]
mod python;

pub use mining::{
    compare, encode, generate_rules, mine_apriori, mine_eclat, recommend, Algorithm, Comparison,
    FrequentItemsets, MiningConfig, MiningError, PerformanceRecord, Rule,
};
