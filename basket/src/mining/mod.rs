pub mod apriori;
pub mod combinations;
pub mod config;
pub mod eclat;
pub mod error;
pub mod harness;
pub mod itemset;
pub mod memory;
pub mod miner;
pub mod recommend;
pub mod rules;
pub mod storage;
pub mod vertical;

#[cfg(test)]
mod tests;

pub use apriori::{apriori_algorithm, apriori_gen, Apriori};
pub use config::MiningConfig;
pub use eclat::{eclat_algorithm, Eclat};
pub use error::{MiningError, Result};
pub use harness::{compare, mine_apriori, mine_eclat, run, Comparison, MiningRun, PerformanceRecord};
pub use itemset::{ItemId, Itemset, TidSet};
pub use miner::{Algorithm, FrequentItemsetMiner};
pub use recommend::{recommend, Recommendation, Strength};
pub use rules::{generate_rules, rank_rules, Rule};
pub use storage::{FrequentItemsets, FrequentLevel};
pub use vertical::{encode, encode_matrix, SupportThreshold, Transaction, VerticalDb, Vocabulary};
