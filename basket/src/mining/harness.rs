//! Runs each engine end to end and records comparable metrics.

use std::fmt;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::MiningConfig;
use super::error::Result;
use super::memory::MemorySample;
use super::miner::{Algorithm, FrequentItemsetMiner};
use super::rules::{generate_rules, Rule};
use super::storage::FrequentItemsets;
use super::vertical::{encode, Transaction};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceRecord {
    pub algorithm: Algorithm,
    pub elapsed_ms: f64,
    /// May be negative: RSS can shrink during a run.
    pub memory_delta_mb: f64,
    pub rule_count: usize,
    pub frequent_itemset_count: usize,
    pub min_support: f64,
    pub min_confidence: f64,
}

impl fmt::Display for PerformanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} rules={:<6} time={:.2}ms memory={:.2}MB (support={}, confidence={})",
            self.algorithm.name(),
            self.rule_count,
            self.elapsed_ms,
            self.memory_delta_mb,
            self.min_support,
            self.min_confidence
        )
    }
}

/// Output of one measured run.
#[derive(Debug, Clone)]
pub struct MiningRun {
    pub frequent: FrequentItemsets,
    pub rules: Vec<Rule>,
    pub performance: PerformanceRecord,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub apriori: MiningRun,
    pub eclat: MiningRun,
}

impl Comparison {
    pub fn records(&self) -> (PerformanceRecord, PerformanceRecord) {
        (
            self.apriori.performance.clone(),
            self.eclat.performance.clone(),
        )
    }

    /// The engine with the shorter wall-clock time; Apriori on a tie.
    pub fn faster(&self) -> Algorithm {
        if self.eclat.performance.elapsed_ms < self.apriori.performance.elapsed_ms {
            Algorithm::Eclat
        } else {
            Algorithm::Apriori
        }
    }

    /// Both engines found the same itemsets with the same counts.
    pub fn agree(&self) -> bool {
        self.apriori.frequent.same_itemsets(&self.eclat.frequent)
    }
}

/// Encode, mine and derive rules with one engine, timing the whole run.
pub fn run<T: Transaction>(
    algorithm: Algorithm,
    transactions: &[T],
    config: &MiningConfig,
) -> Result<MiningRun> {
    config.validate()?;

    let baseline = MemorySample::start();
    let started = Instant::now();

    let db = encode(transactions)?;
    let frequent = algorithm.mine(&db, config.min_support)?;
    let rules = generate_rules(&frequent, config.min_confidence);

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let memory_delta_mb = baseline.delta_mb();

    let performance = PerformanceRecord {
        algorithm,
        elapsed_ms,
        memory_delta_mb,
        rule_count: rules.len(),
        frequent_itemset_count: frequent.len(),
        min_support: config.min_support,
        min_confidence: config.min_confidence,
    };
    info!(
        algorithm = algorithm.name(),
        elapsed_ms,
        memory_delta_mb,
        itemsets = frequent.len(),
        rules = rules.len(),
        "mining run finished"
    );

    Ok(MiningRun {
        frequent,
        rules,
        performance,
    })
}

pub fn mine_apriori<T: Transaction>(
    transactions: &[T],
    min_support: f64,
    min_confidence: f64,
) -> Result<(Vec<Rule>, PerformanceRecord)> {
    let config = MiningConfig::new(min_support, min_confidence);
    let mined = run(Algorithm::Apriori, transactions, &config)?;
    Ok((mined.rules, mined.performance))
}

pub fn mine_eclat<T: Transaction>(
    transactions: &[T],
    min_support: f64,
    min_confidence: f64,
) -> Result<(Vec<Rule>, PerformanceRecord)> {
    let config = MiningConfig::new(min_support, min_confidence);
    let mined = run(Algorithm::Eclat, transactions, &config)?;
    Ok((mined.rules, mined.performance))
}

/// Apriori then Eclat over the same transactions and thresholds.
pub fn compare<T: Transaction>(
    transactions: &[T],
    min_support: f64,
    min_confidence: f64,
) -> Result<Comparison> {
    let config = MiningConfig::new(min_support, min_confidence);
    Ok(Comparison {
        apriori: run(Algorithm::Apriori, transactions, &config)?,
        eclat: run(Algorithm::Eclat, transactions, &config)?,
    })
}
