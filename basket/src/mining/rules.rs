//! Association rules derived from any frequent-itemset table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::combinations::for_each_combination;
use super::itemset::Itemset;
use super::storage::FrequentItemsets;

/// `antecedent -> consequent`, scored against the whole transaction list.
///
/// `lift` is 0.0 when the consequent's support is missing from the table or
/// zero. That value stands for "not computed" as well as a genuine zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl Rule {
    pub fn has_antecedent(&self, item: &str) -> bool {
        self.antecedent.iter().any(|name| name == item)
    }

    pub fn has_consequent(&self, item: &str) -> bool {
        self.consequent.iter().any(|name| name == item)
    }
}

/// Emits one rule per antecedent split of every itemset of size 2 or more
/// whose confidence reaches `min_confidence`.
///
/// Itemsets are visited in canonical order and antecedents by size, so the
/// output is deterministic for a given table.
pub fn generate_rules(frequent: &FrequentItemsets, min_confidence: f64) -> Vec<Rule> {
    let num_transactions = frequent.num_transactions() as f64;
    let mut rules = Vec::new();

    for (itemset, count) in frequent.sorted() {
        if itemset.len() < 2 {
            continue;
        }
        let support = count as f64 / num_transactions;

        for size in 1..itemset.len() {
            for_each_combination(itemset.items(), size, |picked| {
                let antecedent = Itemset::new(picked.iter().copied());
                let Some(antecedent_count) = frequent.support_count(&antecedent) else {
                    return;
                };
                if antecedent_count == 0 {
                    return;
                }

                let confidence = count as f64 / antecedent_count as f64;
                if confidence < min_confidence {
                    return;
                }

                let consequent = itemset.difference(&antecedent);
                let lift = match frequent.support(&consequent) {
                    Some(consequent_support) if consequent_support > 0.0 => {
                        confidence / consequent_support
                    }
                    _ => 0.0,
                };

                rules.push(Rule {
                    antecedent: frequent.names(&antecedent),
                    consequent: frequent.names(&consequent),
                    support,
                    confidence,
                    lift,
                });
            });
        }
    }

    rules
}

/// Strongest first: confidence, then lift, then support, all descending.
pub fn rank_rules(rules: &mut [Rule]) {
    rules.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| b.lift.total_cmp(&a.lift))
            .then_with(|| b.support.total_cmp(&a.support))
    });
}
