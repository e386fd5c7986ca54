use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::rules::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            Strength::Strong
        } else if confidence >= 0.5 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        };
        f.write_str(label)
    }
}

/// A product bought together with the queried one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    pub product: String,
    pub confidence: f64,
    pub support: f64,
    pub strength: Strength,
}

/// Best rule per associated product for every rule whose antecedent holds
/// `product`, most confident first.
pub fn recommend(rules: &[Rule], product: &str) -> Vec<Recommendation> {
    let product = product.trim().to_lowercase();
    if product.is_empty() {
        return Vec::new();
    }

    let mut best: HashMap<&str, &Rule> = HashMap::new();
    for rule in rules.iter().filter(|rule| rule.has_antecedent(&product)) {
        for associated in &rule.consequent {
            best.entry(associated.as_str())
                .and_modify(|current| {
                    if rule.confidence > current.confidence {
                        *current = rule;
                    }
                })
                .or_insert(rule);
        }
    }

    let mut recommendations: Vec<Recommendation> = best
        .into_iter()
        .map(|(associated, rule)| Recommendation {
            product: associated.to_owned(),
            confidence: rule.confidence,
            support: rule.support,
            strength: Strength::from_confidence(rule.confidence),
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.product.cmp(&b.product))
    });
    recommendations
}
