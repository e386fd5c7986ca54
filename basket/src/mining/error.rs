use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    /// No transactions were handed to the encoder or an engine.
    #[error("no transactions available, no analysis possible")]
    EmptyInput,

    /// Candidate generation saw itemsets of the wrong size.
    #[error("malformed itemset: expected {expected} items, found {found}")]
    MalformedItemset { expected: usize, found: usize },

    #[error("{name} must be in (0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("{count} transactions exceed the u32 transaction id range")]
    TooManyTransactions { count: usize },

    #[error("label count {labels} does not match column count {columns}")]
    LabelMismatch { labels: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, MiningError>;
