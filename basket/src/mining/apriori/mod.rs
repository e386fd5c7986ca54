pub mod candidates;
pub mod mining;

pub use candidates::apriori_gen;
pub use mining::{apriori_algorithm, Apriori};
