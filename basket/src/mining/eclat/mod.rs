pub mod class;
pub mod mining;

pub use class::EquivalenceClass;
pub use mining::{eclat_algorithm, Eclat};
