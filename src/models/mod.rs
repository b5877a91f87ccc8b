//! Core data models shared across the pipeline.

mod criteria;
mod row;

pub use criteria::SearchCriteria;
pub use row::OutputRow;
