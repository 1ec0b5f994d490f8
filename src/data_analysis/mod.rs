// src/data_analysis/mod.rs

pub mod aggregate;
pub mod correlate;
pub mod descriptive;
pub mod verdict;

// src/data_analysis/mod.rs
