//! Comparison and counting sorts.

pub mod sort;
