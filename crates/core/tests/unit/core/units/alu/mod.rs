//! Integer ALU tests, split by operation category.

/// Bitwise logic and comparisons.
pub mod logic;
