//! Pure policy evaluation (no IO).
//!
//! Input: a stylesheet model constructed elsewhere plus a compiled policy.
//! Output: findings in document order + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
pub mod eval;
pub mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_with};
