//! Decision Resolver
//!
//! Determines the final verdict of a trace and its display label:
//! - the authoritative `decision` field when the classifier supplied one,
//! - otherwise the assignment encoded in the LEAF condition (`= true` / `= false`),
//! - otherwise undetermined, never guessed.

mod resolver;


pub use resolver::{decision_label, parse_leaf_condition, resolve_decision};
