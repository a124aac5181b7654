//! Narrative Builder
//!
//! Re-expresses each traversed split as "what was observed" and "how it
//! bears on the decision", using the intent's feature registry.

mod builder;
mod types;


pub use builder::{is_neutral_impact, NarrativeBuilder};
pub use types::{Narrative, NarrativeReport};
