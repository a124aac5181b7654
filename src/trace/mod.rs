//! Decision tree trace model
//!
//! The inbound contract from the ES/MRO classifier service: the traversed
//! node sequence plus pass-through explainability payloads.

mod batch;
mod error;
mod node;
mod record;


pub use batch::{BatchItem, BatchResponse};
pub use error::TraceError;
pub use node::{DecisionNode, LEAF_FEATURE};
pub use record::{CounterfactualHint, DecisionTreeTrace, IntentLabel, TopFeature};
