//! Explanation Façade
//!
//! Runs the narrative builder, decision resolver and tree renderer over a
//! trace and packages the result as an [`Explanation`].
//!
//! # Example
//!
//! ```
//! use son_explain::{DecisionNode, DecisionTreeTrace, Explainer, IntentLabel};
//!
//! let trace = DecisionTreeTrace::new(
//!     "cell-7",
//!     IntentLabel::Mro,
//!     vec![
//!         DecisionNode::split(0, "Handover Failure Pressure", "Handover Failure Pressure > 0.55", 0.55, 0.9, true),
//!         DecisionNode::leaf(1, "LEAF: MRO = True"),
//!     ],
//! );
//!
//! let explanation = Explainer::builtin().explain(&trace).unwrap();
//! assert_eq!(explanation.label, "Apply MRO");
//! assert_eq!(explanation.tree.len(), 2);
//! ```

mod batch;
mod explainer;
mod explanation;


pub use batch::{BatchOutcome, BatchReport, BatchTotals};
pub use explainer::Explainer;
pub use explanation::Explanation;
