//! Decision explanation engine for ES/MRO self-optimization.
//!
//! Turns the decision-tree traversal trace emitted by the ES (energy saving)
//! and MRO (mobility robustness optimization) classifiers into a
//! direction-aware narrative and a reconstruction of the traversed path.
//!
//! # Toyota Way: 現地現物 (Genchi Genbutsu)
//!
//! The explanation only re-expresses evidence the classifier already
//! computed. Nothing is recomputed and nothing is guessed: an undecidable
//! verdict stays undetermined, an unknown feature is skipped and reported.
//!
//! # Architecture
//!
//! - **registry**: Feature Context Registries (ES, MRO) keyed by normalized feature name
//! - **level**: Qualitative level resolution from free-text threshold comparisons
//! - **narrative**: Per-step narratives with neutral filtering
//! - **decision**: Final verdict resolution and display label
//! - **render**: Path tree reconstruction with True/False connectors
//! - **panel**: UI state and text views (explanation / raw path)
//! - **explain**: Single and batch explanation façade
//!
//! # Example
//!
//! ```
//! use son_explain::{DecisionTreeTrace, Explainer};
//!
//! let json = r#"{
//!     "intentId": "cell-42",
//!     "intentLabel": "ES",
//!     "path": [
//!         {"nodeId": 0, "featureName": "Persistent Low Load Score",
//!          "condition": "Persistent Low Load Score > 0.60", "threshold": 0.6,
//!          "featureValue": 0.85, "passed": true},
//!         {"nodeId": 1, "featureName": "LEAF", "condition": "LEAF: ES = True",
//!          "threshold": 0.0, "featureValue": 0.0, "passed": true}
//!     ]
//! }"#;
//!
//! let trace: DecisionTreeTrace = serde_json::from_str(json)?;
//! let explanation = Explainer::builtin().explain(&trace)?;
//!
//! assert_eq!(explanation.label, "Apply ES");
//! assert_eq!(explanation.key_factor_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod decision;
pub mod error;
pub mod explain;
pub mod level;
pub mod narrative;
pub mod panel;
pub mod registry;
pub mod render;
pub mod trace;

pub use decision::{decision_label, resolve_decision};
pub use error::{Error, Result};
pub use explain::{BatchOutcome, BatchReport, BatchTotals, Explainer, Explanation};
pub use level::{resolve_level, Comparison, QualitativeLevel};
pub use narrative::{Narrative, NarrativeBuilder, NarrativeReport};
pub use panel::{ExplanationPanel, PanelState, PanelTab};
pub use registry::{normalize_feature_name, FeatureContext, FeatureRegistry, RegistrySet};
pub use render::{LeafTone, NodeStyle, PathTree};
pub use trace::{BatchItem, BatchResponse, DecisionNode, DecisionTreeTrace, IntentLabel};
