//! Explanation Panel
//!
//! View-only state (active tab, expanded steps) and the two text views of an
//! [`Explanation`](crate::explain::Explanation): the narrated explanation and
//! the raw decision path.

mod state;
mod view;


pub use state::{PanelState, PanelTab};
pub use view::ExplanationPanel;
