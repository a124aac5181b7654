//! Panel state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which view the panel shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTab {
    #[default]
    Explanation,
    RawPath,
}

/// Active tab plus the set of expanded narrative steps
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub active_tab: PanelTab,
    /// Expanded narrative steps (1-based)
    pub expanded: BTreeSet<usize>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: PanelTab) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    /// Flip one step; returns whether it is now expanded.
    pub fn toggle_step(&mut self, step: usize) -> bool {
        if self.expanded.remove(&step) {
            false
        } else {
            self.expanded.insert(step);
            true
        }
    }

    pub fn is_expanded(&self, step: usize) -> bool {
        self.expanded.contains(&step)
    }

    pub fn expand_all(&mut self, steps: impl IntoIterator<Item = usize>) {
        self.expanded.extend(steps);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
