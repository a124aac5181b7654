//! Value types for CLI arguments

use crate::panel::PanelTab;

/// Panel view selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewArg {
    #[default]
    Explanation,
    Path,
}

impl std::str::FromStr for ViewArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explanation" => Ok(ViewArg::Explanation),
            "path" | "raw" => Ok(ViewArg::Path),
            _ => Err(format!("Unknown view: {s}. Valid views: explanation, path")),
        }
    }
}

impl From<ViewArg> for PanelTab {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Explanation => PanelTab::Explanation,
            ViewArg::Path => PanelTab::RawPath,
        }
    }
}
