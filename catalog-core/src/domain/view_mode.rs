use serde::{Deserialize, Serialize};

/// Catalog layout, also sent to the PDF renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    Checklist,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Cards, ViewMode::Checklist, ViewMode::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Checklist => "checklist",
            ViewMode::Table => "table",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Cards => "Cards",
            ViewMode::Checklist => "List",
            ViewMode::Table => "Table",
        }
    }
}
