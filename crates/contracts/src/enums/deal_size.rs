use serde::{Deserialize, Serialize};

/// Deal size bucket assigned by the source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealSize {
    Small,
    Medium,
    Large,
}

impl DealSize {
    pub fn label(&self) -> &'static str {
        match self {
            DealSize::Small => "Small",
            DealSize::Medium => "Medium",
            DealSize::Large => "Large",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Small" => Some(DealSize::Small),
            "Medium" => Some(DealSize::Medium),
            "Large" => Some(DealSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for DealSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
