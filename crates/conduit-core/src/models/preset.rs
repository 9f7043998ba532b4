use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::invariants::Invariants;

/// Catalog category for a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Human,
    Animal,
    Ai,
    Altered,
    Pathological,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Human,
        Category::Animal,
        Category::Ai,
        Category::Altered,
        Category::Pathological,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Animal => "animal",
            Self::Ai => "ai",
            Self::Altered => "altered",
            Self::Pathological => "pathological",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "animal" => Ok(Self::Animal),
            "ai" => Ok(Self::Ai),
            "altered" => Ok(Self::Altered),
            "pathological" => Ok(Self::Pathological),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A named, curated reference parameter set.
///
/// Entries are manually curated constants — informed estimates, explicitly
/// non-authoritative. Loading a preset into an editable parameter set is a
/// copy (`Invariants` is `Copy`), never a reference into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Preset {
    /// Unique display name.
    pub name: &'static str,
    pub category: Category,
    pub invariants: Invariants,
    pub description: &'static str,
}
