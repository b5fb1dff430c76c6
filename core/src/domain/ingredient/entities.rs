use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_CONCERN: &str = "None";
pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const NOT_FOUND_NOTE: &str = "Not found in database";

/// Concern categories an ingredient can be flagged with.
///
/// Variants are declared in display-name order so that a sorted set
/// renders alphabetically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum ConcernLabel {
    #[serde(rename = "Drying Alcohol")]
    DryingAlcohol,
    #[serde(rename = "Fungal Acne Trigger")]
    FungalAcneTrigger,
    #[serde(rename = "Irritant")]
    Irritant,
    #[serde(rename = "Petroleum-based")]
    PetroleumBased,
    #[serde(rename = "Pore-clogging")]
    PoreClogging,
    #[serde(rename = "Silicone")]
    Silicone,
}

impl ConcernLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcernLabel::DryingAlcohol => "Drying Alcohol",
            ConcernLabel::FungalAcneTrigger => "Fungal Acne Trigger",
            ConcernLabel::Irritant => "Irritant",
            ConcernLabel::PetroleumBased => "Petroleum-based",
            ConcernLabel::PoreClogging => "Pore-clogging",
            ConcernLabel::Silicone => "Silicone",
        }
    }
}

impl fmt::Display for ConcernLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of concern labels. Displays as `"A, B"` or `"None"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcernSet(BTreeSet<ConcernLabel>);

impl ConcernSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: ConcernLabel) -> bool {
        self.0.insert(label)
    }

    pub fn contains(&self, label: ConcernLabel) -> bool {
        self.0.contains(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl FromIterator<ConcernLabel> for ConcernSet {
    fn from_iter<T: IntoIterator<Item = ConcernLabel>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ConcernSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NO_CONCERN);
        }

        let joined = self
            .0
            .iter()
            .map(ConcernLabel::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        f.write_str(&joined)
    }
}

/// One row of the ingredient knowledge base, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct IngredientRecord {
    pub ingredient: String,
    pub category: String,
    pub comedogenic_score: String,
    pub note: String,
    pub concern: String,
}

impl IngredientRecord {
    /// Fallback record for names absent from the knowledge base
    pub fn not_found(name: &str) -> Self {
        Self {
            ingredient: name.trim().to_string(),
            category: UNKNOWN_CATEGORY.to_string(),
            comedogenic_score: String::new(),
            note: NOT_FOUND_NOTE.to_string(),
            concern: NO_CONCERN.to_string(),
        }
    }

    pub fn has_concerns(&self) -> bool {
        let concern = self.concern.trim();
        !concern.is_empty() && !concern.eq_ignore_ascii_case(NO_CONCERN)
    }
}
