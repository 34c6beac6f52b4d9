//! Product categories.

use serde::{Deserialize, Serialize};

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sofa,
    Chair,
    Table,
    Bed,
    Lighting,
    Storage,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sofa => "sofa",
            Category::Chair => "chair",
            Category::Table => "table",
            Category::Bed => "bed",
            Category::Lighting => "lighting",
            Category::Storage => "storage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sofa" => Some(Category::Sofa),
            "chair" => Some(Category::Chair),
            "table" => Some(Category::Table),
            "bed" => Some(Category::Bed),
            "lighting" => Some(Category::Lighting),
            "storage" => Some(Category::Storage),
            _ => None,
        }
    }

    /// Localization key for the category label (e.g., `cat_sofa`).
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::Sofa => "cat_sofa",
            Category::Chair => "cat_chair",
            Category::Table => "cat_table",
            Category::Bed => "cat_bed",
            Category::Lighting => "cat_lighting",
            Category::Storage => "cat_storage",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Sofa,
            Category::Chair,
            Category::Table,
            Category::Bed,
            Category::Lighting,
            Category::Storage,
        ]
    }
}
