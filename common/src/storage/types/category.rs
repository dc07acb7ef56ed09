use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse topic label shared by query classification and chunk metadata.
///
/// The set is closed so classifier match arms stay exhaustive; extending it
/// means touching the classifier keyword table in the same change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MutualFund,
    Gold,
    RealEstate,
    Insurance,
    Tax,
    General,
}

impl Category {
    /// Classifier evaluation order. First match wins, so a query touching
    /// several topics ("tax on gold etf gains") lands in the earliest
    /// matching category.
    pub const PRECEDENCE: [Category; 5] = [
        Category::MutualFund,
        Category::Gold,
        Category::RealEstate,
        Category::Insurance,
        Category::Tax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MutualFund => "mutual_fund",
            Category::Gold => "gold",
            Category::RealEstate => "real_estate",
            Category::Insurance => "insurance",
            Category::Tax => "tax",
            Category::General => "general",
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

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mutual_fund" => Ok(Self::MutualFund),
            "gold" => Ok(Self::Gold),
            "real_estate" => Ok(Self::RealEstate),
            "insurance" => Ok(Self::Insurance),
            "tax" => Ok(Self::Tax),
            "general" => Ok(Self::General),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}
