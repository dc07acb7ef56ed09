use common::storage::types::category::Category;

/// Maps free-text input to a topic category.
///
/// Categories are tried in `Category::PRECEDENCE` order and the first one
/// with any keyword hit wins, so the result is deterministic even when a
/// query touches several topics. No hit falls through to `General`.
pub fn classify(query: &str) -> Category {
    let query = query.to_lowercase();
    for category in Category::PRECEDENCE {
        if category_keywords(category)
            .iter()
            .any(|keyword| query.contains(keyword))
        {
            return category;
        }
    }
    Category::General
}

/// Keyword predicates per category, all lowercase. `General` has none; it is
/// the fallback, never matched directly.
pub(crate) fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::MutualFund => &[
            "mutual fund",
            "sip",
            "systematic investment",
            "nav",
            "expense ratio",
            "elss",
            "amc",
            "equity fund",
            "debt fund",
            "sebi",
            "folio",
            "bluechip",
        ],
        Category::Gold => &[
            "gold",
            "sovereign gold bond",
            "sgb",
            "bullion",
            "jewellery",
            "digital gold",
        ],
        Category::RealEstate => &[
            "real estate",
            "property",
            "reit",
            "rent",
            "home loan",
            "stamp duty",
            "rera",
            "apartment",
        ],
        Category::Insurance => &[
            "insurance",
            "premium",
            "term plan",
            "ulip",
            "sum assured",
            "health cover",
            "irdai",
        ],
        Category::Tax => &[
            "tax",
            "80c",
            "80d",
            "deduction",
            "capital gains",
            "itr",
            "tds",
            "gst",
        ],
        Category::General => &[],
    }
}
