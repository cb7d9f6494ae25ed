use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Economy,
    Medium,
    Premium,
}

impl PriceTier {
    /// Filter options in display order.
    pub const ALL: [PriceTier; 3] = [PriceTier::Economy, PriceTier::Medium, PriceTier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Economy => "economy",
            PriceTier::Medium => "medium",
            PriceTier::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Economy => "Budget-friendly",
            PriceTier::Medium => "Mid-range",
            PriceTier::Premium => "Premium",
        }
    }

    /// Sort rank used by `SortKey::Price`, cheapest first.
    pub fn ordinal(&self) -> u8 {
        match self {
            PriceTier::Economy => 1,
            PriceTier::Medium => 2,
            PriceTier::Premium => 3,
        }
    }

    /// Exact, case-sensitive match on the tier value (`"economy"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for a raw tier string. Unknown tiers are shown as-is.
pub fn price_label(raw: &str) -> String {
    match PriceTier::parse(raw) {
        Some(tier) => tier.label().to_string(),
        None => raw.to_string(),
    }
}

/// Specialty filter options offered by the listing page.
pub const SPECIALTY_OPTIONS: [&str; 5] = ["suits", "dresses", "casual wear", "formal wear", "alterations"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Rating,
    Distance,
    Price,
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Distance, SortKey::Price];

    /// Unknown keys fall through to `Unsorted`, which keeps catalog order.
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "distance" => SortKey::Distance,
            "price" => SortKey::Price,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Distance => "distance",
            SortKey::Price => "price",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Label of the sort option itself.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Highest Rated",
            SortKey::Distance => "Nearest",
            SortKey::Price => "Price (Low to High)",
            SortKey::Unsorted => "Unsorted",
        }
    }

    /// Short label for the "Sorted by:" line.
    pub fn sorted_by_label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            other => other.label(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    pub specialty: Vec<String>,
    pub location: String,
    pub distance: String,
    pub price: PriceTier,
    pub availability: String,
}

/// One query against the catalog. `None` means the criterion is unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub price: Option<PriceTier>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_price(mut self, tier: PriceTier) -> Self {
        self.price = Some(tier);
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// "Clear All Filters": drops search and both filters, keeps the sort key.
    pub fn cleared(&self) -> Self {
        Self {
            sort: self.sort,
            ..Self::default()
        }
    }

    pub fn has_filters(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.price.is_some()
            || self.specialty.is_some()
    }
}

/// "1 tailor found" / "N tailors found".
pub fn result_summary(count: usize) -> String {
    if count == 1 {
        "1 tailor found".to_string()
    } else {
        format!("{} tailors found", count)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub generated_at: DateTime<Utc>,
    pub criteria: SearchCriteria,
    pub count: usize,
    pub summary: String,
    pub sorted_by: String,
    pub tailors: Vec<TailorRecord>,
}

impl SearchResult {
    pub fn new(criteria: SearchCriteria, tailors: Vec<TailorRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            count: tailors.len(),
            summary: result_summary(tailors.len()),
            sorted_by: criteria.sort.sorted_by_label().to_string(),
            criteria,
            tailors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tailors.is_empty()
    }
}
