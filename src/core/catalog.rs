use crate::core::search;
use crate::domain::model::{PriceTier, SearchCriteria, TailorRecord};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use std::collections::HashSet;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    records: seed_records(),
});

/// An immutable, ordered set of tailor records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<TailorRecord>,
}

impl Catalog {
    /// The compiled-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_records(records: Vec<TailorRecord>) -> Result<Self> {
        let catalog = Self { records };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a JSON array of records and checks the catalog invariants.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let records: Vec<TailorRecord> = serde_json::from_slice(data)?;
        Self::from_records(records)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, record) in self.records.iter().enumerate() {
            let context = |e: FinderError| FinderError::ValidationError {
                message: format!("record #{} ({}): {}", index, record.id, e),
            };
            validate_non_empty_string("id", &record.id).map_err(context)?;
            validate_non_empty_string("name", &record.name).map_err(context)?;
            validate_range("rating", record.rating, 0.0, 5.0).map_err(context)?;

            if search::parse_distance(&record.distance).is_none() {
                return Err(FinderError::ValidationError {
                    message: format!(
                        "record #{} ({}): distance '{}' does not start with a number",
                        index, record.id, record.distance
                    ),
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(FinderError::ValidationError {
                    message: format!("record #{}: duplicate id '{}'", index, record.id),
                });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[TailorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&TailorRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&TailorRecord> {
        self.find_by_id(id).ok_or_else(|| FinderError::NotFoundError { id: id.to_string() })
    }

    /// Distinct specialties in first-seen order.
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|record| record.specialty.iter())
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<TailorRecord> {
        search::search(&self.records, criteria)
    }

    pub fn into_records(self) -> Vec<TailorRecord> {
        self.records
    }
}

#[allow(clippy::too_many_arguments)]
fn tailor(
    id: &str,
    name: &str,
    image: &str,
    rating: f64,
    review_count: u32,
    specialty: [&str; 2],
    location: &str,
    distance: &str,
    price: PriceTier,
    availability: &str,
) -> TailorRecord {
    TailorRecord {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(image.to_string()),
        rating,
        review_count,
        specialty: specialty.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        distance: distance.to_string(),
        price,
        availability: availability.to_string(),
    }
}

fn seed_records() -> Vec<TailorRecord> {
    vec![
        tailor(
            "1",
            "Elite Fashion Tailors",
            "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?q=80&w=2574",
            4.8,
            156,
            ["Suits", "Formal Wear"],
            "Downtown Fashion District",
            "1.2 miles",
            PriceTier::Premium,
            "2-3 days",
        ),
        tailor(
            "2",
            "Modern Tailoring Co.",
            "https://images.unsplash.com/photo-1488998427799-e3362cec87c3?q=80&w=2670",
            4.6,
            98,
            ["Casual Wear", "Shirts"],
            "Midtown Plaza",
            "0.8 miles",
            PriceTier::Medium,
            "1-2 days",
        ),
        tailor(
            "3",
            "Creative Stitches",
            "https://images.unsplash.com/photo-1590926938512-c0d7e5c39abd?q=80&w=2732",
            4.9,
            214,
            ["Evening Wear", "Dresses"],
            "Westside Mall",
            "2.5 miles",
            PriceTier::Premium,
            "3-4 days",
        ),
        tailor(
            "4",
            "Precision Tailors",
            "https://images.unsplash.com/photo-1533471272889-d1dc5dd81fd6?q=80&w=2528",
            4.7,
            132,
            ["Alterations", "Formal Wear"],
            "North Shopping Center",
            "1.5 miles",
            PriceTier::Economy,
            "Same day",
        ),
        tailor(
            "5",
            "Heritage Custom Tailoring",
            "https://images.unsplash.com/photo-1558234610-faa2c2cd3d5c?q=80&w=2670",
            4.9,
            189,
            ["Suits", "Traditional Wear"],
            "East Village",
            "3.1 miles",
            PriceTier::Premium,
            "4-5 days",
        ),
        tailor(
            "6",
            "Stitch & Style",
            "https://images.unsplash.com/photo-1513434007132-441d8689c7f8?q=80&w=2658",
            4.5,
            76,
            ["Casual Wear", "Alterations"],
            "South Market",
            "0.7 miles",
            PriceTier::Economy,
            "1-2 days",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("3").unwrap().name, "Creative Stitches");
        assert!(catalog.find_by_id("99").is_none());
        assert!(matches!(catalog.get("99"), Err(FinderError::NotFoundError { .. })));
    }

    #[test]
    fn test_specialties_first_seen() {
        assert_eq!(
            Catalog::builtin().specialties(),
            vec![
                "Suits",
                "Formal Wear",
                "Casual Wear",
                "Shirts",
                "Evening Wear",
                "Dresses",
                "Alterations",
                "Traditional Wear"
            ]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = Catalog::builtin().records().to_vec();
        records[1].id = "1".to_string();
        let err = Catalog::from_records(records).unwrap_err();
        assert!(err.to_string().contains("duplicate id '1'"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut records = Catalog::builtin().records().to_vec();
        records[0].rating = 5.5;
        assert!(matches!(
            Catalog::from_records(records),
            Err(FinderError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_bad_distance_rejected() {
        let mut records = Catalog::builtin().records().to_vec();
        records[2].distance = "around the corner".to_string();
        let err = Catalog::from_records(records).unwrap_err();
        assert!(err.to_string().contains("around the corner"));
    }

    #[test]
    fn test_from_json_slice() {
        let json = serde_json::to_vec(Catalog::builtin().records()).unwrap();
        let catalog = Catalog::from_json_slice(&json).unwrap();
        assert_eq!(&catalog, Catalog::builtin());
    }

    #[test]
    fn test_from_json_slice_unknown_tier() {
        let json = br#"[{"id":"1","name":"X","rating":4,"reviewCount":1,"specialty":[],
            "location":"Y","distance":"1 mile","price":"luxury","availability":"now"}]"#;
        assert!(matches!(
            Catalog::from_json_slice(json),
            Err(FinderError::SerializationError(_))
        ));
    }
}
