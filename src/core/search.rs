//! Filtering and ordering of tailor records.
//!
//! Everything here is pure and total: bad input never errors, it either fails
//! to match or sorts to a documented position.

use crate::domain::model::{PriceTier, SearchCriteria, SortKey, TailorRecord};
use std::cmp::Ordering;

/// Case-insensitive substring test over name, every specialty and location.
/// An empty term matches everything.
pub fn matches_search(record: &TailorRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record
            .specialty
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
        || record.location.to_lowercase().contains(&needle)
}

pub fn matches_price(record: &TailorRecord, filter: Option<PriceTier>) -> bool {
    filter.is_none_or(|tier| record.price == tier)
}

/// Whole-entry comparison, so `"suit"` does not select `"Suits"`.
pub fn matches_specialty(record: &TailorRecord, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            record.specialty.iter().any(|s| s.to_lowercase() == wanted)
        }
    }
}

pub fn matches(
    record: &TailorRecord,
    search: Option<&str>,
    price: Option<PriceTier>,
    specialty: Option<&str>,
) -> bool {
    matches_search(record, search.unwrap_or(""))
        && matches_price(record, price)
        && matches_specialty(record, specialty)
}

/// Reads the longest leading decimal of `raw` ("1.2 miles" -> 1.2).
///
/// Leading whitespace, a sign, a bare fraction (".5") and an exponent are
/// accepted; whatever follows the number is ignored.
pub fn parse_distance(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // 指數部分必須完整才採用，否則 "2e" 只讀到 2
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Sort value for distance; malformed strings sort after every real distance.
pub fn distance_value(record: &TailorRecord) -> f64 {
    parse_distance(&record.distance).unwrap_or(f64::INFINITY)
}

pub fn compare(a: &TailorRecord, b: &TailorRecord, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Distance => distance_value(a).total_cmp(&distance_value(b)),
        SortKey::Price => a.price.ordinal().cmp(&b.price.ordinal()),
        SortKey::Unsorted => Ordering::Equal,
    }
}

/// Filters `catalog` in order, then stable-sorts the survivors.
pub fn search(catalog: &[TailorRecord], criteria: &SearchCriteria) -> Vec<TailorRecord> {
    let mut visible: Vec<TailorRecord> = catalog
        .iter()
        .filter(|record| {
            matches(
                record,
                criteria.search.as_deref(),
                criteria.price,
                criteria.specialty.as_deref(),
            )
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare(a, b, criteria.sort));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, rating: f64, distance: &str, price: PriceTier) -> TailorRecord {
        TailorRecord {
            id: id.to_string(),
            name: format!("Tailor {}", id),
            image: None,
            rating,
            review_count: 0,
            specialty: vec!["Suits".to_string(), "Formal Wear".to_string()],
            location: "Old Town".to_string(),
            distance: distance.to_string(),
            price,
            availability: "1-2 days".to_string(),
        }
    }

    fn ids(records: &[TailorRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_parse_distance_prefix() {
        assert_eq!(parse_distance("1.2 miles"), Some(1.2));
        assert_eq!(parse_distance("0.7 miles"), Some(0.7));
        assert_eq!(parse_distance("  3km"), Some(3.0));
        assert_eq!(parse_distance(".5 mi"), Some(0.5));
        assert_eq!(parse_distance("4. miles"), Some(4.0));
        assert_eq!(parse_distance("-1"), Some(-1.0));
        assert_eq!(parse_distance("1e2m"), Some(100.0));
        assert_eq!(parse_distance("2e miles"), Some(2.0));
        assert_eq!(parse_distance("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_parse_distance_malformed() {
        assert_eq!(parse_distance(""), None);
        assert_eq!(parse_distance("near"), None);
        assert_eq!(parse_distance("."), None);
        assert_eq!(parse_distance("-"), None);
        assert_eq!(parse_distance("miles 2"), None);
    }

    #[test]
    fn test_specialty_is_whole_entry() {
        let r = record("1", 4.0, "1 mile", PriceTier::Economy);
        assert!(matches_specialty(&r, Some("suits")));
        assert!(matches_specialty(&r, Some("FORMAL WEAR")));
        assert!(!matches_specialty(&r, Some("Suit")));
        assert!(matches_specialty(&r, None));
    }

    #[test]
    fn test_search_covers_name_specialty_location() {
        let r = record("9", 4.0, "1 mile", PriceTier::Economy);
        assert!(matches_search(&r, "TAILOR 9"));
        assert!(matches_search(&r, "formal"));
        assert!(matches_search(&r, "old town"));
        assert!(matches_search(&r, ""));
        assert!(!matches_search(&r, "dresses"));
    }

    #[test]
    fn test_malformed_distance_sorts_last() {
        let catalog = vec![
            record("a", 4.0, "unknown", PriceTier::Economy),
            record("b", 4.0, "2 miles", PriceTier::Economy),
            record("c", 4.0, "n/a", PriceTier::Economy),
            record("d", 4.0, "0.5 miles", PriceTier::Economy),
        ];
        let criteria = SearchCriteria::new().sorted_by(SortKey::Distance);
        assert_eq!(ids(&search(&catalog, &criteria)), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_unsorted_keeps_catalog_order() {
        let catalog = vec![
            record("a", 3.0, "3 miles", PriceTier::Premium),
            record("b", 5.0, "1 mile", PriceTier::Economy),
            record("c", 4.0, "2 miles", PriceTier::Medium),
        ];
        let criteria = SearchCriteria::new().sorted_by(SortKey::Unsorted);
        assert_eq!(ids(&search(&catalog, &criteria)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let catalog = vec![
            record("a", 3.0, "3 miles", PriceTier::Premium),
            record("b", 5.0, "1 mile", PriceTier::Economy),
            record("c", 4.0, "2 miles", PriceTier::Premium),
            record("d", 4.0, "2 miles", PriceTier::Economy),
        ];
        let criteria = SearchCriteria::new().sorted_by(SortKey::Price);
        assert_eq!(ids(&search(&catalog, &criteria)), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(search(&[], &SearchCriteria::default()).is_empty());
    }
}
