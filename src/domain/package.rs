//! Read-only view of a tour package from the external catalog.
//!
//! Packages are owned by the content collaborator; the core only reads the
//! price table for booking amounts and the descriptive attributes for match
//! scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PackageId;
use crate::domain::pricing::PriceTable;

/// A tour product as the catalog exposes it to the core. Immutable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Catalog identifier.
    pub id: PackageId,

    /// Display title.
    pub title: String,

    /// Content category (e.g. "adventure", "beach").
    #[serde(default)]
    pub category: Option<String>,

    /// Commercial package type (e.g. "budget", "premium").
    #[serde(default)]
    pub package_type: Option<String>,

    /// Free-form travel style tags (e.g. "trekking", "nightlife").
    #[serde(default)]
    pub travel_styles: Vec<String>,

    /// Trip length in days, when the catalog states one.
    #[serde(default)]
    pub duration_days: Option<u32>,

    /// Age-banded per-person prices.
    pub prices: PriceTable,
}

impl Package {
    /// Representative per-person price, used for budget fit scoring.
    pub fn representative_price(&self) -> i64 {
        self.prices.adult
    }

    /// Case-insensitive check for a travel style tag.
    pub fn has_travel_style(&self, style: &str) -> bool {
        self.travel_styles
            .iter()
            .any(|s| s.eq_ignore_ascii_case(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> Package {
        Package {
            id: PackageId::new("pkg-goa-beach").unwrap(),
            title: "Goa Beach Escape".to_string(),
            category: Some("beach".to_string()),
            package_type: Some("budget".to_string()),
            travel_styles: vec!["Nightlife".to_string(), "water-sports".to_string()],
            duration_days: Some(5),
            prices: PriceTable::new(120_000, 60_000, None),
        }
    }

    #[test]
    fn representative_price_is_adult_price() {
        assert_eq!(package().representative_price(), 120_000);
    }

    #[test]
    fn travel_style_match_ignores_case() {
        let pkg = package();
        assert!(pkg.has_travel_style("nightlife"));
        assert!(pkg.has_travel_style("WATER-SPORTS"));
        assert!(!pkg.has_travel_style("trekking"));
    }

    #[test]
    fn deserializes_with_optional_fields_absent() {
        let pkg: Package = serde_json::from_str(
            r#"{"id": "pkg-1", "title": "Trip", "prices": {"adult": 1000, "child": 500}}"#,
        )
        .unwrap();
        assert_eq!(pkg.category, None);
        assert!(pkg.travel_styles.is_empty());
    }
}
