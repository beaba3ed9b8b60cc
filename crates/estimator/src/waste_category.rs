//! Waste categories accepted by the reward calculator.
//!
//! The category set is closed: the calculator form offers exactly these seven
//! options, and each one maps to a fixed [`CategoryProfile`]. Labels are
//! matched exactly, never by substring, so "Non-Organik" can never be read as
//! "Organik".

use serde::{Deserialize, Serialize};

use crate::category_profile::CategoryProfile;

/// Waste category selected in the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    /// Food scraps and garden waste. The only weight-scaled category.
    #[default]
    Organic,
    /// Sorted plastics, paper and metal sold to collectors.
    NonOrganic,
    /// Goods made from reused material.
    UpcycledProduct,
    /// Craft and art pieces made from waste.
    ArtProduct,
    /// Hazardous and toxic waste (B3).
    Hazardous,
    /// Residual waste that cannot be sorted further.
    Residue,
    /// Discarded electronics.
    EWaste,
}

impl WasteCategory {
    /// Label shown in the calculator form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Organic => "Organik",
            Self::NonOrganic => "Non-Organik",
            Self::UpcycledProduct => "Produk Upcycle",
            Self::ArtProduct => "Produk Seni",
            Self::Hazardous => "B3",
            Self::Residue => "Residu",
            Self::EWaste => "e-Waste",
        }
    }

    /// Stable snake_case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::NonOrganic => "non_organic",
            Self::UpcycledProduct => "upcycled_product",
            Self::ArtProduct => "art_product",
            Self::Hazardous => "hazardous",
            Self::Residue => "residue",
            Self::EWaste => "e_waste",
        }
    }

    /// Resolve a form value to a category.
    ///
    /// Accepts the form label or the snake_case key, ignoring surrounding
    /// whitespace. Anything else is `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label() == value || c.key() == value)
    }

    /// Fixed CO2e and income constants for this category.
    pub fn profile(self) -> CategoryProfile {
        CategoryProfile::for_category(self)
    }

    /// All categories in form order.
    pub fn all() -> &'static [WasteCategory] {
        &[
            Self::Organic,
            Self::NonOrganic,
            Self::UpcycledProduct,
            Self::ArtProduct,
            Self::Hazardous,
            Self::Residue,
            Self::EWaste,
        ]
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_organic() {
        assert_eq!(WasteCategory::default(), WasteCategory::Organic);
    }

    #[test]
    fn test_all_lists_seven_distinct_categories() {
        let all = WasteCategory::all();
        assert_eq!(all.len(), 7);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_from_label_round_trips_labels_and_keys() {
        for &category in WasteCategory::all() {
            assert_eq!(WasteCategory::from_label(category.label()), Some(category));
            assert_eq!(WasteCategory::from_label(category.key()), Some(category));
        }
    }

    #[test]
    fn test_from_label_is_exact_not_substring() {
        // "Non-Organik" contains "Organik"; it must still resolve to NonOrganic.
        assert_eq!(
            WasteCategory::from_label("Non-Organik"),
            Some(WasteCategory::NonOrganic)
        );
        assert_eq!(WasteCategory::from_label("Sampah Organik"), None);
        assert_eq!(WasteCategory::from_label("B3 Medis"), None);
        assert_eq!(WasteCategory::from_label("organik"), None);
    }

    #[test]
    fn test_from_label_trims_whitespace() {
        assert_eq!(
            WasteCategory::from_label("  Residu\n"),
            Some(WasteCategory::Residue)
        );
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(WasteCategory::from_label("Unknown"), None);
        assert_eq!(WasteCategory::from_label(""), None);
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&WasteCategory::EWaste).unwrap();
        assert_eq!(json, "\"e_waste\"");
        let back: WasteCategory = serde_json::from_str("\"upcycled_product\"").unwrap();
        assert_eq!(back, WasteCategory::UpcycledProduct);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(WasteCategory::Hazardous.to_string(), "B3");
    }
}
