//! # Presentation Mapping
//!
//! Pure mappings from engine state to what the dashboard draws. Nothing here
//! knows about markup; the rendering layer turns tokens into classes/icons.
//!
//! ## Facet Bar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Status │ Available  Stock Low     Category │ 3 Selected     [Reset ×]  │
//! │  ──────   ─────────────────────    ────────   ──────────                │
//! │  < 3 values → one chip each        ≥ 3 values → summary badge          │
//! │                                                                         │
//! │  Empty facets draw nothing. Reset shows while any facet is non-empty.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::table::columns::{CATEGORY, STATUS, SUPPLIER};
use crate::table::TableViewEngine;
use crate::types::ProductStatus;
use crate::FACET_SUMMARY_THRESHOLD;

// =============================================================================
// Status Badge
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StatusColor {
    Green,
    Red,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StatusIcon {
    Check,
    Close,
    Draft,
}

/// Color and icon tokens for a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatusBadge {
    pub color: StatusColor,
    pub icon: StatusIcon,
}

impl ProductStatus {
    pub fn badge(self) -> StatusBadge {
        let (color, icon) = match self {
            ProductStatus::Available => (StatusColor::Green, StatusIcon::Check),
            ProductStatus::StockOut => (StatusColor::Red, StatusIcon::Close),
            ProductStatus::StockLow => (StatusColor::Orange, StatusIcon::Draft),
        };
        StatusBadge { color, icon }
    }
}

// =============================================================================
// Facet Badges
// =============================================================================

/// Badges shown for one facet's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetBadges {
    /// Fewer than [`FACET_SUMMARY_THRESHOLD`] values, one chip per value.
    Chips(Vec<String>),
    /// A single "N Selected" badge.
    Summary(usize),
}

impl FacetBadges {
    pub fn for_selection<S: AsRef<str>>(values: &[S]) -> Self {
        if values.len() < FACET_SUMMARY_THRESHOLD {
            FacetBadges::Chips(values.iter().map(|v| v.as_ref().to_string()).collect())
        } else {
            FacetBadges::Summary(values.len())
        }
    }

    /// Texts of the badges in display order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            FacetBadges::Chips(values) => values.clone(),
            FacetBadges::Summary(count) => vec![format!("{} Selected", count)],
        }
    }
}

/// One titled group of the facet bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub title: &'static str,
    pub badges: FacetBadges,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBar {
    pub groups: Vec<FacetGroup>,
    pub show_reset: bool,
}

impl FacetBar {
    /// Builds the bar for the engine's current facet selections.
    pub fn from_engine(engine: &TableViewEngine) -> Self {
        const GROUPS: [(&str, &str); 3] =
            [(STATUS, "Status"), (CATEGORY, "Category"), (SUPPLIER, "Supplier")];

        let groups: Vec<FacetGroup> = GROUPS
            .into_iter()
            .filter_map(|(column_id, title)| {
                let selected = engine.selected_values(column_id);
                if selected.is_empty() {
                    return None;
                }
                Some(FacetGroup {
                    title,
                    badges: FacetBadges::for_selection(&selected),
                })
            })
            .collect();

        FacetBar {
            show_reset: !groups.is_empty(),
            groups,
        }
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Long date as shown in the "Created At" column, e.g. "January 5, 2024".
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::catalog;
    use chrono::TimeZone;

    #[test]
    fn test_status_badges() {
        assert_eq!(
            ProductStatus::Available.badge(),
            StatusBadge {
                color: StatusColor::Green,
                icon: StatusIcon::Check
            }
        );
        assert_eq!(ProductStatus::StockOut.badge().color, StatusColor::Red);
        assert_eq!(ProductStatus::StockLow.badge().icon, StatusIcon::Draft);
    }

    #[test]
    fn test_badge_serializes_tokens() {
        let json = serde_json::to_string(&ProductStatus::StockLow.badge()).unwrap();
        assert_eq!(json, r#"{"color":"orange","icon":"draft"}"#);
    }

    #[test]
    fn test_chips_below_threshold() {
        let badges = FacetBadges::for_selection(&["Available", "Stock Low"]);
        assert_eq!(badges.labels(), vec!["Available", "Stock Low"]);
    }

    #[test]
    fn test_summary_at_threshold_uses_real_count() {
        let three = FacetBadges::for_selection(&["a", "b", "c"]);
        assert_eq!(three, FacetBadges::Summary(3));
        assert_eq!(three.labels(), vec!["3 Selected"]);

        let five = FacetBadges::for_selection(&["a", "b", "c", "d", "e"]);
        assert_eq!(five.labels(), vec!["5 Selected"]);
    }

    #[test]
    fn test_facet_bar_skips_empty_facets() {
        let mut engine = TableViewEngine::new(catalog(3));
        assert_eq!(
            FacetBar::from_engine(&engine),
            FacetBar {
                groups: Vec::new(),
                show_reset: false
            }
        );

        engine.set_multi_select_filter(CATEGORY, ["Office", "Garden", "Kitchen"]);
        let bar = FacetBar::from_engine(&engine);
        assert!(bar.show_reset);
        assert_eq!(bar.groups.len(), 1);
        assert_eq!(bar.groups[0].title, "Category");
        assert_eq!(bar.groups[0].badges, FacetBadges::Summary(3));
    }

    #[test]
    fn test_format_created_at() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap();
        assert_eq!(format_created_at(&at), "January 5, 2024");
    }
}
