//! Coffee Hut core
//!
//! Platform-agnostic logic for the Coffee Hut site: the spreadsheet menu feed,
//! price and nutrition display rules, the geofenced mission game, the drink
//! spinner and the menu scroll reconciler. Nothing in here touches the browser;
//! the web crate drives these types from DOM callbacks and timers.

pub mod constants;
pub mod feed;
pub mod geo;
pub mod lang;
pub mod mission;
pub mod nutrition;
pub mod price;
pub mod scroll;
pub mod spinner;
pub mod storage;

pub use constants::{feed_url, translations_path};
pub use feed::{Category, FeedError, MenuCatalog, MenuRow, anchor_id, parse_feed};
pub use geo::{GeoPoint, Geofence, GeofenceStatus, LocationFailure};
pub use lang::{Lang, Localized};
pub use mission::{
    ClaimOutcome, MissionConfig, MissionError, MissionGame, MissionPhase, MissionSession,
    MissionState, MissionTick, MissionView, RestoreKind, format_countdown,
};
pub use nutrition::{Nutrient, NutritionLine, ProductSheet};
pub use price::{PriceDisplay, card_price, is_placeholder, sheet_price};
pub use scroll::{ScrollBehavior, ScrollCommand, ScrollReconciler};
pub use spinner::{
    Animation, SpinnerGame, SpinnerList, SpinnerMenus, SpinnerView, Transition,
};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

/// Everything the menu page and the spinner need from one feed download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub catalog: MenuCatalog,
    pub spinner: SpinnerMenus,
}

impl FeedSnapshot {
    /// Parse raw CSV text and build both groupings.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV cannot be parsed.
    pub fn from_csv(text: &str) -> Result<Self, FeedError> {
        let rows = parse_feed(text)?;
        Ok(Self::from_rows(rows))
    }

    #[must_use]
    pub fn from_rows(rows: Vec<MenuRow>) -> Self {
        let spinner = SpinnerMenus::from_rows(&rows);
        let catalog = MenuCatalog::from_rows(rows);
        Self { catalog, spinner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "category_id,cat_en,cat_ar,item_en,item_ar,price,offer,spinner_category,spinner_subcategory\n\
        drinks,Drinks,مشروبات,Latte,لاتيه,60,-,coffee,hot\n\
        drinks,Drinks,مشروبات,Iced Latte,لاتيه مثلج,65,55,coffee,iced\n\
        snacks,Snacks,تسالي,Brownie,براوني,40,,snacks,\n";

    #[test]
    fn snapshot_builds_both_groupings_from_one_download() {
        let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
        assert_eq!(snapshot.catalog.ids(), vec!["drinks", "snacks"]);
        assert!(snapshot.spinner.is_direct("snacks"));
        assert!(!snapshot.spinner.is_direct("coffee"));
        assert_eq!(snapshot.spinner.items("coffee", Some("iced")).len(), 1);
    }
}
