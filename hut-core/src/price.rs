//! Price display rules shared by product cards and the nutrition sheet.
use serde::{Deserialize, Serialize};

/// Currency suffix appended on the detail sheet.
pub const CURRENCY_SUFFIX: &str = "LE";

/// Empty cells and a lone `-` mean "no value" in the sheet.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == "-"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDisplay {
    /// Plain price, no discount.
    Regular(String),
    /// Struck-through original next to the offer price.
    Discounted { original: String, offer: String },
    /// Nothing worth showing.
    Hidden,
}

impl PriceDisplay {
    #[must_use]
    pub const fn has_strikethrough(&self) -> bool {
        matches!(self, Self::Discounted { .. })
    }
}

/// Price shown on a product card. The original price is always shown, even
/// when blank, unless a real offer replaces it.
#[must_use]
pub fn card_price(price: &str, offer: &str) -> PriceDisplay {
    if is_placeholder(offer) {
        PriceDisplay::Regular(price.trim().to_string())
    } else {
        PriceDisplay::Discounted {
            original: price.trim().to_string(),
            offer: offer.trim().to_string(),
        }
    }
}

/// Price shown on the nutrition sheet, where a missing price hides the line.
#[must_use]
pub fn sheet_price(price: &str, offer: &str) -> PriceDisplay {
    if !is_placeholder(offer) {
        card_price(price, offer)
    } else if is_placeholder(price) {
        PriceDisplay::Hidden
    } else {
        PriceDisplay::Regular(price.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_offers_never_strike_through() {
        for offer in ["", "   ", "-", " - "] {
            let shown = card_price("60", offer);
            assert!(!shown.has_strikethrough(), "offer {offer:?} struck through");
            assert_eq!(shown, PriceDisplay::Regular("60".into()));
        }
    }

    #[test]
    fn any_real_offer_strikes_through() {
        for offer in ["55", "0", "free", "--"] {
            assert!(card_price("60", offer).has_strikethrough(), "offer {offer:?}");
        }
        assert_eq!(
            card_price(" 60 ", " 55 "),
            PriceDisplay::Discounted {
                original: "60".into(),
                offer: "55".into()
            }
        );
    }

    #[test]
    fn sheet_hides_missing_prices() {
        assert_eq!(sheet_price("-", ""), PriceDisplay::Hidden);
        assert_eq!(sheet_price("", "-"), PriceDisplay::Hidden);
        assert_eq!(sheet_price("45", "-"), PriceDisplay::Regular("45".into()));
        assert!(sheet_price("45", "40").has_strikethrough());
        assert_eq!(card_price("", ""), PriceDisplay::Regular(String::new()));
    }
}
