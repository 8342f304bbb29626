//! Nutrition-facts detail sheet content.
use crate::feed::MenuRow;
use crate::lang::Lang;
use crate::price::{PriceDisplay, is_placeholder, sheet_price};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Fat,
    Carbs,
    Protein,
    Caffeine,
}

impl Nutrient {
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Fat,
        Self::Carbs,
        Self::Protein,
        Self::Caffeine,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Calories => "sheet.calories",
            Self::Fat => "sheet.fat",
            Self::Carbs => "sheet.carbs",
            Self::Protein => "sheet.protein",
            Self::Caffeine => "sheet.caffeine",
        }
    }

    /// Unit suffix including its leading space; calories carry none.
    #[must_use]
    pub const fn unit(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::Calories, _) => "",
            (Self::Fat | Self::Carbs | Self::Protein, Lang::En) => " g",
            (Self::Fat | Self::Carbs | Self::Protein, Lang::Ar) => " جم",
            (Self::Caffeine, Lang::En) => " mg",
            (Self::Caffeine, Lang::Ar) => " ملجم",
        }
    }

    fn raw(self, row: &MenuRow) -> &str {
        match self {
            Self::Calories => &row.calories,
            Self::Fat => &row.fat_g,
            Self::Carbs => &row.carbs_g,
            Self::Protein => &row.protein_g,
            Self::Caffeine => &row.caffeine_mg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionLine {
    pub nutrient: Nutrient,
    /// Display value with unit, or `-` when the sheet has nothing.
    pub value: String,
}

/// Everything the bottom sheet shows for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSheet {
    pub name: String,
    pub price: PriceDisplay,
    pub ingredients: Option<String>,
    pub nutrition: Vec<NutritionLine>,
}

impl ProductSheet {
    #[must_use]
    pub fn from_row(row: &MenuRow, lang: Lang) -> Self {
        let ingredients = row.ingredients(lang);
        let nutrition = Nutrient::ALL
            .iter()
            .map(|&nutrient| {
                let raw = nutrient.raw(row).trim();
                let value = if is_placeholder(raw) {
                    "-".to_string()
                } else {
                    format!("{raw}{unit}", unit = nutrient.unit(lang))
                };
                NutritionLine { nutrient, value }
            })
            .collect();

        Self {
            name: row.name(lang).to_string(),
            price: sheet_price(&row.price, &row.offer),
            ingredients: (!is_placeholder(ingredients)).then(|| ingredients.trim().to_string()),
            nutrition,
        }
    }
}
