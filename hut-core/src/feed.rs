//! Spreadsheet menu feed: CSV parsing and category grouping.
use crate::lang::Lang;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// One spreadsheet row. Columns missing from the sheet come through as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRow {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub cat_en: String,
    #[serde(default)]
    pub cat_ar: String,
    #[serde(default)]
    pub item_en: String,
    #[serde(default)]
    pub item_ar: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub offer: String,
    #[serde(default)]
    pub ingredients_en: String,
    #[serde(default)]
    pub ingredients_ar: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub fat_g: String,
    #[serde(default)]
    pub carbs_g: String,
    #[serde(default)]
    pub protein_g: String,
    #[serde(default)]
    pub caffeine_mg: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub spinner_category: String,
    #[serde(default)]
    pub spinner_subcategory: String,
}

impl MenuRow {
    #[must_use]
    pub fn name(&self, lang: Lang) -> &str {
        lang.pick(&self.item_en, &self.item_ar)
    }

    #[must_use]
    pub fn category_title(&self, lang: Lang) -> &str {
        lang.pick(&self.cat_en, &self.cat_ar)
    }

    #[must_use]
    pub fn ingredients(&self, lang: Lang) -> &str {
        lang.pick(&self.ingredients_en, &self.ingredients_ar)
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed has no header row")]
    MissingHeader,
    #[error("feed header has no `category_id` column")]
    MissingCategoryColumn,
    #[error("CSV error on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl FeedError {
    fn from_csv(source: csv::Error) -> Self {
        let line = source.position().map_or(0, csv::Position::line);
        Self::Csv { line, source }
    }
}

/// Parse the published CSV export into rows.
///
/// Blank lines are skipped, every cell is trimmed and short rows are padded
/// with empty cells.
///
/// # Errors
///
/// Returns an error when the header row is missing, has no `category_id`
/// column, or a record cannot be decoded.
pub fn parse_feed(text: &str) -> Result<Vec<MenuRow>, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(FeedError::from_csv)?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(FeedError::MissingHeader);
    }
    if !headers.iter().any(|h| h == "category_id") {
        return Err(FeedError::MissingCategoryColumn);
    }

    reader
        .records()
        .map(|record| {
            let mut record = record.map_err(FeedError::from_csv)?;
            while record.len() < headers.len() {
                record.push_field("");
            }
            record
                .deserialize::<MenuRow>(Some(&headers))
                .map_err(FeedError::from_csv)
        })
        .collect()
}

static ANCHOR_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").ok());

/// Whether a category id can be used verbatim as an element id.
#[must_use]
pub fn is_valid_anchor(id: &str) -> bool {
    ANCHOR_RE.as_ref().is_some_and(|re| re.is_match(id))
}

/// Turn a category id into something usable as an element id and URL fragment.
///
/// Ids that already qualify are returned untouched.
#[must_use]
pub fn anchor_id(category_id: &str) -> String {
    let trimmed = category_id.trim();
    if is_valid_anchor(trimmed) {
        return trimmed.to_string();
    }
    let mut slug = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "cat".to_string()
    } else if slug.starts_with(|c: char| c.is_ascii_alphabetic()) {
        slug.to_string()
    } else {
        format!("cat-{slug}")
    }
}

/// A menu category and its rows, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    /// DOM id / fragment for the category section.
    pub anchor: String,
    pub rows: Vec<MenuRow>,
}

impl Category {
    /// Tab and section title, taken from the first row of the category.
    #[must_use]
    pub fn title(&self, lang: Lang) -> &str {
        self.rows.first().map_or("", |row| row.category_title(lang))
    }

    #[must_use]
    pub fn icon_url(&self) -> &str {
        self.rows.first().map_or("", |row| row.img_url.as_str())
    }
}

/// Rows grouped by category id, categories kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    categories: Vec<Category>,
}

impl MenuCatalog {
    /// Group rows by `category_id`. Rows without a category are dropped.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = MenuRow>) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut anchors: HashSet<String> = HashSet::new();

        for row in rows {
            let id = row.category_id.trim().to_string();
            if id.is_empty() {
                continue;
            }
            if let Some(&slot) = index.get(&id) {
                categories[slot].rows.push(row);
                continue;
            }
            let base = anchor_id(&id);
            let mut anchor = base.clone();
            let mut n = 2;
            while anchors.contains(&anchor) {
                anchor = format!("{base}-{n}");
                n += 1;
            }
            anchors.insert(anchor.clone());
            index.insert(id.clone(), categories.len());
            categories.push(Category {
                id,
                anchor,
                rows: vec![row],
            });
        }

        Self { categories }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn by_anchor(&self, anchor: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.anchor == anchor)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    #[must_use]
    pub fn anchors(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.anchor.as_str()).collect()
    }

    /// Anchor of the tab that starts out active.
    #[must_use]
    pub fn default_active(&self) -> Option<&str> {
        self.categories.first().map(|c| c.anchor.as_str())
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.categories.iter().map(|c| c.rows.len()).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cat: &str, item: &str) -> MenuRow {
        MenuRow {
            category_id: cat.to_string(),
            item_en: item.to_string(),
            ..MenuRow::default()
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let catalog = MenuCatalog::from_rows(vec![
            row("drinks", "Latte"),
            row("snacks", "Brownie"),
            row("drinks", "Mocha"),
            row("", "Orphan"),
            row("desserts", "Cake"),
        ]);
        assert_eq!(catalog.ids(), vec!["drinks", "snacks", "desserts"]);
        assert_eq!(catalog.category("drinks").unwrap().rows.len(), 2);
        assert_eq!(catalog.row_count(), 4);
        assert_eq!(catalog.default_active(), Some("drinks"));
    }

    #[test]
    fn parse_trims_cells_and_tolerates_short_rows() {
        let csv = "category_id,item_en,item_ar,price,offer\n  drinks , Latte ,لاتيه, 60 \n\nsnacks,Brownie\n";
        let rows = parse_feed(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_id, "drinks");
        assert_eq!(rows[0].item_en, "Latte");
        assert_eq!(rows[0].price, "60");
        assert_eq!(rows[0].offer, "");
        assert_eq!(rows[1].item_ar, "");
    }

    #[test]
    fn one_short_row_does_not_sink_the_feed() {
        let csv = "category_id,item_en,item_ar,price,offer,img_url\n\
            drinks,Latte,لاتيه,60,-,x\n\
            snacks,Brownie,براوني,40\n";
        let rows = parse_feed(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].item_en, "Brownie");
        assert_eq!(rows[1].price, "40");
        assert_eq!(rows[1].offer, "");
        assert_eq!(rows[1].img_url, "");
        let catalog = MenuCatalog::from_rows(rows);
        assert_eq!(catalog.ids(), vec!["drinks", "snacks"]);
    }

    #[test]
    fn parse_ignores_unknown_columns() {
        let csv = "category_id,item_en,internal_note\ndrinks,Latte,secret\n";
        let rows = parse_feed(csv).unwrap();
        assert_eq!(rows[0].item_en, "Latte");
    }

    #[test]
    fn parse_requires_category_column() {
        let err = parse_feed("item_en,price\nLatte,60\n").unwrap_err();
        assert!(matches!(err, FeedError::MissingCategoryColumn));
        let err = parse_feed("").unwrap_err();
        assert!(matches!(err, FeedError::MissingHeader));
    }

    #[test]
    fn anchors_are_slugged_and_deduplicated() {
        assert_eq!(anchor_id("hot-drinks"), "hot-drinks");
        assert_eq!(anchor_id("Hot Drinks!"), "hot-drinks");
        assert_eq!(anchor_id("2024 specials"), "cat-2024-specials");
        assert_eq!(anchor_id("مشروبات"), "cat");

        let catalog = MenuCatalog::from_rows(vec![row("Hot Drinks", "a"), row("hot drinks", "b")]);
        assert_eq!(catalog.anchors(), vec!["hot-drinks", "hot-drinks-2"]);
        assert_eq!(catalog.by_anchor("hot-drinks-2").unwrap().id, "hot drinks");
    }

    #[test]
    fn category_title_comes_from_first_row() {
        let mut first = row("drinks", "Latte");
        first.cat_en = "Drinks".into();
        first.cat_ar = "مشروبات".into();
        first.img_url = "https://img/drinks.png".into();
        let catalog = MenuCatalog::from_rows(vec![first, row("drinks", "Mocha")]);
        let cat = catalog.category("drinks").unwrap();
        assert_eq!(cat.title(Lang::En), "Drinks");
        assert_eq!(cat.title(Lang::Ar), "مشروبات");
        assert_eq!(cat.icon_url(), "https://img/drinks.png");
    }
}
