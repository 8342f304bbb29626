use crate::fixture::FeedFixture;
use anyhow::{Result, ensure};
use hut_core::feed::is_valid_anchor;
use hut_core::{Lang, Nutrient, ProductSheet, card_price, is_placeholder};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

pub fn run(fixture: &FeedFixture, seed: u64) -> Result<()> {
    let catalog = &fixture.snapshot.catalog;
    let categorised: Vec<_> = fixture
        .rows
        .iter()
        .filter(|row| !row.category_id.trim().is_empty())
        .collect();
    ensure!(!catalog.is_empty(), "feed has no categorised rows");
    ensure!(
        catalog.row_count() == categorised.len(),
        "grouped {} rows but the feed has {} categorised rows",
        catalog.row_count(),
        categorised.len()
    );

    let mut sheet_order: Vec<&str> = Vec::new();
    for row in &categorised {
        let id = row.category_id.trim();
        if !sheet_order.contains(&id) {
            sheet_order.push(id);
        }
    }
    ensure!(
        catalog.ids() == sheet_order,
        "category order {:?} differs from sheet order {sheet_order:?}",
        catalog.ids()
    );

    let mut anchors = HashSet::new();
    for category in catalog.categories() {
        ensure!(
            category.rows.iter().all(|row| row.category_id.trim() == category.id),
            "category `{}` holds rows of another category",
            category.id
        );
        ensure!(
            is_valid_anchor(&category.anchor),
            "anchor `{}` of `{}` is not a usable element id",
            category.anchor,
            category.id
        );
        ensure!(
            anchors.insert(category.anchor.as_str()),
            "anchor `{}` is used twice",
            category.anchor
        );
    }

    for row in &categorised {
        for lang in Lang::ALL {
            ensure!(
                !row.name(lang).trim().is_empty(),
                "row in `{}` has no {lang} name",
                row.category_id
            );
        }
        let display = card_price(&row.price, &row.offer);
        ensure!(
            display.has_strikethrough() == !is_placeholder(&row.offer),
            "`{}` with offer `{}` renders as {display:?}",
            row.item_en,
            row.offer
        );
    }

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sample = categorised[rng.gen_range(0..categorised.len())];
    for lang in Lang::ALL {
        let sheet = ProductSheet::from_row(sample, lang);
        ensure!(
            sheet.nutrition.len() == Nutrient::ALL.len(),
            "sheet for `{}` lists {} nutrients",
            sample.item_en,
            sheet.nutrition.len()
        );
        ensure!(
            sheet.nutrition.iter().all(|line| !line.value.is_empty()),
            "sheet for `{}` has a blank nutrition value",
            sample.item_en
        );
    }
    Ok(())
}
