use hut_core::feed::is_valid_anchor;
use hut_core::price::CURRENCY_SUFFIX;
use hut_core::{
    FeedSnapshot, Lang, PriceDisplay, ProductSheet, ScrollReconciler, SpinnerGame, SpinnerView,
    card_price, parse_feed,
};

const FIXTURE: &str = include_str!("fixtures/menu.csv");

#[test]
fn every_categorised_row_lands_in_exactly_one_group() {
    let rows = parse_feed(FIXTURE).unwrap();
    let categorised = rows
        .iter()
        .filter(|r| !r.category_id.trim().is_empty())
        .count();
    let snapshot = FeedSnapshot::from_rows(rows);

    assert_eq!(snapshot.catalog.row_count(), categorised);
    assert_eq!(
        snapshot.catalog.ids(),
        vec!["hot-drinks", "iced-drinks", "Fresh Juice", "snacks"]
    );
    for category in snapshot.catalog.categories() {
        assert!(category.rows.iter().all(|r| r.category_id == category.id));
    }
}

#[test]
fn tabs_follow_categories_and_start_on_the_first() {
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let anchors = snapshot.catalog.anchors();
    assert_eq!(anchors, vec!["hot-drinks", "iced-drinks", "fresh-juice", "snacks"]);
    assert!(anchors.iter().all(|a| is_valid_anchor(a)));
    assert_eq!(snapshot.catalog.default_active(), Some("hot-drinks"));

    let titles: Vec<&str> = snapshot
        .catalog
        .categories()
        .iter()
        .map(|c| c.title(Lang::Ar))
        .collect();
    assert_eq!(titles[0], "مشروبات ساخنة");
}

#[test]
fn cards_strike_through_only_real_offers() {
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let iced = snapshot.catalog.category("iced-drinks").unwrap();
    let shown: Vec<bool> = iced
        .rows
        .iter()
        .map(|r| card_price(&r.price, &r.offer).has_strikethrough())
        .collect();
    assert_eq!(shown, vec![false, true, false]);
}

#[test]
fn sheet_for_arabic_visitor_falls_back_where_needed() {
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let latte = &snapshot.catalog.category("iced-drinks").unwrap().rows[0];
    let sheet = ProductSheet::from_row(latte, Lang::Ar);
    assert_eq!(sheet.name, "آيس لاتيه");
    // Arabic ingredients are blank, English ones are used.
    assert_eq!(sheet.ingredients.as_deref(), Some("Espresso, milk, ice"));
    assert_eq!(sheet.price, PriceDisplay::Regular("65".into()));
    assert_eq!(CURRENCY_SUFFIX, "LE");
}

#[test]
fn spinner_draws_from_fixture_lists() {
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let mut game = SpinnerGame::new(snapshot.spinner.clone(), 99);

    game.select_category("snacks");
    let picked = game.selected().unwrap().en.clone();
    assert!(picked == "Brownie" || picked == "Cookie");

    game.reset();
    game.select_category("noncoffee");
    assert!(matches!(game.view(), SpinnerView::SubOptions { .. }));
    for _ in 0..10 {
        game.suggest("noncoffee", Some("cold"));
        let picked = game.selected().unwrap().en.as_str();
        assert!(picked == "Lemon Mint" || picked == "Orange Juice");
    }
}

#[test]
fn scroll_spy_starts_on_default_tab() {
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let mut spy = ScrollReconciler::new(snapshot.catalog.default_active());
    assert_eq!(spy.active(), Some("hot-drinks"));
    let cmd = spy.on_tab_click("snacks", false);
    assert_eq!(spy.on_visible(["iced-drinks"]), None);
    spy.on_settle(cmd.generation);
    assert_eq!(spy.on_visible(["iced-drinks"]).as_deref(), Some("iced-drinks"));
}
