use futures::executor::block_on;
use hut_core::mission::PROGRESS_SEGMENTS;
use hut_core::{
    Animation, FeedSnapshot, Lang, Localized, MenuRow, MissionConfig, MissionGame, MissionState,
    PriceDisplay, ProductSheet, SpinnerView, card_price,
};
use hut_web::components::footer::Footer;
use hut_web::components::header::Header;
use hut_web::components::ui::menu_tabs::{MenuTabs, TabItem};
use hut_web::components::ui::mission_card::MissionCard;
use hut_web::components::ui::nutrition_sheet::NutritionSheet;
use hut_web::components::ui::product_card::ProductCard;
use hut_web::components::ui::progress_bar::ProgressBar;
use hut_web::components::ui::skeleton::MenuSkeleton;
use hut_web::components::ui::spinner_panel::{SpinnerDisplay, SpinnerPanel};
use hut_web::router::Route;
use yew::prelude::*;
use yew::{Callback, LocalServerRenderer};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

const FIXTURE: &str = include_str!("../../hut-core/tests/fixtures/menu.csv");

#[derive(Properties, PartialEq)]
struct RoutedProps {
    #[prop_or_default]
    children: Html,
}

/// Links need a router in scope.
#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    html! {
        <Router history={AnyHistory::from(MemoryHistory::new())}>
            { props.children.clone() }
        </Router>
    }
}

fn render_routed(children: Html) -> String {
    block_on(LocalServerRenderer::<Routed>::with_props(RoutedProps { children }).render())
}

fn header_props(lang: Lang, active: Route, open: bool) -> hut_web::components::header::Props {
    hut_web::components::header::Props {
        lang,
        active,
        side_menu_open: open,
        on_toggle_lang: Callback::noop(),
        on_side_menu: Callback::noop(),
    }
}

#[test]
fn header_offers_the_other_language_and_highlights_section() {
    hut_web::i18n::set_lang(Lang::En);
    let props = header_props(Lang::En, Route::Menu, false);
    let html = render_routed(html! { <Header ..props /> });
    assert!(html.contains("lang-toggle"));
    assert!(html.contains("العربية"));
    assert!(html.contains("nav-link active"));
    assert!(html.contains("Menu"));
    assert!(!html.contains("side-menu open"));
}

#[test]
fn header_side_menu_opens_from_props() {
    hut_web::i18n::set_lang(Lang::Ar);
    let props = header_props(Lang::Ar, Route::Home, true);
    let html = render_routed(html! { <Header ..props /> });
    assert!(html.contains("side-menu open"));
    assert!(html.contains("English"));
    hut_web::i18n::set_lang(Lang::En);
}

#[test]
fn footer_follows_active_language() {
    hut_web::i18n::set_lang(Lang::En);
    let props = hut_web::components::footer::Props { lang: Lang::En };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("site-footer"));
    assert!(html.contains("Brewed with love"));

    hut_web::i18n::set_lang(Lang::Ar);
    let props = hut_web::components::footer::Props { lang: Lang::Ar };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("محضّرة بحب"));
    hut_web::i18n::set_lang(Lang::En);
}

#[test]
fn skeleton_has_fixed_placeholder_counts() {
    let html = block_on(LocalServerRenderer::<MenuSkeleton>::new().render());
    assert_eq!(html.matches("skeleton-tab\"").count(), 5);
    assert_eq!(html.matches("skeleton-section").count(), 3);
    assert_eq!(html.matches("skeleton-card").count(), 9);
    assert!(html.contains("class=\"menu-content noscroll\""));
}

#[test]
fn menu_tabs_mark_only_the_active_tab() {
    hut_web::i18n::set_lang(Lang::En);
    let tabs = vec![
        TabItem {
            anchor: "hot-drinks".into(),
            label: "Hot Drinks".into(),
        },
        TabItem {
            anchor: "snacks".into(),
            label: "Snacks".into(),
        },
    ];
    let props = hut_web::components::ui::menu_tabs::Props {
        tabs,
        active: Some("snacks".into()),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuTabs>::with_props(props).render());
    assert_eq!(html.matches("tab-btn active").count(), 1);
    assert!(html.contains("href=\"#snacks\""));
    assert!(html.contains("data-cat=\"hot-drinks\""));
}

#[test]
fn product_card_strikes_through_discounted_price() {
    let props = hut_web::components::ui::product_card::Props {
        name: "Latte".into(),
        price: card_price("60", "55"),
        on_open: None,
    };
    let html = block_on(LocalServerRenderer::<ProductCard>::with_props(props).render());
    assert!(html.contains("original-price"));
    assert!(html.contains("offer-price"));
    assert!(!html.contains("tappable"));
    assert!(!html.contains("<img"));

    let props = hut_web::components::ui::product_card::Props {
        name: "Espresso".into(),
        price: PriceDisplay::Regular("35".into()),
        on_open: Some(Callback::noop()),
    };
    let html = block_on(LocalServerRenderer::<ProductCard>::with_props(props).render());
    assert!(!html.contains("original-price"));
    assert!(html.contains("tappable"));
    assert!(html.contains("35"));
}

#[test]
fn nutrition_sheet_lists_units_and_hides_missing_ingredients() {
    hut_web::i18n::set_lang(Lang::En);
    let snapshot = FeedSnapshot::from_csv(FIXTURE).unwrap();
    let latte = &snapshot.catalog.category("hot-drinks").unwrap().rows[1];
    let props = hut_web::components::ui::nutrition_sheet::Props {
        sheet: ProductSheet::from_row(latte, Lang::En),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NutritionSheet>::with_props(props).render());
    assert!(html.contains("Latte"));
    assert!(html.contains("original-price"));
    assert!(html.contains("LE"));
    assert!(html.contains("7 g"));
    assert!(html.contains("150 mg"));
    assert!(html.contains("Ingredients"));

    let water = MenuRow {
        category_id: "drinks".into(),
        item_en: "Water".into(),
        price: "-".into(),
        fat_g: "0".into(),
        ..MenuRow::default()
    };
    let props = hut_web::components::ui::nutrition_sheet::Props {
        sheet: ProductSheet::from_row(&water, Lang::Ar),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NutritionSheet>::with_props(props).render());
    assert!(!html.contains("sheet-ingredients"));
    assert!(!html.contains("currency"));
    assert!(html.contains("0 جم"));
}

#[test]
fn progress_bar_fills_completed_steps() {
    let props = hut_web::components::ui::progress_bar::Props {
        filled: 2,
        segments: PROGRESS_SEGMENTS,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert_eq!(html.matches("progress-segment").count(), 3);
    assert_eq!(html.matches("progress-segment filled").count(), 2);
}

#[test]
fn mission_card_renders_check_in_and_final_steps() {
    hut_web::i18n::set_lang(Lang::En);
    let config = MissionConfig::default();
    let view = MissionGame::new(config, MissionState::fresh(0.0)).view(0.0);
    let props = hut_web::components::ui::mission_card::Props {
        view,
        checking: false,
        on_claim: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MissionCard>::with_props(props).render());
    assert!(html.contains("Welcome, Challenger"));
    assert!(html.contains("Next Mission"));
    assert!(!html.contains("mission-countdown"));

    let finished = MissionState {
        step: 3,
        start_ms: 0.0,
    };
    let view = MissionGame::new(config, finished).view(1_000.0);
    let props = hut_web::components::ui::mission_card::Props {
        view,
        checking: false,
        on_claim: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MissionCard>::with_props(props).render());
    assert!(html.contains("Your Offer Is Ready"));
    assert!(html.contains("mission-countdown"));
    assert!(!html.contains("mission-button"));
}

#[test]
fn mission_card_shows_checking_label_while_locating() {
    hut_web::i18n::set_lang(Lang::En);
    let view = MissionGame::new(MissionConfig::default(), MissionState::fresh(0.0)).view(0.0);
    let props = hut_web::components::ui::mission_card::Props {
        view,
        checking: true,
        on_claim: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MissionCard>::with_props(props).render());
    assert!(html.contains("Checking your location"));
    assert!(html.contains("disabled"));
}

#[test]
fn spinner_panel_walks_through_views() {
    hut_web::i18n::set_lang(Lang::En);
    let render = |display: SpinnerDisplay, lang: Lang, animating: Option<Animation>| {
        let props = hut_web::components::ui::spinner_panel::Props {
            lang,
            display,
            animating,
            celebrate: false,
            on_action: Callback::noop(),
        };
        block_on(LocalServerRenderer::<SpinnerPanel>::with_props(props).render())
    };

    let html = render(SpinnerDisplay::default(), Lang::En, None);
    assert!(html.contains("Coffee Drinks"));
    assert!(html.contains("Non-Coffee Drinks"));

    let subs = SpinnerDisplay {
        view: SpinnerView::SubOptions {
            category: "coffee".into(),
        },
        selected: None,
    };
    let html = render(subs, Lang::En, Some(Animation::Spin));
    assert!(html.contains("Hot Coffee"));
    assert!(html.contains("Iced Coffee"));
    assert!(html.contains("Start Over"));
    assert!(html.contains("spinning"));

    let accepted = SpinnerDisplay {
        view: SpinnerView::Accepted,
        selected: Some(Localized::new("Latte", "لاتيه")),
    };
    let html = render(accepted, Lang::Ar, None);
    assert!(html.contains("لاتيه"));
}
