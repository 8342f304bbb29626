use hut_core::Lang;
use hut_web::i18n;
use hut_web::paths;
use hut_web::router::{NAV_ITEMS, Route};
use yew_router::Routable;
use std::collections::BTreeMap;

#[test]
fn i18n_bundle_switches_direction() {
    i18n::set_lang(Lang::En);
    assert_eq!(i18n::current_lang(), Lang::En);
    assert!(!i18n::is_rtl());
    assert_eq!(i18n::t("nav.menu"), "Menu");

    i18n::set_lang(Lang::Ar);
    assert!(i18n::is_rtl());
    assert_ne!(i18n::t("nav.menu"), "Menu");
    i18n::set_lang(Lang::En);
}

#[test]
fn missing_keys_fall_back_to_the_key() {
    i18n::set_lang(Lang::En);
    assert_eq!(i18n::t("missing.key"), "missing.key");
    let vars = BTreeMap::from([("name", "Hut")]);
    assert_eq!(i18n::tr("missing.key", Some(&vars)), "missing.key");
}

#[test]
fn site_translations_override_compiled_text() {
    i18n::set_lang(Lang::En);
    let site = i18n::SiteTranslations::from_json(
        r#"{"en": {"nav.menu": "Our Menu"}, "ar": {"nav.menu": ""}}"#,
    )
    .unwrap();
    i18n::install_site_translations(site);
    assert_eq!(i18n::t("nav.menu"), "Our Menu");

    // A blank Arabic entry falls back to the compiled Arabic text.
    i18n::set_lang(Lang::Ar);
    assert_ne!(i18n::t("nav.menu"), "");
    i18n::install_site_translations(i18n::SiteTranslations::default());
    i18n::set_lang(Lang::En);
}

#[test]
fn locales_list_both_languages() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.lang == Lang::En));
    assert!(metas.iter().any(|m| m.lang == Lang::Ar && m.lang.is_rtl()));
}

#[test]
fn asset_paths_are_absolute() {
    assert!(paths::asset_path("static/img/logo.svg").ends_with("/static/img/logo.svg"));
    assert!(paths::asset_path("static/img/logo.svg").starts_with('/'));
}

#[test]
fn routes_and_nav_sections_line_up() {
    assert_eq!(NAV_ITEMS.len(), 3);
    assert_eq!(Route::Spinner.nav_section(), Route::Games);
    assert_eq!(Route::Offers.nav_section(), Route::Menu);
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::recognize("/mission"), Some(Route::Mission));
}
