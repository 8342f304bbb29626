use crate::i18n::locales::load_translations;
use crate::i18n::remote::SiteTranslations;
use hut_core::Lang;
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: Lang,
    pub translations: Value,
    pub fallback: Value,
    /// Site translation file, merged over the compiled locales.
    pub site: SiteTranslations,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(lang: Lang, site: SiteTranslations) -> I18nBundle {
    let fallback = load_translations(Lang::En).unwrap_or_else(empty_object);
    let translations = if lang == Lang::En {
        fallback.clone()
    } else {
        load_translations(lang).unwrap_or_else(empty_object)
    };
    I18nBundle {
        lang,
        translations,
        fallback,
        site,
    }
}

fn initial_lang() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        let saved = crate::storage::saved_language();
        Lang::detect(saved.as_deref(), &crate::dom::browser_language())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::En
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(initial_lang(), SiteTranslations::default()));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language.
///
/// Updates `<html lang dir>` and remembers the choice for the next visit.
pub fn set_lang(lang: Lang) {
    CURRENT.with(|cell| {
        let site = std::mem::take(&mut cell.borrow_mut().site);
        cell.replace(build_bundle(lang, site));
    });
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::set_document_lang(lang.code(), lang.dir());
        crate::storage::save_language(lang.code());
    }
}

/// Install the downloaded site translations for every language.
pub fn install_site_translations(site: SiteTranslations) {
    CURRENT.with(|cell| cell.borrow_mut().site = site);
}

#[must_use]
pub fn current_lang() -> Lang {
    with_bundle(|bundle| bundle.lang)
}

#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.lang.is_rtl())
}
