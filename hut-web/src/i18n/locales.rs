use hut_core::Lang;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Lang,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        lang: Lang::En,
        name: "English",
    },
    LocaleMeta {
        lang: Lang::Ar,
        name: "العربية",
    },
];

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../../i18n/en.json")),
    (Lang::Ar, include_str!("../../i18n/ar.json")),
];

/// Shipped locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

/// Parse the compiled locale file for `lang`.
pub fn load_translations(lang: Lang) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("compiled locale `{lang}` is not valid JSON: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shipped_locale_parses() {
        for meta in locales() {
            let value = load_translations(meta.lang).expect("locale should parse");
            assert!(value.is_object());
        }
    }

    #[test]
    fn native_names_match_toggle_labels() {
        for meta in locales() {
            assert_eq!(meta.name, meta.lang.native_name());
        }
    }
}
