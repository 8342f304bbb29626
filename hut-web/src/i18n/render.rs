use crate::i18n::bundle::{I18nBundle, with_bundle};
use hut_core::Lang;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn interpolate(mut text: String, args: Option<&BTreeMap<&str, &str>>) -> String {
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    text
}

fn lookup(bundle: &I18nBundle, key: &str) -> Option<String> {
    let compiled = |value: &Value| get_nested_value(value, key).and_then(Value::as_str).map(str::to_string);
    bundle
        .site
        .get(bundle.lang, key)
        .map(str::to_string)
        .or_else(|| compiled(&bundle.translations))
        .or_else(|| bundle.site.get(Lang::En, key).map(str::to_string))
        .or_else(|| compiled(&bundle.fallback))
}

/// Translate a key to the current language.
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` and `{{name}}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| lookup(bundle, key))
        .map_or_else(|| key.to_string(), |text| interpolate(text, args))
}
