//! Site translation file fetched at boot.
//!
//! The file maps a language code to flat `key -> text` pairs. Keys match the
//! dotted keys of the compiled locales and win over them.
use crate::dom;
use hut_core::Lang;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteTranslations {
    by_lang: HashMap<Lang, HashMap<String, String>>,
}

impl SiteTranslations {
    /// Parse the translation file. Languages other than the shipped ones are ignored.
    ///
    /// # Errors
    /// Returns an error when the text is not a `lang -> key -> string` object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(text)?;
        let by_lang = raw
            .into_iter()
            .filter_map(|(code, entries)| Lang::from_code(&code).map(|lang| (lang, entries)))
            .collect();
        Ok(Self { by_lang })
    }

    #[must_use]
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        self.by_lang
            .get(&lang)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_lang.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Error)]
pub enum TranslationLoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Download and parse the site translation file.
///
/// # Errors
/// Any network, status or JSON failure.
#[allow(clippy::future_not_send)]
pub async fn load_site_translations(url: &str) -> Result<SiteTranslations, TranslationLoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| TranslationLoadError::Request(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(TranslationLoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text = dom::response_text(&response)
        .await
        .map_err(|err| TranslationLoadError::Request(dom::js_error_message(&err)))?
        .ok_or(TranslationLoadError::Utf8)?;
    Ok(SiteTranslations::from_json(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_languages_and_blank_entries_are_ignored() {
        let site = SiteTranslations::from_json(
            r#"{"en": {"nav.menu": "Menu", "nav.games": ""}, "fr": {"nav.menu": "Carte"}}"#,
        )
        .unwrap();
        assert_eq!(site.get(Lang::En, "nav.menu"), Some("Menu"));
        assert_eq!(site.get(Lang::En, "nav.games"), None);
        assert_eq!(site.get(Lang::Ar, "nav.menu"), None);
        assert_eq!(site.len(), 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(SiteTranslations::from_json("[1, 2]").is_err());
    }
}
