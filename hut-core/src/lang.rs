//! Site languages and bilingual text.
use serde::{Deserialize, Serialize};

/// The two languages the site ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a stored or attribute language code. Only exact `en`/`ar` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Native name, used as the label of the button that switches *to* this language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Resolve the visitor's language.
    ///
    /// A saved preference wins; otherwise any `ar*` browser language selects
    /// Arabic and everything else falls back to English.
    #[must_use]
    pub fn detect(saved: Option<&str>, browser_language: &str) -> Self {
        if let Some(lang) = saved.and_then(Self::from_code) {
            return lang;
        }
        if browser_language.trim().to_ascii_lowercase().starts_with("ar") {
            Self::Ar
        } else {
            Self::En
        }
    }

    /// Pick the text for this language, falling back to English when the
    /// Arabic column is blank.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Self::Ar if !ar.trim().is_empty() => ar,
            _ => en,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A string carried in both site languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    #[must_use]
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    #[must_use]
    pub fn get(&self, lang: Lang) -> &str {
        lang.pick(&self.en, &self.ar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_serializes_as_its_code() {
        for lang in Lang::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
            assert_eq!(serde_json::from_str::<Lang>(&json).unwrap(), lang);
        }
    }

    #[test]
    fn saved_preference_beats_browser_language() {
        assert_eq!(Lang::detect(Some("en"), "ar-EG"), Lang::En);
        assert_eq!(Lang::detect(Some("ar"), "en-US"), Lang::Ar);
    }

    #[test]
    fn browser_language_is_used_when_nothing_saved() {
        assert_eq!(Lang::detect(None, "ar-EG"), Lang::Ar);
        assert_eq!(Lang::detect(None, "AR"), Lang::Ar);
        assert_eq!(Lang::detect(None, "fr-FR"), Lang::En);
        assert_eq!(Lang::detect(Some("klingon"), "en"), Lang::En);
    }

    #[test]
    fn toggle_and_direction() {
        assert_eq!(Lang::En.toggled(), Lang::Ar);
        assert_eq!(Lang::Ar.toggled(), Lang::En);
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::En.toggled().native_name(), "العربية");
    }

    #[test]
    fn blank_arabic_falls_back_to_english() {
        let text = Localized::new("Latte", "");
        assert_eq!(text.get(Lang::Ar), "Latte");
        let text = Localized::new("Latte", "لاتيه");
        assert_eq!(text.get(Lang::Ar), "لاتيه");
        assert_eq!(text.get(Lang::En), "Latte");
    }
}
