//! Site-wide constants and compile-time overrides.

/// Published spreadsheet export used when no `HUT_FEED_URL` is set at build time.
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vROZEd2FRFZXsGihkUTQPCpBXMwwkMwBioYoemaBX1P8XYWhUQqpw4yA8s4E-plSlbPAxeb5i3bkFEU/pub?gid=0&single=true&output=csv";

/// Site translation file, relative to the public base path.
pub const TRANSLATIONS_PATH: &str = "static/i18n/translations.json";

pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";
pub const STEP_INDEX_KEY: &str = "stepIndex";
pub const STEP_START_KEY: &str = "stepStart";

/// How long a copy button keeps its `copied` state.
pub const COPIED_FLASH_MS: u32 = 1000;

/// Spinner taps buzz the device for this long when vibration is available.
pub const VIBRATE_MS: u32 = 50;

/// Number of placeholder tabs and sections drawn while the feed downloads.
pub const SKELETON_TABS: usize = 5;
pub const SKELETON_SECTIONS: usize = 3;
pub const SKELETON_PRODUCTS: usize = 3;

/// Feed URL, honouring a build-time `HUT_FEED_URL` override.
#[must_use]
pub fn feed_url() -> &'static str {
    option_env!("HUT_FEED_URL").unwrap_or(DEFAULT_FEED_URL)
}

#[must_use]
pub const fn translations_path() -> &'static str {
    TRANSLATIONS_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_defaults_to_published_sheet() {
        if option_env!("HUT_FEED_URL").is_none() {
            assert_eq!(feed_url(), DEFAULT_FEED_URL);
        }
        assert!(feed_url().starts_with("http"));
    }
}
