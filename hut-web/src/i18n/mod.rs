mod bundle;
mod locales;
mod remote;
mod render;

pub use bundle::{I18nBundle, current_lang, install_site_translations, is_rtl, set_lang};
pub use locales::{LocaleMeta, locales};
pub use remote::{SiteTranslations, TranslationLoadError, load_site_translations};
pub use render::{t, tr};

use yew::prelude::*;

/// Revision of the downloaded site translations, provided as a context so
/// text re-renders when the file arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslationsRev(pub u32);

/// Subscribe the calling component to translation updates.
#[hook]
pub fn use_translations() -> TranslationsRev {
    use_context::<TranslationsRev>().unwrap_or_default()
}
