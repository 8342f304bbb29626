//! Boot-time downloads: site translations and the menu feed.
use crate::app::state::{AppState, FeedStatus};
use crate::feed::{FeedConfig, fetch_feed};
use crate::i18n::{install_site_translations, load_site_translations};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let translations_rev = app_state.translations_rev.clone();
    let feed = app_state.feed.clone();
    use_effect_with((), move |()| {
        spawn_local(async move {
            let url = crate::paths::translations_url();
            match load_site_translations(&url).await {
                Ok(site) => {
                    log::debug!("site translations loaded: {} entries", site.len());
                    install_site_translations(site);
                    translations_rev.set(*translations_rev + 1);
                }
                Err(err) => log::error!("Error loading translations: {err}"),
            }
        });
        spawn_local(async move {
            match fetch_feed(&FeedConfig::default()).await {
                Ok(snapshot) => feed.set(FeedStatus::Ready(Rc::new(snapshot))),
                Err(err) => {
                    log::error!("menu feed failed: {err}");
                    feed.set(FeedStatus::Failed(AttrValue::from(err.to_string())));
                }
            }
        });
    });
}
