use hut_core::{FeedSnapshot, Lang};
use std::rc::Rc;
use yew::prelude::*;

/// Progress of the one feed download shared by the menu and the spinner.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Loading,
    Ready(Rc<FeedSnapshot>),
    Failed(AttrValue),
}

impl FeedStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub lang: UseStateHandle<Lang>,
    pub feed: UseStateHandle<FeedStatus>,
    /// Bumped when the site translation file arrives so text re-renders.
    pub translations_rev: UseStateHandle<u32>,
    pub side_menu_open: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        lang: use_state(crate::i18n::current_lang),
        feed: use_state(FeedStatus::default),
        translations_rev: use_state(|| 0_u32),
        side_menu_open: use_state(|| false),
    }
}

impl AppState {
    /// Flip between English and Arabic, keeping everything else as it is.
    pub fn toggle_lang(&self) {
        let next = self.lang.toggled();
        crate::i18n::set_lang(next);
        log::info!("language switched to {next}");
        self.lang.set(next);
    }
}
