#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod feed;
pub mod geo;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;
pub mod scroll;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    // Apply the detected language to <html lang dir> before the first render.
    crate::i18n::set_lang(crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
