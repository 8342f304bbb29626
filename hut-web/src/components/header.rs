use crate::components::side_menu::SideMenu;
use crate::i18n::{t, use_translations};
use crate::paths::asset_path;
use crate::router::{NAV_ITEMS, Route};
use hut_core::Lang;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    /// Navigation entry to highlight.
    pub active: Route,
    pub side_menu_open: bool,
    pub on_toggle_lang: Callback<()>,
    pub on_side_menu: Callback<bool>,
}

/// Primary navigation links, shared by the header bar and the side menu.
pub fn nav_links(active: &Route) -> Html {
    NAV_ITEMS
        .iter()
        .map(|(route, key)| {
            let classes = classes!("nav-link", (route == active).then_some("active"));
            html! {
                <Link<Route> to={route.clone()} {classes}>{ t(key) }</Link<Route>>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let _rev = use_translations();
    let toggle_lang = {
        let cb = p.on_toggle_lang.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_menu = {
        let cb = p.on_side_menu.clone();
        Callback::from(move |_| cb.emit(true))
    };
    let close_menu = {
        let cb = p.on_side_menu.clone();
        Callback::from(move |()| cb.emit(false))
    };

    html! {
        <header class="site-header" role="banner">
            <Link<Route> to={Route::Home} classes="logo">
                <img src={asset_path("static/img/logo.svg")} alt={t("header.logo_alt")} />
            </Link<Route>>
            <nav class="site-nav" aria-label={t("nav.primary")}>
                { nav_links(&p.active) }
            </nav>
            <div class="header-actions">
                <button id="lang-toggle" class="lang-toggle" onclick={toggle_lang}
                    aria-label={t("nav.language")} lang={p.lang.toggled().code()}>
                    { p.lang.toggled().native_name() }
                </button>
                <button class="menu-toggle" onclick={open_menu}
                    aria-label={t("nav.open_menu")} aria-expanded={p.side_menu_open.to_string()}>
                    <span class="menu-toggle-bar"></span>
                    <span class="menu-toggle-bar"></span>
                    <span class="menu-toggle-bar"></span>
                </button>
            </div>
            <SideMenu open={p.side_menu_open} active={p.active.clone()} on_close={close_menu} />
        </header>
    }
}
