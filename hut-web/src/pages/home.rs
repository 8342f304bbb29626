use crate::i18n::{t, use_translations};
use crate::paths::asset_path;
use crate::router::Route;
use hut_core::Lang;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(HomePage)]
pub fn home_page(_props: &Props) -> Html {
    let _rev = use_translations();
    html! {
        <section class="hero">
            <img class="hero-logo" src={asset_path("static/img/logo.svg")} alt={t("header.logo_alt")} />
            <h1>{ t("home.title") }</h1>
            <p class="hero-subtitle">{ t("home.subtitle") }</p>
            <div class="hero-actions">
                <Link<Route> to={Route::Menu} classes="btn btn-primary">{ t("home.cta_menu") }</Link<Route>>
                <Link<Route> to={Route::Games} classes="btn btn-secondary">{ t("home.cta_games") }</Link<Route>>
                <Link<Route> to={Route::Offers} classes="btn btn-ghost">{ t("nav.offers") }</Link<Route>>
            </div>
        </section>
    }
}
