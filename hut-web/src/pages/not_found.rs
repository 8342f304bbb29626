use crate::i18n::{t, use_translations};
use crate::router::Route;
use hut_core::Lang;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(_props: &Props) -> Html {
    let _rev = use_translations();
    html! {
        <section class="not-found">
            <h1>{ t("not_found.title") }</h1>
            <Link<Route> to={Route::Home} classes="btn">{ t("not_found.back") }</Link<Route>>
        </section>
    }
}
