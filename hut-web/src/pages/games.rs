use crate::i18n::{t, use_translations};
use crate::router::Route;
use hut_core::Lang;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(GamesPage)]
pub fn games_page(_props: &Props) -> Html {
    let _rev = use_translations();
    let games = [
        (Route::Mission, "games.mission_title", "games.mission_desc"),
        (Route::Spinner, "games.spinner_title", "games.spinner_desc"),
    ];
    html! {
        <section class="games">
            <h1>{ t("games.title") }</h1>
            <div class="game-list">
                { for games.into_iter().map(|(route, title, desc)| html! {
                    <Link<Route> to={route} classes="game-card">
                        <h2>{ t(title) }</h2>
                        <p>{ t(desc) }</p>
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}
