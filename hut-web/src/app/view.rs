use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::i18n::TranslationsRev;
use crate::pages::{
    games::GamesPage, home::HomePage, menu::MenuPage, mission::MissionPage,
    not_found::NotFoundPage, offers::OffersPage, spinner::SpinnerPage,
};
use crate::router::Route;
use yew::prelude::*;

fn render_page(state: &AppState, route: &Route) -> Html {
    let lang = *state.lang;
    let feed = (*state.feed).clone();
    match route {
        Route::Home => html! { <HomePage {lang} /> },
        Route::Menu => html! { <MenuPage {lang} {feed} /> },
        Route::Offers => html! { <OffersPage {lang} /> },
        Route::Games => html! { <GamesPage {lang} /> },
        Route::Mission => html! { <MissionPage {lang} /> },
        Route::Spinner => html! { <SpinnerPage {lang} {feed} /> },
        Route::NotFound => html! { <NotFoundPage {lang} /> },
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let route = route.cloned().unwrap_or(Route::NotFound);
    // The menu page keeps the footer hidden until its content is in.
    let show_footer = !(route == Route::Menu && state.feed.is_loading());

    let on_toggle_lang = {
        let state = state.clone();
        Callback::from(move |()| state.toggle_lang())
    };
    let on_side_menu = {
        let open = state.side_menu_open.clone();
        Callback::from(move |value: bool| open.set(value))
    };

    html! {
        <ContextProvider<TranslationsRev> context={TranslationsRev(*state.translations_rev)}>
            <Header
                lang={*state.lang}
                active={route.nav_section()}
                side_menu_open={*state.side_menu_open}
                on_toggle_lang={on_toggle_lang}
                on_side_menu={on_side_menu}
            />
            <main id="main" role="main">
                { render_page(state, &route) }
            </main>
            if show_footer {
                <Footer lang={*state.lang} />
            }
        </ContextProvider<TranslationsRev>>
    }
}
