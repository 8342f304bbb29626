use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/menu")]
    Menu,
    #[at("/offers")]
    Offers,
    #[at("/games")]
    Games,
    #[at("/mission")]
    Mission,
    #[at("/spinner")]
    Spinner,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Top-level navigation entries, in header order.
pub const NAV_ITEMS: [(Route, &str); 3] = [
    (Route::Home, "nav.home"),
    (Route::Menu, "nav.menu"),
    (Route::Games, "nav.games"),
];

impl Route {
    /// The navigation entry highlighted while this route is shown.
    #[must_use]
    pub const fn nav_section(&self) -> Self {
        match self {
            Self::Menu | Self::Offers => Self::Menu,
            Self::Games | Self::Mission | Self::Spinner => Self::Games,
            Self::Home => Self::Home,
            Self::NotFound => Self::NotFound,
        }
    }
}
