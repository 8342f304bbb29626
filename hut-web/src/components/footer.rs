use crate::i18n::{t, use_translations};
use hut_core::Lang;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(Footer)]
pub fn footer(_props: &Props) -> Html {
    let _rev = use_translations();
    html! {
        <footer class="site-footer">
            <p class="footer-tagline">{ t("footer.tagline") }</p>
            <p class="footer-copy">{ t("footer.copyright") }</p>
        </footer>
    }
}
