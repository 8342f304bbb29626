use crate::components::copy_button::CopyButton;
use crate::i18n::{t, use_translations};
use hut_core::Lang;
use yew::prelude::*;

/// (title key, code key) of each promotion.
const OFFERS: [(&str, &str); 2] = [
    ("offers.student", "offers.student_code"),
    ("offers.morning", "offers.morning_code"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(OffersPage)]
pub fn offers_page(_props: &Props) -> Html {
    let _rev = use_translations();
    html! {
        <section class="offers">
            <h1>{ t("offers.title") }</h1>
            <p class="offers-subtitle">{ t("offers.subtitle") }</p>
            <ul class="offer-list">
                { for OFFERS.iter().map(|(title, code)| html! {
                    <li class="offer">
                        <h2>{ t(title) }</h2>
                        <CopyButton text={AttrValue::from(t(code))} />
                    </li>
                }) }
            </ul>
        </section>
    }
}
