use hut_core::PriceDisplay;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
    pub price: PriceDisplay,
    /// Set on touch devices, where tapping a card opens its detail sheet.
    #[prop_or_default]
    pub on_open: Option<Callback<()>>,
}

pub fn price_view(price: &PriceDisplay) -> Html {
    match price {
        PriceDisplay::Regular(value) => html! {
            <span class="price">{ value.clone() }</span>
        },
        PriceDisplay::Discounted { original, offer } => html! {
            <span class="price">
                <span class="original-price">{ original.clone() }</span>
                <span class="offer-price">{ offer.clone() }</span>
            </span>
        },
        PriceDisplay::Hidden => Html::default(),
    }
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let onclick = p.on_open.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
    let class = classes!("product-card", p.on_open.is_some().then_some("tappable"));
    html! {
        <article {class} {onclick}>
            <h3 class="product-name">{ p.name.clone() }</h3>
            { price_view(&p.price) }
        </article>
    }
}
