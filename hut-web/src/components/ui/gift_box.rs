use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub shaking: bool,
    #[prop_or_default]
    pub open: bool,
}

#[function_component(GiftBox)]
pub fn gift_box(p: &Props) -> Html {
    let class = classes!(
        "gift-box",
        p.shaking.then_some("shaking"),
        p.open.then_some("open")
    );
    html! {
        <div {class} aria-hidden="true">
            <img class="gift-lid" src={asset_path("static/img/gift-lid.svg")} alt="" />
            <img class="gift-body" src={asset_path("static/img/gift-box.svg")} alt="" />
        </div>
    }
}
