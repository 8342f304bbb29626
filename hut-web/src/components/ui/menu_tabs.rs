use crate::i18n::t;
use yew::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TabItem {
    pub anchor: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tabs: Vec<TabItem>,
    #[prop_or_default]
    pub active: Option<AttrValue>,
    pub on_select: Callback<String>,
}

/// Sticky horizontal strip of category tabs.
#[function_component(MenuTabs)]
pub fn menu_tabs(p: &Props) -> Html {
    html! {
        <nav class="menu-tabs" aria-label={t("menu.tabs_label")}>
            { for p.tabs.iter().map(|tab| {
                let is_active = p.active.as_ref() == Some(&tab.anchor);
                let onclick = {
                    let cb = p.on_select.clone();
                    let anchor = tab.anchor.to_string();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        cb.emit(anchor.clone());
                    })
                };
                html! {
                    <a class={classes!("tab-btn", is_active.then_some("active"))}
                        href={format!("#{}", tab.anchor)}
                        data-cat={tab.anchor.clone()}
                        aria-current={is_active.then_some("true")}
                        {onclick}>
                        { tab.label.clone() }
                    </a>
                }
            }) }
        </nav>
    }
}
