use crate::app::FeedStatus;
use crate::components::ui::menu_tabs::{MenuTabs, TabItem};
use crate::components::ui::nutrition_sheet::NutritionSheet;
use crate::components::ui::product_card::ProductCard;
use crate::components::ui::skeleton::MenuSkeleton;
use crate::dom;
use crate::i18n::{t, use_translations};
use crate::scroll::ScrollSpy;
use hut_core::{FeedSnapshot, Lang, ProductSheet, ScrollReconciler, card_price, is_placeholder};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub feed: FeedStatus,
}

#[function_component(MenuPage)]
pub fn menu_page(p: &Props) -> Html {
    let _rev = use_translations();
    let body = match &p.feed {
        FeedStatus::Loading => html! { <MenuSkeleton /> },
        FeedStatus::Failed(_) => html! {
            <p class="load-error" role="alert">{ t("menu.load_error") }</p>
        },
        FeedStatus::Ready(snapshot) => html! {
            <MenuContent lang={p.lang} snapshot={Rc::clone(snapshot)} />
        },
    };
    html! {
        <section class="menu-page">
            <h1 class="menu-title">{ t("menu.title") }</h1>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContentProps {
    pub lang: Lang,
    pub snapshot: Rc<FeedSnapshot>,
}

/// Tabs, category sections and the detail sheet for a loaded catalog.
#[function_component(MenuContent)]
pub fn menu_content(p: &ContentProps) -> Html {
    let catalog = &p.snapshot.catalog;
    let active = use_state(|| catalog.default_active().map(str::to_string));
    let reconciler = use_mut_ref(|| ScrollReconciler::new(catalog.default_active()));
    let spy = use_mut_ref(|| None::<ScrollSpy>);
    let touch = use_state(|| false);
    // (category index, row index) of the product whose sheet is open.
    let open_item = use_state(|| None::<(usize, usize)>);
    let content_ref = use_node_ref();

    {
        let active = active.clone();
        let reconciler = reconciler.clone();
        let spy = spy.clone();
        let touch = touch.clone();
        let content_ref = content_ref.clone();
        use_effect_with(Rc::clone(&p.snapshot), move |snapshot| {
            let initial = snapshot.catalog.default_active().map(str::to_string);
            reconciler.borrow_mut().reset(initial.as_deref());
            active.set(initial);
            touch.set(dom::is_touch_device());

            if let Some(container) = content_ref.cast::<HtmlElement>() {
                let on_active = {
                    let active = active.clone();
                    Callback::from(move |anchor: String| active.set(Some(anchor)))
                };
                match ScrollSpy::attach(container, Rc::clone(&reconciler), on_active) {
                    Ok(attached) => {
                        spy.borrow_mut().replace(attached);
                    }
                    Err(err) => log::error!("scroll spy failed: {}", dom::js_error_message(&err)),
                }
            }
            move || {
                spy.borrow_mut().take();
            }
        });
    }

    let on_select = {
        let spy = spy.clone();
        let active = active.clone();
        let touch = *touch;
        Callback::from(move |anchor: String| match spy.borrow().as_ref() {
            Some(spy) => spy.scroll_to(&anchor, touch),
            None => active.set(Some(anchor)),
        })
    };

    let tabs: Vec<TabItem> = catalog
        .categories()
        .iter()
        .map(|cat| TabItem {
            anchor: AttrValue::from(cat.anchor.clone()),
            label: AttrValue::from(cat.title(p.lang).to_string()),
        })
        .collect();

    let sections = catalog.categories().iter().enumerate().map(|(ci, cat)| {
        let title = cat.title(p.lang).to_string();
        let icon = cat.icon_url();
        html! {
            <section id={cat.anchor.clone()} class="category-section" key={cat.anchor.clone()}>
                <div class="category-header">
                    if !is_placeholder(icon) {
                        <img class="category-icon" src={icon.to_string()} alt={title.clone()} />
                    }
                    <h2>{ title.clone() }</h2>
                </div>
                <div class="products">
                    { for cat.rows.iter().enumerate().map(|(ri, row)| {
                        let on_open = (*touch).then(|| {
                            let open_item = open_item.clone();
                            Callback::from(move |()| open_item.set(Some((ci, ri))))
                        });
                        html! {
                            <ProductCard
                                name={row.name(p.lang).to_string()}
                                price={card_price(&row.price, &row.offer)}
                                {on_open}
                            />
                        }
                    }) }
                </div>
            </section>
        }
    });

    // Built from the row on every render so a language switch updates an open sheet.
    let sheet = (*open_item).and_then(|(ci, ri)| {
        let row = catalog.categories().get(ci)?.rows.get(ri)?;
        Some(ProductSheet::from_row(row, p.lang))
    });
    let close_sheet = {
        let open_item = open_item.clone();
        Callback::from(move |()| open_item.set(None))
    };

    html! {
        <>
            <MenuTabs {tabs} active={(*active).clone().map(AttrValue::from)} {on_select} />
            <div class="menu-content" ref={content_ref}>
                { for sections }
            </div>
            if let Some(sheet) = sheet {
                <NutritionSheet {sheet} on_close={close_sheet} />
            }
        </>
    }
}
