use crate::components::ui::product_card::price_view;
use crate::dom;
use crate::i18n::t;
use hut_core::price::CURRENCY_SUFFIX;
use hut_core::{PriceDisplay, ProductSheet};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sheet: ProductSheet,
    pub on_close: Callback<()>,
}

/// Bottom sheet with price, ingredients and nutrition of one product.
///
/// Page scrolling is locked while the sheet is mounted.
#[function_component(NutritionSheet)]
pub fn nutrition_sheet(p: &Props) -> Html {
    use_effect_with((), |()| {
        dom::set_body_scroll_locked(true);
        || dom::set_body_scroll_locked(false)
    });

    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let sheet = &p.sheet;
    let currency = (!matches!(sheet.price, PriceDisplay::Hidden))
        .then(|| html! { <span class="currency">{ CURRENCY_SUFFIX }</span> });

    html! {
        <div class="sheet-overlay open" onclick={close.clone()}>
            <section class="bottom-sheet" role="dialog" aria-modal="true"
                aria-label={sheet.name.clone()} onclick={keep_open}>
                <button class="sheet-close" onclick={close} aria-label={t("sheet.close")}>{"×"}</button>
                <header class="sheet-header">
                    <h2 class="sheet-title">{ sheet.name.clone() }</h2>
                    <div class="sheet-price">{ price_view(&sheet.price) }{ currency }</div>
                </header>
                if let Some(ingredients) = &sheet.ingredients {
                    <div class="sheet-ingredients">
                        <h3>{ t("sheet.ingredients") }</h3>
                        <p>{ ingredients.clone() }</p>
                    </div>
                }
                <div class="sheet-nutrition">
                    <h3>{ t("sheet.nutrition") }</h3>
                    <dl class="nutrition-grid">
                        { for sheet.nutrition.iter().map(|line| html! {
                            <div class="nutrition-item">
                                <dt>{ t(line.nutrient.label_key()) }</dt>
                                <dd>{ line.value.clone() }</dd>
                            </div>
                        }) }
                    </dl>
                </div>
            </section>
        </div>
    }
}
