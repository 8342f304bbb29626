use crate::i18n::t;
use hut_core::spinner::{TOP_LEVEL, sub_options};
use hut_core::{Animation, Lang, Localized, SpinnerView};
use yew::prelude::*;

/// What the panel currently shows. Kept apart from the game so the page can
/// hold the old content on screen while a transition runs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SpinnerDisplay {
    pub view: SpinnerView,
    pub selected: Option<Localized>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpinnerAction {
    SelectCategory(String),
    Suggest {
        category: String,
        subcategory: Option<String>,
    },
    Accept,
    Reset,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub display: SpinnerDisplay,
    #[prop_or_default]
    pub animating: Option<Animation>,
    #[prop_or_default]
    pub celebrate: bool,
    pub on_action: Callback<SpinnerAction>,
}

fn action_button(class: &'static str, label: String, action: SpinnerAction, cb: &Callback<SpinnerAction>) -> Html {
    let cb = cb.clone();
    let onclick = Callback::from(move |_: MouseEvent| cb.emit(action.clone()));
    html! { <button class={classes!("spinner-btn", class)} {onclick}>{ label }</button> }
}

#[function_component(SpinnerPanel)]
pub fn spinner_panel(p: &Props) -> Html {
    let cb = &p.on_action;
    let start_over = || action_button("start-over", t("spinner.start_over"), SpinnerAction::Reset, cb);
    let selected = p
        .display
        .selected
        .as_ref()
        .map(|item| item.get(p.lang).to_string())
        .unwrap_or_default();

    let body = match &p.display.view {
        SpinnerView::Initial => html! {
            <div class="spinner-options">
                { for TOP_LEVEL.iter().map(|cat| action_button(
                    "category",
                    t(&format!("spinner.{cat}")),
                    SpinnerAction::SelectCategory((*cat).to_string()),
                    cb,
                )) }
            </div>
        },
        SpinnerView::SubOptions { category } => html! {
            <>
                <div class="spinner-options">
                    { for sub_options(category).iter().map(|sub| action_button(
                        "subcategory",
                        t(&format!("spinner.sub.{category}.{sub}")),
                        SpinnerAction::Suggest {
                            category: category.clone(),
                            subcategory: Some((*sub).to_string()),
                        },
                        cb,
                    )) }
                </div>
                { start_over() }
            </>
        },
        SpinnerView::Suggestion { category, subcategory } => html! {
            <>
                <p class="spinner-result">{ selected }</p>
                <div class="spinner-options">
                    { action_button(
                        "spin-again",
                        t("spinner.spin_again"),
                        SpinnerAction::Suggest {
                            category: category.clone(),
                            subcategory: subcategory.clone(),
                        },
                        cb,
                    ) }
                    { action_button("accept", t("spinner.accept"), SpinnerAction::Accept, cb) }
                </div>
                { start_over() }
            </>
        },
        SpinnerView::Empty { .. } => html! {
            <>
                <p class="spinner-empty">{ t("spinner.empty") }</p>
                { start_over() }
            </>
        },
        SpinnerView::Accepted => html! {
            <>
                <p class="spinner-result accepted">{ selected }</p>
                <p class="spinner-cheer">{ t("spinner.lets_go") }</p>
                { start_over() }
            </>
        },
    };

    let class = classes!(
        "spinner-card",
        match p.animating {
            Some(Animation::Spin) => Some("spinning"),
            Some(Animation::Fade) => Some("fading"),
            None => None,
        },
        p.celebrate.then_some("celebrate")
    );
    html! {
        <section {class} aria-live="polite">
            <h2 class="spinner-title">{ t("spinner.title") }</h2>
            { body }
        </section>
    }
}
