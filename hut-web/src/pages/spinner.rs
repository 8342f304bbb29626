use crate::app::FeedStatus;
use crate::components::ui::spinner_panel::{SpinnerAction, SpinnerDisplay, SpinnerPanel};
use crate::dom::{self, Timeout};
use crate::i18n::{t, use_translations};
use hut_core::constants::VIBRATE_MS;
use hut_core::{Animation, Lang, SpinnerGame, Transition};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub feed: FeedStatus,
}

fn display_of(game: &SpinnerGame) -> SpinnerDisplay {
    SpinnerDisplay {
        view: game.view().clone(),
        selected: game.selected().cloned(),
    }
}

fn apply(game: &mut SpinnerGame, action: &SpinnerAction) -> Option<Transition> {
    match action {
        SpinnerAction::SelectCategory(category) => Some(game.select_category(category)),
        SpinnerAction::Suggest {
            category,
            subcategory,
        } => Some(game.suggest(category, subcategory.as_deref())),
        SpinnerAction::Accept => game.accept(),
        SpinnerAction::Reset => Some(game.reset()),
    }
}

#[function_component(SpinnerPage)]
pub fn spinner_page(p: &Props) -> Html {
    let _rev = use_translations();
    let game = use_mut_ref(|| None::<SpinnerGame>);
    let display = use_state(SpinnerDisplay::default);
    let animating = use_state(|| None::<Animation>);
    let celebrate = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let game = game.clone();
        let display = display.clone();
        let pending = pending.clone();
        use_effect_with(p.feed.clone(), move |feed| {
            if let Some(snapshot) = feed.snapshot() {
                let seed = js_sys::Date::now().to_bits();
                let fresh = SpinnerGame::new(snapshot.spinner.clone(), seed);
                display.set(display_of(&fresh));
                game.borrow_mut().replace(fresh);
                pending.borrow_mut().take();
            }
        });
    }

    let on_action = {
        let game = game.clone();
        let display = display.clone();
        let animating = animating.clone();
        let celebrate = celebrate.clone();
        let pending = pending.clone();
        Callback::from(move |action: SpinnerAction| {
            // Ignore input while the previous transition is still playing.
            if animating.is_some() {
                return;
            }
            let (transition, next) = {
                let mut slot = game.borrow_mut();
                let Some(game) = slot.as_mut() else {
                    return;
                };
                let Some(transition) = apply(game, &action) else {
                    return;
                };
                (transition, display_of(game))
            };
            dom::vibrate(VIBRATE_MS);
            animating.set(Some(transition.animation));
            celebrate.set(false);

            let finish = {
                let display = display.clone();
                let animating = animating.clone();
                let celebrate = celebrate.clone();
                move || {
                    display.set(next);
                    animating.set(None);
                    celebrate.set(transition.confetti);
                }
            };
            let finish = Rc::new(RefCell::new(Some(finish)));
            let run = {
                let finish = Rc::clone(&finish);
                move || {
                    if let Some(finish) = finish.borrow_mut().take() {
                        finish();
                    }
                }
            };
            match Timeout::new(transition.duration_ms(), run) {
                Ok(timer) => {
                    pending.borrow_mut().replace(timer);
                }
                Err(err) => {
                    log::warn!("spinner timer failed: {}", dom::js_error_message(&err));
                    if let Some(finish) = finish.borrow_mut().take() {
                        finish();
                    }
                }
            }
        })
    };

    let body = match &p.feed {
        FeedStatus::Loading => Html::default(),
        FeedStatus::Failed(_) => html! {
            <p class="load-error" role="alert">{ t("spinner.load_error") }</p>
        },
        FeedStatus::Ready(_) => html! {
            <SpinnerPanel
                lang={p.lang}
                display={(*display).clone()}
                animating={*animating}
                celebrate={*celebrate}
                {on_action}
            />
        },
    };

    html! {
        <section class="spinner-page">{ body }</section>
    }
}
