use crate::components::ui::gift_box::GiftBox;
use crate::components::ui::progress_bar::ProgressBar;
use crate::i18n::t;
use hut_core::mission::PROGRESS_SEGMENTS;
use hut_core::{MissionPhase, MissionView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: MissionView,
    /// A location check is running.
    #[prop_or_default]
    pub checking: bool,
    pub on_claim: Callback<()>,
}

/// Pure rendering of one mission snapshot; the page owns the clock and storage.
#[function_component(MissionCard)]
pub fn mission_card(p: &Props) -> Html {
    let view = &p.view;
    let complete = view.phase == MissionPhase::Complete;
    let onclick = {
        let cb = p.on_claim.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let disabled = !view.claim_enabled || p.checking;
    let label = if p.checking {
        t("mission.checking")
    } else {
        t(view.button_key)
    };

    html! {
        <section class={classes!("mission-card", complete.then_some("complete"))}
            data-step={view.step.to_string()}>
            <GiftBox shaking={view.gift_shaking} open={view.gift_open} />
            <h2 class="mission-title">{ t(view.title_key) }</h2>
            if complete {
                <p class="mission-subtitle">{ t("mission.final.subtitle") }</p>
            }
            <ProgressBar filled={view.progress} segments={PROGRESS_SEGMENTS} />
            <p class="mission-description">{ t(view.description_key) }</p>
            if let Some(countdown) = &view.countdown {
                <p class="mission-countdown" aria-live="polite">{ countdown.clone() }</p>
            }
            if !complete {
                <button class="mission-button" {disabled} {onclick}>{ label }</button>
            }
            if let Some(key) = view.message_key {
                <p class="mission-message" role="alert">{ t(key) }</p>
            }
        </section>
    }
}
