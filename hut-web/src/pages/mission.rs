use crate::components::ui::mission_card::MissionCard;
use crate::dom::{self, Interval};
use crate::geo::check_proximity;
use crate::i18n::{t, use_translations};
use crate::storage::BrowserStore;
use hut_core::{
    ClaimOutcome, Lang, MissionConfig, MissionGame, MissionSession, MissionState, MissionTick,
    MissionView,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

type SharedSession = Rc<RefCell<Option<MissionSession<BrowserStore>>>>;

const TICK_MS: u32 = 1000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    #[prop_or_default]
    pub config: MissionConfig,
}

/// Placeholder shown before local progress has been read.
fn initial_view(config: &MissionConfig) -> MissionView {
    MissionGame::new(*config, MissionState::fresh(0.0)).view(0.0)
}

fn refresh(session: &SharedSession, view: &UseStateHandle<MissionView>) {
    if let Some(session) = session.borrow().as_ref() {
        view.set(session.view(dom::now_ms()));
    }
}

#[function_component(MissionPage)]
pub fn mission_page(p: &Props) -> Html {
    let _rev = use_translations();
    let session: SharedSession = use_mut_ref(|| None);
    let view = use_state(|| initial_view(&p.config));
    let checking = use_state(|| false);

    {
        let session = Rc::clone(&session);
        let view = view.clone();
        use_effect_with(p.config, move |config| {
            match MissionSession::load(*config, BrowserStore, dom::now_ms()) {
                Ok((loaded, kind)) => {
                    log::info!("mission progress {kind:?}: step {}", loaded.game().state().step);
                    session.borrow_mut().replace(loaded);
                }
                Err(err) => log::error!("could not load mission progress: {err}"),
            }
            refresh(&session, &view);

            let ticker = {
                let session = Rc::clone(&session);
                let view = view.clone();
                Interval::new(TICK_MS, move || {
                    let tick = session
                        .borrow_mut()
                        .as_mut()
                        .map(|s| s.tick(dom::now_ms()));
                    match tick {
                        Some(Ok(MissionTick::Idle)) | None => {}
                        Some(Ok(_)) => refresh(&session, &view),
                        Some(Err(err)) => log::error!("mission tick failed: {err}"),
                    }
                })
            };
            let ticker = ticker
                .map_err(|err| log::error!("mission timer failed: {}", dom::js_error_message(&err)))
                .ok();
            move || drop(ticker)
        });
    }

    let on_claim = {
        let session = Rc::clone(&session);
        let view = view.clone();
        let checking = checking.clone();
        let fence = p.config.geofence();
        Callback::from(move |()| {
            let started = session
                .borrow_mut()
                .as_mut()
                .map(|s| s.begin_claim(dom::now_ms()));
            match started {
                Some(Ok(())) => {}
                Some(Err(err)) => {
                    log::warn!("claim ignored: {err}");
                    return;
                }
                None => return,
            }
            checking.set(true);

            let session = Rc::clone(&session);
            let view = view.clone();
            let checking = checking.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let status = check_proximity(fence).await;
                checking.set(false);
                let outcome = session.borrow_mut().as_mut().map(|s| s.resolve_claim(status));
                refresh(&session, &view);
                let delay_ms = match outcome {
                    Some(Ok(ClaimOutcome::Unlocking { delay_ms })) => delay_ms,
                    Some(Ok(ClaimOutcome::Rejected(_))) | None => return,
                    Some(Err(err)) => {
                        log::error!("claim could not be resolved: {err}");
                        return;
                    }
                };
                if let Err(err) = dom::sleep_ms(delay_ms).await {
                    log::warn!("unlock timer failed: {}", dom::js_error_message(&err));
                }
                let advanced = session
                    .borrow_mut()
                    .as_mut()
                    .map(|s| s.complete_unlock(dom::now_ms()));
                if let Some(Err(err)) = advanced {
                    log::error!("mission step not saved: {err}");
                }
                refresh(&session, &view);
            });
        })
    };

    html! {
        <section class="mission-page">
            <h1 class="visually-hidden">{ t("mission.title") }</h1>
            <MissionCard view={(*view).clone()} checking={*checking} {on_claim} />
        </section>
    }
}
