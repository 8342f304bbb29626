use crate::dom;
use crate::i18n::t;
use hut_core::constants::COPIED_FLASH_MS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Text placed on the clipboard.
    pub text: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CopyState {
    Idle,
    Copied,
    Failed,
}

/// Button that copies its text and flashes a `copied` state.
#[function_component(CopyButton)]
pub fn copy_button(p: &Props) -> Html {
    let state = use_state(|| CopyState::Idle);

    let onclick = {
        let state = state.clone();
        let text = p.text.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            copy(text.clone(), state.clone());
        })
    };

    let class = classes!(
        "copy-button",
        (*state == CopyState::Copied).then_some("copied")
    );
    html! {
        <div class="copy-wrapper">
            <button {class} onclick={onclick} title={t("copy.hint")}>
                if let Some(label) = &p.label {
                    <span class="copy-label">{ label.clone() }</span>
                }
                <span class="text-to-copy">{ p.text.clone() }</span>
                <span class="copy-status">
                    { if *state == CopyState::Copied { t("copy.copied") } else { t("copy.hint") } }
                </span>
            </button>
            if *state == CopyState::Failed {
                <p class="copy-error" role="alert">{ t("copy.failed") }</p>
            }
        </div>
    }
}

fn copy(text: AttrValue, state: UseStateHandle<CopyState>) {
    wasm_bindgen_futures::spawn_local(async move {
        match dom::copy_to_clipboard(&text).await {
            Ok(()) => {
                state.set(CopyState::Copied);
                let _ = dom::sleep_ms(COPIED_FLASH_MS).await;
                state.set(CopyState::Idle);
            }
            Err(err) => {
                log::error!("copy failed: {}", dom::js_error_message(&err));
                state.set(CopyState::Failed);
            }
        }
    });
}
