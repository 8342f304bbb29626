use crate::components::header::nav_links;
use crate::i18n::t;
use crate::router::Route;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub active: Route,
    pub on_close: Callback<()>,
}

/// Slide-in navigation. Closes on its close button or any click outside it.
#[function_component(SideMenu)]
pub fn side_menu(p: &Props) -> Html {
    let menu_ref = use_node_ref();

    {
        let menu_ref = menu_ref.clone();
        let on_close = p.on_close.clone();
        use_effect_with(p.open, move |open| {
            let listener = if *open {
                outside_click_listener(menu_ref, on_close)
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <aside ref={menu_ref} class={classes!("side-menu", p.open.then_some("open"))}
            aria-hidden={(!p.open).to_string()}>
            <button class="close-menu" onclick={close} aria-label={t("nav.close_menu")}>{"×"}</button>
            <nav class="side-nav">{ nav_links(&p.active) }</nav>
        </aside>
    }
}

/// Selector of the header button that opens the menu.
pub const TOGGLE_SELECTOR: &str = ".menu-toggle";

/// The click that opens the menu is still bubbling when the listener is
/// installed, so clicks on the toggle itself never count as outside.
fn is_toggle_click(target: Option<&web_sys::Node>) -> bool {
    let Some(target) = target else {
        return false;
    };
    let element = match target.dyn_ref::<web_sys::Element>() {
        Some(element) => Some(element.clone()),
        None => target.parent_element(),
    };
    element
        .and_then(|el| el.closest(TOGGLE_SELECTOR).ok().flatten())
        .is_some()
}

struct OutsideClick {
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for OutsideClick {
    fn drop(&mut self) {
        let _ = crate::dom::document().remove_event_listener_with_callback(
            "click",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

fn outside_click_listener(menu_ref: NodeRef, on_close: Callback<()>) -> Option<OutsideClick> {
    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = menu_ref
            .get()
            .is_some_and(|menu| menu.contains(target.as_ref()));
        if !inside && !is_toggle_click(target.as_ref()) {
            on_close.emit(());
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    match crate::dom::document()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        Ok(()) => Some(OutsideClick { closure }),
        Err(err) => {
            log::error!(
                "side menu listener failed: {}",
                crate::dom::js_error_message(&err)
            );
            None
        }
    }
}
