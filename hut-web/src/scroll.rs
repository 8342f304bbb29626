//! DOM side of the menu scroll spy.
//!
//! Owns the `IntersectionObserver`, the passive gesture listeners on the
//! content pane and the settle timer of the last programmatic scroll. All
//! decisions are delegated to [`ScrollReconciler`].
use crate::dom::{self, Timeout};
use hut_core::scroll::{observer_root_margin, scroll_target_y};
use hut_core::{ScrollBehavior, ScrollReconciler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};
use yew::Callback;

pub const SECTION_SELECTOR: &str = ".category-section";
pub const TABS_SELECTOR: &str = ".menu-tabs";
const GESTURE_EVENTS: [&str; 2] = ["wheel", "touchstart"];

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn tabs_height() -> Option<f64> {
    dom::query(TABS_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
}

/// Center the tab of `anchor` inside the horizontal tab strip.
pub fn scroll_tab_into_view(anchor: &str) {
    let Some(tab) = dom::query(&format!(".tab-btn[data-cat=\"{anchor}\"]")) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Auto);
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_inline(ScrollLogicalPosition::Center);
    tab.scroll_into_view_with_scroll_into_view_options(&options);
}

pub struct ScrollSpy {
    container: HtmlElement,
    reconciler: Rc<RefCell<ScrollReconciler>>,
    on_active: Callback<String>,
    observer: IntersectionObserver,
    _observer_callback: ObserverCallback,
    gesture_callback: Closure<dyn FnMut(Event)>,
    settle: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollSpy {
    /// Start watching the sections inside `container`.
    ///
    /// # Errors
    /// Returns an error if the observer or the listeners cannot be installed.
    pub fn attach(
        container: HtmlElement,
        reconciler: Rc<RefCell<ScrollReconciler>>,
        on_active: Callback<String>,
    ) -> Result<Self, JsValue> {
        let observer_callback: ObserverCallback = {
            let reconciler = Rc::clone(&reconciler);
            let on_active = on_active.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _observer| {
                let visible: Vec<String> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter(IntersectionObserverEntry::is_intersecting)
                    .map(|entry| entry.target().id())
                    .collect();
                let changed = reconciler
                    .borrow_mut()
                    .on_visible(visible.iter().map(String::as_str));
                if let Some(active) = changed {
                    scroll_tab_into_view(&active);
                    on_active.emit(active);
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        js_sys::Reflect::set(&init, &JsValue::from_str("root"), &container)?;
        init.set_root_margin(&observer_root_margin(tabs_height()));
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer = IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &init,
        )?;

        let sections = container.query_selector_all(SECTION_SELECTOR)?;
        for idx in 0..sections.length() {
            if let Some(section) = sections.get(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&section);
            }
        }

        let gesture_callback = {
            let reconciler = Rc::clone(&reconciler);
            Closure::wrap(Box::new(move |_event: Event| {
                reconciler.borrow_mut().on_user_gesture();
            }) as Box<dyn FnMut(Event)>)
        };
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        for event in GESTURE_EVENTS {
            container.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                gesture_callback.as_ref().unchecked_ref(),
                &passive,
            )?;
        }

        Ok(Self {
            container,
            reconciler,
            on_active,
            observer,
            _observer_callback: observer_callback,
            gesture_callback,
            settle: Rc::new(RefCell::new(None)),
        })
    }

    /// Handle a tab click: pin the tab, scroll, and lift suppression once settled.
    pub fn scroll_to(&self, anchor: &str, touch: bool) {
        let command = self.reconciler.borrow_mut().on_tab_click(anchor, touch);
        scroll_tab_into_view(anchor);
        self.on_active.emit(command.target.clone());

        if let Some(section) = dom::html_element_by_id(&command.target) {
            let options = ScrollToOptions::new();
            options.set_top(scroll_target_y(
                f64::from(section.offset_top()),
                tabs_height(),
            ));
            options.set_behavior(match command.behavior {
                ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
                ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            });
            self.container.scroll_to_with_scroll_to_options(&options);
        } else {
            log::warn!("no section for tab `{anchor}`");
        }

        let reconciler = Rc::clone(&self.reconciler);
        let generation = command.generation;
        let timer = Timeout::new(command.settle_ms, move || {
            reconciler.borrow_mut().on_settle(generation);
        });
        match timer {
            Ok(timer) => {
                self.settle.borrow_mut().replace(timer);
            }
            Err(err) => {
                log::error!("settle timer failed: {}", dom::js_error_message(&err));
                self.reconciler.borrow_mut().on_settle(generation);
            }
        }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.observer.disconnect();
        for event in GESTURE_EVENTS {
            let _ = self.container.remove_event_listener_with_callback(
                event,
                self.gesture_callback.as_ref().unchecked_ref(),
            );
        }
    }
}
