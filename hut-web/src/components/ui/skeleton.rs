use hut_core::constants::{SKELETON_PRODUCTS, SKELETON_SECTIONS, SKELETON_TABS};
use yew::prelude::*;

/// Placeholder menu shown while the feed downloads. The content pane is
/// rendered with `noscroll` until the real sections replace it.
#[function_component(MenuSkeleton)]
pub fn menu_skeleton() -> Html {
    html! {
        <div class="menu-skeleton" aria-busy="true">
            <div class="menu-tabs skeleton-tabs">
                { for (0..SKELETON_TABS).map(|_| html! { <span class="skeleton skeleton-tab"></span> }) }
            </div>
            <div class="menu-content noscroll">
                { for (0..SKELETON_SECTIONS).map(|_| html! {
                    <section class="skeleton-section">
                        <span class="skeleton skeleton-title"></span>
                        { for (0..SKELETON_PRODUCTS).map(|_| html! {
                            <div class="skeleton skeleton-card"></div>
                        }) }
                    </section>
                }) }
            </div>
        </div>
    }
}
