//! Menu tab / scroll-spy reconciliation.
//!
//! Clicking a tab scrolls the content programmatically; while that scroll is
//! in flight the intersection observer would otherwise keep re-activating the
//! sections it passes. The reconciler owns the active tab and a suppression
//! flag that is lifted by a settle timer or by any manual gesture.

/// Fallback height of the sticky tab strip when it is not in the DOM.
pub const DEFAULT_TABS_HEIGHT: f64 = 50.0;
/// Extra gap left above a section after scrolling to it.
pub const SCROLL_GAP: f64 = 20.0;
/// Extra top inset of the observer root beyond the tab strip.
pub const OBSERVER_INSET: f64 = 5.0;
pub const TOUCH_SETTLE_MS: u32 = 300;
pub const SMOOTH_SETTLE_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

impl ScrollBehavior {
    #[must_use]
    pub const fn settle_ms(self) -> u32 {
        match self {
            Self::Instant => TOUCH_SETTLE_MS,
            Self::Smooth => SMOOTH_SETTLE_MS,
        }
    }
}

/// A programmatic scroll the page must perform, then report back with
/// [`ScrollReconciler::on_settle`] after `settle_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCommand {
    pub target: String,
    pub behavior: ScrollBehavior,
    pub settle_ms: u32,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollReconciler {
    active: Option<String>,
    programmatic: bool,
    generation: u64,
}

impl ScrollReconciler {
    #[must_use]
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            active: initial.map(str::to_string),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub const fn is_programmatic(&self) -> bool {
        self.programmatic
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the active tab after the tab list was rebuilt.
    pub fn reset(&mut self, initial: Option<&str>) {
        self.active = initial.map(str::to_string);
        self.programmatic = false;
        self.generation += 1;
    }

    pub fn on_tab_click(&mut self, category: &str, touch: bool) -> ScrollCommand {
        let behavior = if touch {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };
        self.generation += 1;
        self.programmatic = true;
        self.active = Some(category.to_string());
        ScrollCommand {
            target: category.to_string(),
            behavior,
            settle_ms: behavior.settle_ms(),
            generation: self.generation,
        }
    }

    /// Settle timer fired. Stale timers from superseded clicks are ignored.
    pub fn on_settle(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.programmatic {
            self.programmatic = false;
            true
        } else {
            false
        }
    }

    /// Wheel or touchstart on the content pane.
    pub fn on_user_gesture(&mut self) {
        self.programmatic = false;
    }

    /// Observer callback with the ids of intersecting sections in entry
    /// order. Returns the newly active id when it changed.
    pub fn on_visible<'a, I>(&mut self, visible: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.programmatic {
            return None;
        }
        let last = visible.into_iter().last()?;
        if self.active.as_deref() == Some(last) {
            return None;
        }
        self.active = Some(last.to_string());
        self.active.clone()
    }
}

fn tabs_or_default(tabs_height: Option<f64>) -> f64 {
    tabs_height.unwrap_or(DEFAULT_TABS_HEIGHT)
}

/// Scroll offset that puts a section just below the sticky tabs.
#[must_use]
pub fn scroll_target_y(section_top: f64, tabs_height: Option<f64>) -> f64 {
    section_top - tabs_or_default(tabs_height) - SCROLL_GAP
}

/// `rootMargin` for the section observer: only the band just under the tabs counts.
#[must_use]
pub fn observer_root_margin(tabs_height: Option<f64>) -> String {
    let top = tabs_or_default(tabs_height) + OBSERVER_INSET;
    format!("-{top}px 0px -85% 0px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_and_pointer_clicks_differ() {
        let mut spy = ScrollReconciler::new(Some("drinks"));
        let cmd = spy.on_tab_click("snacks", true);
        assert_eq!(cmd.behavior, ScrollBehavior::Instant);
        assert_eq!(cmd.settle_ms, 300);
        let cmd = spy.on_tab_click("desserts", false);
        assert_eq!(cmd.behavior, ScrollBehavior::Smooth);
        assert_eq!(cmd.settle_ms, 800);
        assert_eq!(spy.active(), Some("desserts"));
    }

    #[test]
    fn spy_is_suppressed_until_settle() {
        let mut spy = ScrollReconciler::new(Some("drinks"));
        let cmd = spy.on_tab_click("desserts", false);
        assert_eq!(spy.on_visible(["drinks", "snacks"]), None);
        assert_eq!(spy.active(), Some("desserts"));
        assert!(spy.on_settle(cmd.generation));
        assert_eq!(spy.on_visible(["snacks"]), Some("snacks".to_string()));
        assert_eq!(spy.on_visible(["snacks"]), None);
    }

    #[test]
    fn stale_settle_does_not_unlock_newer_click() {
        let mut spy = ScrollReconciler::new(None);
        let first = spy.on_tab_click("a", false);
        let second = spy.on_tab_click("b", false);
        assert!(!spy.on_settle(first.generation));
        assert!(spy.is_programmatic());
        assert!(spy.on_settle(second.generation));
    }

    #[test]
    fn manual_gesture_lifts_suppression() {
        let mut spy = ScrollReconciler::new(Some("a"));
        spy.on_tab_click("c", true);
        spy.on_user_gesture();
        assert_eq!(spy.on_visible(["a", "b"]), Some("b".to_string()));
        assert_eq!(spy.on_visible(std::iter::empty()), None);
    }

    #[test]
    fn geometry_uses_default_tab_height() {
        assert!((scroll_target_y(500.0, None) - 430.0).abs() < f64::EPSILON);
        assert!((scroll_target_y(500.0, Some(64.0)) - 416.0).abs() < f64::EPSILON);
        assert_eq!(observer_root_margin(None), "-55px 0px -85% 0px");
        assert_eq!(observer_root_margin(Some(48.5)), "-53.5px 0px -85% 0px");
    }
}
