use crate::fixture::FeedFixture;
use anyhow::{Result, ensure};
use hut_core::ScrollReconciler;
use hut_core::scroll::{SMOOTH_SETTLE_MS, TOUCH_SETTLE_MS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const EVENTS_PER_RUN: usize = 64;

/// Replay a random mix of tab clicks, settle timers, gestures and observer
/// callbacks and check the spy stays out of the way of programmatic scrolls.
pub fn run(fixture: &FeedFixture, seed: u64) -> Result<()> {
    let anchors = fixture.snapshot.catalog.anchors();
    ensure!(!anchors.is_empty(), "feed has no sections to scroll");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut spy = ScrollReconciler::new(fixture.snapshot.catalog.default_active());
    let mut last_generation: Option<u64> = None;

    for event in 0..EVENTS_PER_RUN {
        match rng.gen_range(0..4) {
            0 => {
                let target = anchors[rng.gen_range(0..anchors.len())];
                let touch = rng.gen_bool(0.5);
                let command = spy.on_tab_click(target, touch);
                let settle = if touch { TOUCH_SETTLE_MS } else { SMOOTH_SETTLE_MS };
                ensure!(spy.active() == Some(target), "event {event}: click did not pin `{target}`");
                ensure!(spy.is_programmatic(), "event {event}: click did not suppress the spy");
                ensure!(command.settle_ms == settle, "event {event}: wrong settle time");
                if let Some(previous) = last_generation {
                    ensure!(command.generation > previous, "event {event}: generation went backwards");
                }
                last_generation = Some(command.generation);
            }
            1 => {
                let Some(current) = last_generation else {
                    continue;
                };
                let stale = rng.gen_bool(0.3);
                let generation = if stale { current - 1 } else { current };
                let was_programmatic = spy.is_programmatic();
                let lifted = spy.on_settle(generation);
                if stale {
                    ensure!(!lifted, "event {event}: stale timer lifted suppression");
                    ensure!(
                        spy.is_programmatic() == was_programmatic,
                        "event {event}: stale timer changed state"
                    );
                } else {
                    ensure!(lifted == was_programmatic, "event {event}: settle result mismatch");
                    ensure!(!spy.is_programmatic(), "event {event}: settle left suppression on");
                }
            }
            2 => {
                spy.on_user_gesture();
                ensure!(!spy.is_programmatic(), "event {event}: gesture did not release the spy");
            }
            _ => {
                let count = rng.gen_range(0..=anchors.len().min(3));
                let visible: Vec<&str> = (0..count)
                    .map(|_| anchors[rng.gen_range(0..anchors.len())])
                    .collect();
                let before = spy.active().map(str::to_string);
                let programmatic = spy.is_programmatic();
                let changed = spy.on_visible(visible.iter().copied());

                if programmatic {
                    ensure!(changed.is_none(), "event {event}: spy moved during a programmatic scroll");
                    ensure!(
                        spy.active() == before.as_deref(),
                        "event {event}: active tab changed during a programmatic scroll"
                    );
                } else if let Some(&last) = visible.last() {
                    ensure!(spy.active() == Some(last), "event {event}: spy ignored `{last}`");
                    ensure!(
                        changed.is_some() == (before.as_deref() != Some(last)),
                        "event {event}: change report mismatch"
                    );
                } else {
                    ensure!(changed.is_none(), "event {event}: empty callback changed the tab");
                }
            }
        }
    }
    Ok(())
}
