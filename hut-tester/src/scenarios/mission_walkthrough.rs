use crate::fixture::FeedFixture;
use anyhow::{Result, ensure};
use hut_core::constants::{STEP_INDEX_KEY, STEP_START_KEY};
use hut_core::mission::FINAL_STEP;
use hut_core::{
    ClaimOutcome, GeofenceStatus, MemoryStore, MissionConfig, MissionError, MissionSession,
    MissionTick, RestoreKind,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const REJECTIONS: [GeofenceStatus; 3] = [
    GeofenceStatus::Far,
    GeofenceStatus::PermissionDenied,
    GeofenceStatus::NoSupport,
];

#[allow(clippy::cast_precision_loss)]
fn secs_to_ms(secs: u64) -> f64 {
    secs as f64 * 1000.0
}

pub fn run(_fixture: &FeedFixture, seed: u64) -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let config = MissionConfig {
        step_delay_secs: 90,
        final_delay_secs: 300,
        ..MissionConfig::default()
    };
    let store = MemoryStore::new();
    let mut now = f64::from(rng.gen_range(1_000_000..2_000_000_u32)) * 1000.0;

    let (mut session, kind) = MissionSession::load(config, store.clone(), now)?;
    ensure!(kind == RestoreKind::Fresh, "empty store restored as {kind:?}");
    ensure!(session.game().state().step == 0, "fresh mission not on step 0");

    for step in 0..FINAL_STEP {
        let start = session.game().state().start_ms;
        let delay_ms = secs_to_ms(config.delay_for(step));
        if delay_ms > 0.0 {
            let early = start + delay_ms - 1000.0;
            ensure!(
                !session.view(early).claim_enabled,
                "step {step} claimable a second early"
            );
            ensure!(
                matches!(session.begin_claim(early), Err(MissionError::NotReady { .. })),
                "early claim on step {step} was accepted"
            );
        }
        now = start + delay_ms + f64::from(rng.gen_range(0..5_000_u32));

        for status in REJECTIONS {
            session.begin_claim(now)?;
            let outcome = session.resolve_claim(status)?;
            ensure!(
                outcome == ClaimOutcome::Rejected(status),
                "{status:?} on step {step} gave {outcome:?}"
            );
            ensure!(
                session.game().state().step == step,
                "{status:?} advanced step {step}"
            );
            ensure!(
                session.view(now).message_key == status.message_key(),
                "{status:?} surfaced the wrong message"
            );
        }

        session.begin_claim(now)?;
        let outcome = session.resolve_claim(GeofenceStatus::Inside)?;
        ensure!(
            matches!(outcome, ClaimOutcome::Unlocking { .. }),
            "inside claim on step {step} gave {outcome:?}"
        );
        now += f64::from(config.unlock_delay_ms);
        let state = session.complete_unlock(now)?;
        ensure!(state.step == step + 1, "step {step} advanced to {}", state.step);

        let stored = store.snapshot();
        ensure!(
            stored.get(STEP_INDEX_KEY) == Some(&state.step.to_string()),
            "stored step is {:?} after reaching {}",
            stored.get(STEP_INDEX_KEY),
            state.step
        );
        ensure!(
            stored.get(STEP_START_KEY) == Some(&now.to_string()),
            "stored start was not reset to the advance time"
        );
    }

    ensure!(
        matches!(session.begin_claim(now), Err(MissionError::Complete)),
        "finished mission accepted another claim"
    );
    let final_ms = secs_to_ms(config.final_delay_secs);
    let before_reset = now + final_ms - 1000.0;
    ensure!(
        matches!(session.tick(before_reset)?, MissionTick::Countdown(_)),
        "final countdown ended early"
    );
    now += final_ms;
    ensure!(
        session.tick(now)? == MissionTick::Reset,
        "mission did not restart after the final countdown"
    );
    ensure!(session.game().state().step == 0, "restart did not return to step 0");
    ensure!(
        store.snapshot().get(STEP_INDEX_KEY).map(String::as_str) == Some("0"),
        "restart was not persisted"
    );

    let (reloaded, kind) = MissionSession::load(config, store, now)?;
    ensure!(kind == RestoreKind::Loaded, "persisted state restored as {kind:?}");
    ensure!(
        reloaded.game().state() == session.game().state(),
        "reloaded state differs from the live one"
    );
    Ok(())
}
