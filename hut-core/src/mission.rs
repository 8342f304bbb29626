//! Geofenced, time-gated reward mission.
//!
//! The visitor checks in at the shop (step 0), then comes back after a delay
//! to claim two further rewards (steps 1 and 2). Step 3 is the finished state:
//! it counts down the final delay and then starts the mission over.
//!
//! All times are wall-clock milliseconds as reported by `Date.now()`, passed in
//! by the caller so the state machine can be driven by a simulated clock.
use crate::constants::{STEP_INDEX_KEY, STEP_START_KEY};
use crate::geo::{GeoPoint, Geofence, GeofenceStatus};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest step; reaching it finishes the mission.
pub const FINAL_STEP: u8 = 3;

/// Number of segments in the progress bar.
pub const PROGRESS_SEGMENTS: u8 = 3;

const DAY_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Wait between claims, in seconds.
    pub step_delay_secs: u64,
    /// How long the finished state lasts before the mission restarts.
    pub final_delay_secs: u64,
    pub center: GeoPoint,
    pub radius_km: f64,
    /// Length of the gift-box unlock animation.
    pub unlock_delay_ms: u32,
    /// Whether the first check-in also waits `step_delay_secs`.
    pub gate_first_step: bool,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            step_delay_secs: DAY_SECS,
            final_delay_secs: DAY_SECS,
            center: GeoPoint::new(30.088_650_123_143_79, 31.303_968_110_846_56),
            radius_km: 0.10,
            unlock_delay_ms: 1200,
            gate_first_step: false,
        }
    }
}

impl MissionConfig {
    #[must_use]
    pub const fn geofence(&self) -> Geofence {
        Geofence::new(self.center, self.radius_km)
    }

    /// Seconds that must pass since `start` before `step` can be claimed
    /// (or, for the final step, before the mission resets).
    #[must_use]
    pub const fn delay_for(&self, step: u8) -> u64 {
        match step {
            0 if !self.gate_first_step => 0,
            FINAL_STEP => self.final_delay_secs,
            _ => self.step_delay_secs,
        }
    }
}

/// Persisted progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionState {
    pub step: u8,
    pub start_ms: f64,
}

impl MissionState {
    #[must_use]
    pub const fn fresh(now_ms: f64) -> Self {
        Self {
            step: 0,
            start_ms: now_ms,
        }
    }

    /// Parse the stored `stepIndex`/`stepStart` pair.
    fn parse(step: &str, start: &str) -> Option<Self> {
        let step = parse_step(step)?;
        let start_ms = start.trim().parse::<f64>().ok()?;
        start_ms.is_finite().then_some(Self { step, start_ms })
    }
}

fn parse_step(step: &str) -> Option<u8> {
    step.trim()
        .parse::<u8>()
        .ok()
        .filter(|step| *step <= FINAL_STEP)
}

/// How a stored state was turned into a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreKind {
    Loaded,
    /// Nothing stored yet.
    Fresh,
    /// Stored values were unusable and were replaced with a fresh state.
    Repaired,
    /// The step was kept but its start time was missing and now counts from the load.
    Restarted,
}

impl RestoreKind {
    /// Whether the restored state must be written back.
    #[must_use]
    pub const fn needs_persist(self) -> bool {
        !matches!(self, Self::Loaded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Step 0, claimable right away.
    CheckIn,
    /// A gated step still counting down.
    Waiting,
    /// A gated step whose delay has passed.
    Ready,
    /// Position confirmed, gift box animation running.
    Unlocking,
    /// Mission finished, counting down to the restart.
    Complete,
}

/// Everything the mission page renders for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionView {
    pub step: u8,
    pub phase: MissionPhase,
    pub remaining_secs: u64,
    /// `HH : MM : SS` while something is counting down.
    pub countdown: Option<String>,
    pub claim_enabled: bool,
    /// Filled progress bar segments.
    pub progress: u8,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub button_key: &'static str,
    /// Message left behind by the last rejected claim.
    pub message_key: Option<&'static str>,
    pub gift_shaking: bool,
    pub gift_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Inside the fence; call `complete_unlock` after `delay_ms`.
    Unlocking { delay_ms: u32 },
    Rejected(GeofenceStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionTick {
    Idle,
    Countdown(u64),
    /// A gated step just became claimable.
    BecameReady,
    /// The final countdown ran out and the mission restarted.
    Reset,
}

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("step {step} is not claimable for another {remaining_secs}s")]
    NotReady { step: u8, remaining_secs: u64 },
    #[error("mission already complete")]
    Complete,
    #[error("a claim is already in progress")]
    ClaimInProgress,
    #[error("no claim is waiting for a location result")]
    NoPendingClaim,
    #[error("no unlock is in progress")]
    NotUnlocking,
    #[error("mission storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Locating,
    Unlocking,
}

/// In-memory mission state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionGame {
    config: MissionConfig,
    state: MissionState,
    pending: Pending,
    last_rejection: Option<GeofenceStatus>,
    was_ready: bool,
}

impl MissionGame {
    #[must_use]
    pub const fn new(config: MissionConfig, state: MissionState) -> Self {
        Self {
            config,
            state,
            pending: Pending::None,
            last_rejection: None,
            was_ready: false,
        }
    }

    /// Rebuild from raw stored values.
    #[must_use]
    pub fn restore(
        config: MissionConfig,
        step: Option<&str>,
        start: Option<&str>,
        now_ms: f64,
    ) -> (Self, RestoreKind) {
        let (state, kind) = match (step, start) {
            (None, None) => (MissionState::fresh(now_ms), RestoreKind::Fresh),
            (Some(step), Some(start)) => MissionState::parse(step, start).map_or_else(
                || (MissionState::fresh(now_ms), RestoreKind::Repaired),
                |state| (state, RestoreKind::Loaded),
            ),
            (Some(step), None) => parse_step(step).map_or_else(
                || (MissionState::fresh(now_ms), RestoreKind::Repaired),
                |step| (MissionState { step, start_ms: now_ms }, RestoreKind::Restarted),
            ),
            (None, Some(_)) => (MissionState::fresh(now_ms), RestoreKind::Repaired),
        };
        if kind == RestoreKind::Repaired {
            log::warn!("mission state in storage was unusable; starting over");
        }
        let mut game = Self::new(config, state);
        game.was_ready = game.remaining_secs(now_ms) == 0;
        (game, kind)
    }

    #[must_use]
    pub const fn state(&self) -> MissionState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Whole seconds since the current step started. Clock skew into the
    /// past counts as zero.
    #[must_use]
    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        let elapsed = (now_ms - self.state.start_ms) / 1000.0;
        if elapsed.is_finite() && elapsed > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let secs = elapsed.floor() as u64;
            secs
        } else {
            0
        }
    }

    #[must_use]
    pub fn remaining_secs(&self, now_ms: f64) -> u64 {
        self.config
            .delay_for(self.state.step)
            .saturating_sub(self.elapsed_secs(now_ms))
    }

    #[must_use]
    pub fn can_claim(&self, now_ms: f64) -> bool {
        self.state.step < FINAL_STEP
            && self.pending == Pending::None
            && self.remaining_secs(now_ms) == 0
    }

    #[must_use]
    pub fn view(&self, now_ms: f64) -> MissionView {
        let step = self.state.step;
        let remaining_secs = self.remaining_secs(now_ms);
        let gated = self.config.delay_for(step) > 0;
        let phase = if self.pending == Pending::Unlocking {
            MissionPhase::Unlocking
        } else if step >= FINAL_STEP {
            MissionPhase::Complete
        } else if remaining_secs > 0 {
            MissionPhase::Waiting
        } else if step == 0 && !gated {
            MissionPhase::CheckIn
        } else {
            MissionPhase::Ready
        };
        let description_key = match (phase, step) {
            (MissionPhase::Complete, _) => "mission.final.description",
            (MissionPhase::Waiting, _) => "mission.steps.desc_waiting",
            (_, 0) => "mission.steps.desc_step0",
            (_, 1) => "mission.steps.desc_step1_ready",
            _ => "mission.steps.desc_step2_ready",
        };
        let title_key = match step {
            0 => "mission.steps.title_step0",
            1 => "mission.steps.title_step1",
            2 => "mission.steps.title_step2",
            _ => "mission.final.title",
        };
        MissionView {
            step,
            phase,
            remaining_secs,
            countdown: (remaining_secs > 0).then(|| format_countdown(remaining_secs)),
            claim_enabled: self.can_claim(now_ms),
            progress: step.min(PROGRESS_SEGMENTS),
            title_key,
            description_key,
            button_key: if step < 2 {
                "mission.steps.button_next"
            } else {
                "mission.steps.button_claim"
            },
            message_key: self.last_rejection.and_then(GeofenceStatus::message_key),
            gift_shaking: phase == MissionPhase::Ready,
            gift_open: phase == MissionPhase::Unlocking,
        }
    }

    /// Start a claim; the caller then queries the location.
    ///
    /// # Errors
    ///
    /// Fails when the step is still counting down, the mission is complete,
    /// or another claim is in flight.
    pub fn begin_claim(&mut self, now_ms: f64) -> Result<(), MissionError> {
        if self.state.step >= FINAL_STEP {
            return Err(MissionError::Complete);
        }
        if self.pending != Pending::None {
            return Err(MissionError::ClaimInProgress);
        }
        let remaining_secs = self.remaining_secs(now_ms);
        if remaining_secs > 0 {
            return Err(MissionError::NotReady {
                step: self.state.step,
                remaining_secs,
            });
        }
        self.pending = Pending::Locating;
        self.last_rejection = None;
        Ok(())
    }

    /// Feed the geofence classification of the claim's location query.
    ///
    /// # Errors
    ///
    /// Fails when no claim was started.
    pub fn resolve_claim(&mut self, status: GeofenceStatus) -> Result<ClaimOutcome, MissionError> {
        if self.pending != Pending::Locating {
            return Err(MissionError::NoPendingClaim);
        }
        if status.is_inside() {
            self.pending = Pending::Unlocking;
            Ok(ClaimOutcome::Unlocking {
                delay_ms: self.config.unlock_delay_ms,
            })
        } else {
            log::info!("mission claim rejected: {status:?}");
            self.pending = Pending::None;
            self.last_rejection = Some(status);
            Ok(ClaimOutcome::Rejected(status))
        }
    }

    /// Finish the unlock animation: advance one step and restart the clock.
    ///
    /// # Errors
    ///
    /// Fails when no unlock is running.
    pub fn complete_unlock(&mut self, now_ms: f64) -> Result<MissionState, MissionError> {
        if self.pending != Pending::Unlocking {
            return Err(MissionError::NotUnlocking);
        }
        self.pending = Pending::None;
        self.state = MissionState {
            step: (self.state.step + 1).min(FINAL_STEP),
            start_ms: now_ms,
        };
        self.was_ready = self.remaining_secs(now_ms) == 0;
        log::info!("mission advanced to step {}", self.state.step);
        Ok(self.state)
    }

    /// Drive countdowns; called once a second by the page.
    pub fn tick(&mut self, now_ms: f64) -> MissionTick {
        let remaining = self.remaining_secs(now_ms);
        if self.state.step >= FINAL_STEP {
            if remaining == 0 {
                self.reset(now_ms);
                return MissionTick::Reset;
            }
            return MissionTick::Countdown(remaining);
        }
        if remaining > 0 {
            self.was_ready = false;
            return MissionTick::Countdown(remaining);
        }
        if self.was_ready {
            MissionTick::Idle
        } else {
            self.was_ready = true;
            MissionTick::BecameReady
        }
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.state = MissionState::fresh(now_ms);
        self.pending = Pending::None;
        self.last_rejection = None;
        self.was_ready = self.remaining_secs(now_ms) == 0;
        log::info!("mission reset");
    }
}

/// A [`MissionGame`] bound to the store it persists into.
#[derive(Debug)]
pub struct MissionSession<S: KeyValueStore> {
    game: MissionGame,
    store: S,
}

impl<S: KeyValueStore> MissionSession<S> {
    /// Load progress from `store`, writing back fresh or repaired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn load(config: MissionConfig, store: S, now_ms: f64) -> Result<(Self, RestoreKind), MissionError> {
        let step = store.get(STEP_INDEX_KEY).map_err(storage_error)?;
        let start = store.get(STEP_START_KEY).map_err(storage_error)?;
        let (game, kind) = MissionGame::restore(config, step.as_deref(), start.as_deref(), now_ms);
        let session = Self { game, store };
        if kind.needs_persist() {
            session.persist()?;
        }
        Ok((session, kind))
    }

    #[must_use]
    pub const fn game(&self) -> &MissionGame {
        &self.game
    }

    #[must_use]
    pub fn view(&self, now_ms: f64) -> MissionView {
        self.game.view(now_ms)
    }

    /// # Errors
    ///
    /// See [`MissionGame::begin_claim`].
    pub fn begin_claim(&mut self, now_ms: f64) -> Result<(), MissionError> {
        self.game.begin_claim(now_ms)
    }

    /// # Errors
    ///
    /// See [`MissionGame::resolve_claim`].
    pub fn resolve_claim(&mut self, status: GeofenceStatus) -> Result<ClaimOutcome, MissionError> {
        self.game.resolve_claim(status)
    }

    /// Advance and persist.
    ///
    /// # Errors
    ///
    /// Fails when no unlock is running or the store rejects the write.
    pub fn complete_unlock(&mut self, now_ms: f64) -> Result<MissionState, MissionError> {
        let state = self.game.complete_unlock(now_ms)?;
        self.persist()?;
        Ok(state)
    }

    /// Tick and persist a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if a restart cannot be persisted.
    pub fn tick(&mut self, now_ms: f64) -> Result<MissionTick, MissionError> {
        let tick = self.game.tick(now_ms);
        if tick == MissionTick::Reset {
            self.persist()?;
        }
        Ok(tick)
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn reset(&mut self, now_ms: f64) -> Result<(), MissionError> {
        self.game.reset(now_ms);
        self.persist()
    }

    fn persist(&self) -> Result<(), MissionError> {
        let state = self.game.state();
        self.store
            .set(STEP_INDEX_KEY, &state.step.to_string())
            .map_err(storage_error)?;
        self.store
            .set(STEP_START_KEY, &state.start_ms.to_string())
            .map_err(storage_error)
    }
}

fn storage_error(err: impl std::error::Error) -> MissionError {
    MissionError::Storage(err.to_string())
}

/// Format seconds as `HH : MM : SS`.
#[must_use]
pub fn format_countdown(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02} : {minutes:02} : {seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const T0: f64 = 1_700_000_000_000.0;
    const DAY_MS: f64 = 86_400_000.0;

    fn at_step(step: u8) -> MissionGame {
        MissionGame::new(MissionConfig::default(), MissionState { step, start_ms: T0 })
    }

    #[test]
    fn countdown_format_is_zero_padded() {
        assert_eq!(format_countdown(0), "00 : 00 : 00");
        assert_eq!(format_countdown(3661), "01 : 01 : 01");
        assert_eq!(format_countdown(86_399), "23 : 59 : 59");
    }

    #[test]
    fn step_one_enables_exactly_at_threshold() {
        let game = at_step(1);
        let view = game.view(T0 + DAY_MS - 1000.0);
        assert!(!view.claim_enabled);
        assert_eq!(view.phase, MissionPhase::Waiting);
        assert_eq!(view.countdown.as_deref(), Some("00 : 00 : 01"));

        let view = game.view(T0 + DAY_MS);
        assert!(view.claim_enabled);
        assert_eq!(view.phase, MissionPhase::Ready);
        assert!(view.gift_shaking);
        assert_eq!(view.countdown, None);
    }

    #[test]
    fn first_check_in_is_not_gated_by_default() {
        let game = at_step(0);
        let view = game.view(T0);
        assert!(view.claim_enabled);
        assert_eq!(view.phase, MissionPhase::CheckIn);

        let gated = MissionGame::new(
            MissionConfig {
                gate_first_step: true,
                ..MissionConfig::default()
            },
            MissionState::fresh(T0),
        );
        assert!(!gated.view(T0).claim_enabled);
    }

    #[test]
    fn only_inside_advances() {
        for status in [
            GeofenceStatus::Far,
            GeofenceStatus::PermissionDenied,
            GeofenceStatus::NoSupport,
        ] {
            let mut game = at_step(1);
            let now = T0 + DAY_MS;
            game.begin_claim(now).unwrap();
            assert_eq!(game.resolve_claim(status).unwrap(), ClaimOutcome::Rejected(status));
            let view = game.view(now);
            assert_eq!(view.step, 1);
            assert!(view.claim_enabled);
            assert_eq!(view.message_key, status.message_key());
        }

        let mut game = at_step(1);
        let now = T0 + DAY_MS + 5000.0;
        game.begin_claim(now).unwrap();
        assert!(!game.view(now).claim_enabled);
        assert_eq!(
            game.resolve_claim(GeofenceStatus::Inside).unwrap(),
            ClaimOutcome::Unlocking { delay_ms: 1200 }
        );
        assert!(game.view(now).gift_open);
        let state = game.complete_unlock(now + 1200.0).unwrap();
        assert_eq!(state.step, 2);
        assert!((state.start_ms - (now + 1200.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn early_claims_are_rejected() {
        let mut game = at_step(2);
        let err = game.begin_claim(T0 + 1000.0).unwrap_err();
        assert!(matches!(err, MissionError::NotReady { step: 2, .. }));
        assert!(matches!(at_step(3).begin_claim(T0), Err(MissionError::Complete)));
        assert!(matches!(
            at_step(1).resolve_claim(GeofenceStatus::Inside),
            Err(MissionError::NoPendingClaim)
        ));
    }

    #[test]
    fn final_step_counts_down_then_resets() {
        let mut game = at_step(3);
        assert_eq!(game.view(T0).phase, MissionPhase::Complete);
        assert_eq!(game.tick(T0 + 1000.0), MissionTick::Countdown(86_399));
        assert_eq!(game.tick(T0 + DAY_MS), MissionTick::Reset);
        assert_eq!(game.state(), MissionState::fresh(T0 + DAY_MS));
    }

    #[test]
    fn tick_reports_ready_once() {
        let mut game = at_step(1);
        assert_eq!(game.tick(T0), MissionTick::Countdown(86_400));
        assert_eq!(game.tick(T0 + DAY_MS), MissionTick::BecameReady);
        assert_eq!(game.tick(T0 + DAY_MS + 1000.0), MissionTick::Idle);
    }

    #[test]
    fn restore_repairs_bad_values() {
        let config = MissionConfig::default();
        let (_, kind) = MissionGame::restore(config, None, None, T0);
        assert_eq!(kind, RestoreKind::Fresh);
        for (step, start) in [("7", "1"), ("x", "1"), ("1", "soon"), ("-1", "0")] {
            let (game, kind) = MissionGame::restore(config, Some(step), Some(start), T0);
            assert_eq!(kind, RestoreKind::Repaired, "{step}/{start}");
            assert_eq!(game.state(), MissionState::fresh(T0));
        }
        let (game, kind) = MissionGame::restore(config, Some("2"), Some("1699999999000"), T0);
        assert_eq!(kind, RestoreKind::Loaded);
        assert_eq!(game.state().step, 2);
    }

    #[test]
    fn missing_start_keeps_the_step_and_counts_from_now() {
        let config = MissionConfig::default();
        let (game, kind) = MissionGame::restore(config, Some("2"), None, T0);
        assert_eq!(kind, RestoreKind::Restarted);
        assert!(kind.needs_persist());
        assert_eq!(game.state(), MissionState { step: 2, start_ms: T0 });
        assert!(!game.can_claim(T0));

        let (game, kind) = MissionGame::restore(config, Some("9"), None, T0);
        assert_eq!(kind, RestoreKind::Repaired);
        assert_eq!(game.state(), MissionState::fresh(T0));
    }

    #[test]
    fn session_persists_advances_under_historical_keys() {
        let store = MemoryStore::new();
        let (mut session, kind) =
            MissionSession::load(MissionConfig::default(), store.clone(), T0).unwrap();
        assert_eq!(kind, RestoreKind::Fresh);
        assert_eq!(store.get("stepIndex").unwrap().as_deref(), Some("0"));
        assert_eq!(store.get("stepStart").unwrap().as_deref(), Some("1700000000000"));

        session.begin_claim(T0).unwrap();
        session.resolve_claim(GeofenceStatus::Inside).unwrap();
        session.complete_unlock(T0 + 1200.0).unwrap();
        assert_eq!(store.get("stepIndex").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("stepStart").unwrap().as_deref(), Some("1700000001200"));

        let (reloaded, kind) =
            MissionSession::load(MissionConfig::default(), store, T0 + 5000.0).unwrap();
        assert_eq!(kind, RestoreKind::Loaded);
        assert_eq!(reloaded.game().state().step, 1);
    }
}
