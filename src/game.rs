//! Frame driver
//!
//! Owns the simulation, the activate latch and the "is a frame scheduled"
//! bookkeeping. The host (browser `requestAnimationFrame`, or a headless loop)
//! asks for a frame whenever this returns a [`FrameToken`] and hands the token
//! back when the frame fires. Tokens from cancelled or superseded frames are
//! ignored, so a late callback can never tick stale state.

use crate::config::{ConfigError, SimConfig};
use crate::consts::{MAX_FRAME_DT, SIM_DT};
use crate::platform::input::{ActivateLatch, RawInput};
use crate::sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Identity of one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Token did not match the scheduled frame; nothing ran
    Stale,
    /// Still playing: schedule another frame with this token
    Continue(FrameToken),
    /// Loop is idle until the next activate
    Suspended,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    config: SimConfig,
    state: GameState,
    latch: ActivateLatch,
    scheduled: Option<FrameToken>,
    next_token: u64,
}

impl Game {
    /// Validate the config and set up a game on the title screen
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let state = GameState::new(seed, &config);
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            config,
            state,
            latch: ActivateLatch::default(),
            scheduled: None,
            next_token: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether a frame is currently scheduled
    pub fn is_running(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Record an activate. Returns a token when the loop was idle and the host
    /// must schedule a frame to consume it.
    pub fn activate(&mut self) -> Option<FrameToken> {
        self.latch.press();
        self.request_frame()
    }

    /// Feed a raw platform event; non-activate events are dropped
    pub fn handle_input(&mut self, input: &RawInput) -> Option<FrameToken> {
        if !self.latch.feed(input) {
            return None;
        }
        self.request_frame()
    }

    /// Run one frame for `token`, with the host-measured frame delta (seconds)
    pub fn frame(&mut self, token: FrameToken, frame_dt: f32) -> FrameStatus {
        if self.scheduled != Some(token) {
            log::debug!("Ignoring stale frame {:?}", token);
            return FrameStatus::Stale;
        }
        self.scheduled = None;

        let dt = if frame_dt > 0.0 {
            frame_dt.min(MAX_FRAME_DT)
        } else {
            SIM_DT
        };
        let input = TickInput {
            activate: self.latch.take(),
        };
        tick(&mut self.state, &input, &self.config, dt);

        if self.state.phase == GamePhase::Playing {
            FrameStatus::Continue(self.schedule())
        } else {
            FrameStatus::Suspended
        }
    }

    /// Cancel any scheduled frame; its token becomes stale
    pub fn stop(&mut self) {
        if let Some(token) = self.scheduled.take() {
            log::debug!("Cancelled frame {:?}", token);
        }
    }

    /// Owned copy of the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// New token unless a frame is already pending
    fn request_frame(&mut self) -> Option<FrameToken> {
        if self.scheduled.is_some() {
            return None;
        }
        Some(self.schedule())
    }

    fn schedule(&mut self) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.scheduled = Some(token);
        token
    }
}
