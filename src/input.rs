use strum_macros::{Display, EnumIter, EnumString};

use crate::config::AbilityDurations;
use crate::types::{AbilityKind, AbilityRecord, Direction, GameTime};

/// Host-side directional controls, already mapped from whatever physical
/// bindings the frontend uses.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum DirectionSignal {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MoveMode {
    Moving,
    Stopped,
}

/// The single ability allowed to run at a time. Direction is latched at
/// activation and does not follow later signal changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveAbility {
    pub kind: AbilityKind,
    pub started_at: GameTime,
    pub direction: Direction,
}

/// Collapses raw direction signals into an 8-way facing, tracks the
/// movement mode toggle, and arbitrates time-boxed ability activations.
#[derive(Debug, Clone)]
pub struct InputAggregator {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    mode: MoveMode,
    last_direction: Direction,
    active: Option<ActiveAbility>,
    durations: AbilityDurations,
}

impl InputAggregator {
    pub fn new(durations: AbilityDurations) -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            mode: MoveMode::Moving,
            last_direction: Direction::South,
            active: None,
            durations,
        }
    }

    pub fn set_signal(&mut self, signal: DirectionSignal, pressed: bool) {
        match signal {
            DirectionSignal::Up => self.up = pressed,
            DirectionSignal::Down => self.down = pressed,
            DirectionSignal::Left => self.left = pressed,
            DirectionSignal::Right => self.right = pressed,
        }
        if let Some(dir) = Direction::from_axes(self.horizontal(), self.vertical()) {
            self.last_direction = dir;
        }
    }

    /// Drops all four signals, e.g. when the host window loses focus and
    /// key-up events will never arrive. The latched direction survives.
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    /// Right-positive signal sum.
    pub fn horizontal(&self) -> i8 {
        i8::from(self.right) - i8::from(self.left)
    }

    /// Down-positive signal sum.
    pub fn vertical(&self) -> i8 {
        i8::from(self.down) - i8::from(self.up)
    }

    /// Current facing. Falls back to the last non-zero direction when no
    /// signal is held (initial facing is South).
    pub fn direction(&self) -> Direction {
        self.last_direction
    }

    pub fn is_moving(&self) -> bool {
        self.mode == MoveMode::Moving && (self.horizontal() != 0 || self.vertical() != 0)
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) -> MoveMode {
        self.mode = match self.mode {
            MoveMode::Moving => MoveMode::Stopped,
            MoveMode::Stopped => MoveMode::Moving,
        };
        self.mode
    }

    pub fn active_ability(&self) -> Option<&ActiveAbility> {
        self.active.as_ref()
    }

    /// Attempts to start an ability at `now`. Refused while another ability
    /// is still running or while no direction signal is held; refusals are
    /// quiet no-ops. On success returns the record to append to the ledger.
    pub fn try_activate(&mut self, kind: AbilityKind, now: GameTime) -> Option<AbilityRecord> {
        self.expire_if_due(now);

        if let Some(active) = &self.active {
            tracing::debug!(
                "ability {} rejected: {} still active until {}",
                kind,
                active.kind,
                active.started_at + self.durations.duration_of(active.kind)
            );
            return None;
        }
        if self.horizontal() == 0 && self.vertical() == 0 {
            tracing::debug!("ability {} rejected: no direction held", kind);
            return None;
        }

        let direction = self.last_direction;
        self.active = Some(ActiveAbility {
            kind,
            started_at: now,
            direction,
        });
        Some(AbilityRecord {
            ability: kind,
            timestamp: now,
            direction,
        })
    }

    /// Advances ability expiry. There is no cancel path; only time ends an
    /// activation.
    pub fn tick(&mut self, now: GameTime) {
        self.expire_if_due(now);
    }

    fn expire_if_due(&mut self, now: GameTime) {
        if let Some(active) = &self.active {
            let duration = self.durations.duration_of(active.kind);
            if now.saturating_sub(active.started_at) >= duration {
                self.active = None;
            }
        }
    }
}
