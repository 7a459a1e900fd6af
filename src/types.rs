use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Monotonic game time in milliseconds, supplied by the host loop.
pub type GameTime = u64;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Resolves a signal vector to a compass direction. Horizontal is
    /// right-positive, vertical is down-positive. Returns None for the
    /// zero vector; callers keep their previous direction in that case.
    pub fn from_axes(horizontal: i8, vertical: i8) -> Option<Self> {
        match (horizontal.signum(), vertical.signum()) {
            (1, -1) => Some(Self::NorthEast),
            (1, 1) => Some(Self::SouthEast),
            (-1, 1) => Some(Self::SouthWest),
            (-1, -1) => Some(Self::NorthWest),
            (0, -1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    RunningMan,
    TStepLeft,
    TStepRight,
}

/// One completed activation, as stored in the ability ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityRecord {
    pub ability: AbilityKind,
    pub timestamp: GameTime,
    pub direction: Direction,
}
