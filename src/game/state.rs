//! Round phase and play-direction types.

/// Round phase.
///
/// Phases cycle `Lobby` → `Playing` → `RoundEnd` → `Lobby`; no other edges
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Players may join or leave; no round is live.
    Lobby,
    /// A round is in progress.
    Playing,
    /// A round has finished and awaits settlement.
    RoundEnd,
}

/// Direction in which turns advance around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending seat order.
    Clockwise,
    /// Descending seat order.
    CounterClockwise,
}

impl Direction {
    /// Returns the signed seat step for this direction.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}
