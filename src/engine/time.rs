//! Time control and difficulty settings for move selection.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default moves-to-go estimate used to split the clock
pub const DEFAULT_MOVES_TO_GO: u32 = 30;

/// Floor for any per-move budget
pub const MIN_MOVE_TIME: Duration = Duration::from_millis(100);

/// A player's clock settings.
///
/// `remaining` is what is left on the clock; `base_time` and `increment`
/// describe the control itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeControl {
    pub base_time: Duration,
    pub increment: Duration,
    pub remaining: Duration,
}

impl TimeControl {
    /// A fresh clock: `remaining` starts at `base_time`.
    #[must_use]
    pub fn new(base_time: Duration, increment: Duration) -> Self {
        TimeControl {
            base_time,
            increment,
            remaining: base_time,
        }
    }

    #[must_use]
    pub fn from_millis(base_ms: u64, increment_ms: u64) -> Self {
        TimeControl::new(
            Duration::from_millis(base_ms),
            Duration::from_millis(increment_ms),
        )
    }

    /// Budget for one move at `fullmove_number`:
    /// `(base + increment * (fullmove - 1)) / moves_to_go`, never below
    /// `floor`.
    #[must_use]
    pub fn move_budget(&self, fullmove_number: u32, moves_to_go: u32, floor: Duration) -> Duration {
        let played = fullmove_number.saturating_sub(1);
        let total = self
            .base_time
            .saturating_add(self.increment.saturating_mul(played));
        split_millis(total, moves_to_go).max(floor)
    }
}

/// `total / parts`, truncated to whole milliseconds.
#[must_use]
pub(crate) fn split_millis(total: Duration, parts: u32) -> Duration {
    let millis = total.as_millis() / u128::from(parts.max(1));
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}'")]
pub struct ParseDifficultyError(pub String);

/// Playing strength, mapped onto a maximum search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Beginner,
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
    Master,
    Grandmaster,
}

impl Difficulty {
    pub const ALL: [Difficulty; 7] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Master,
        Difficulty::Grandmaster,
    ];

    /// Maximum iterative-deepening depth for this level.
    #[must_use]
    pub const fn search_depth(self) -> u32 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
            Difficulty::Master => 10,
            Difficulty::Grandmaster => 12,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Master => "Master",
            Difficulty::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts a level name in any case or its index 0-6.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<usize>() {
            return Difficulty::ALL
                .get(idx)
                .copied()
                .ok_or_else(|| ParseDifficultyError(s.to_string()));
        }
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
