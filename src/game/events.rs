use crate::game::judgment::Rank;
use crate::game::song::Difficulty;
use serde::Serialize;

/// Resolution transitions and selection changes produced by one tick, in the
/// order they happened. Renderers drive their popups and glows from these.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GameEvent {
    Joined { time: f64 },
    ModeChanged { mode: String, lanes: usize },
    DifficultyChanged { difficulty: Difficulty },
    NoteHit { index: usize, lane: usize, score: f64, accuracy: f64, rank: Rank },
    NoteMissed { index: usize, lane: usize },
    /// A hit note's score was added to the total as it left the window.
    NoteFinalized { index: usize, score: f64 },
    HoldFailed { index: usize, lane: usize, time: f64 },
    /// `held` is true when the pad was already down as the mine arrived.
    MineTriggered { index: usize, lane: usize, held: bool },
    MineAvoided { index: usize, lane: usize },
    StreakMilestone { streak: u32 },
}
