use crate::game::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Challenge,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Challenge,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[inline(always)]
    pub const fn level(self) -> usize {
        self as usize
    }

    pub fn from_level(level: i32) -> Option<Difficulty> {
        usize::try_from(level).ok().and_then(|l| Self::ALL.get(l).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Challenge => "Challenge",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of pads a mode key is played on, or `None` for keys we do not know.
pub fn lanes_for_mode(mode: &str) -> Option<usize> {
    match mode {
        "dance-single" => Some(4),
        "dance-double" | "dance-couple" => Some(8),
        "dance-solo" => Some(6),
        "pump-single" => Some(5),
        "pump-double" | "pump-couple" => Some(10),
        "ez2-single" => Some(5),
        "ez2-double" => Some(10),
        "ex2-real" => Some(7),
        "para-single" => Some(5),
        _ => None,
    }
}

/// The authored notes of one (mode, difficulty) chart, in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DanceTrack {
    pub notes: Vec<Note>,
}

impl DanceTrack {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

pub type DanceDifficulties = BTreeMap<Difficulty, DanceTrack>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Mode key -> authored charts. Iteration order is the catalog order the
    /// mode picker cycles through.
    pub dance_tracks: BTreeMap<String, DanceDifficulties>,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            dance_tracks: BTreeMap::new(),
        }
    }

    /// Builder-style helper for hosts that assemble catalogs in code.
    pub fn with_track(mut self, mode: &str, difficulty: Difficulty, notes: Vec<Note>) -> Self {
        self.dance_tracks
            .entry(mode.to_string())
            .or_default()
            .insert(difficulty, DanceTrack::new(notes));
        self
    }

    pub fn mode_keys(&self) -> Vec<String> {
        self.dance_tracks.keys().cloned().collect()
    }

    pub fn track(&self, mode: &str, difficulty: Difficulty) -> Option<&DanceTrack> {
        self.dance_tracks.get(mode)?.get(&difficulty)
    }

    pub fn has_track(&self, mode: &str, difficulty: Difficulty) -> bool {
        self.track(mode, difficulty).is_some()
    }
}
