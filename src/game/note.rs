use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Regular,
    Mine,
}

/// An authored note. `end == begin` for a tap, `end > begin` for a hold.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub begin: f64,
    pub end: f64,
    pub lane: usize,
    pub note_type: NoteType,
}

impl Note {
    pub const fn tap(time: f64, lane: usize) -> Self {
        Self { begin: time, end: time, lane, note_type: NoteType::Regular }
    }

    pub const fn hold(begin: f64, end: f64, lane: usize) -> Self {
        Self { begin, end, lane, note_type: NoteType::Regular }
    }

    pub const fn mine(time: f64, lane: usize) -> Self {
        Self { begin: time, end: time, lane, note_type: NoteType::Mine }
    }

    #[inline(always)]
    pub fn is_mine(&self) -> bool {
        self.note_type == NoteType::Mine
    }

    #[inline(always)]
    pub fn is_hold(&self) -> bool {
        self.end > self.begin
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Resolution {
    #[default]
    Unresolved,
    Hit,
    Missed,
}

/// A note plus everything the engine learned about it during this session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayableNote {
    pub note: Note,
    pub resolution: Resolution,
    /// When the controlling pad was let go; `None` while still held.
    pub release_time: Option<f64>,
    pub score: f64,
    /// 1.0 for a dead-on hit, falling to 0.0 at the edge of the window.
    pub accuracy: f64,
}

impl PlayableNote {
    pub fn new(note: Note) -> Self {
        Self {
            note,
            resolution: Resolution::Unresolved,
            release_time: None,
            score: 0.0,
            accuracy: 0.0,
        }
    }

    #[inline(always)]
    pub fn is_hit(&self) -> bool {
        self.resolution == Resolution::Hit
    }

    #[inline(always)]
    pub fn is_unresolved(&self) -> bool {
        self.resolution == Resolution::Unresolved
    }

    /// A hold that was hit and whose pad has not been released yet.
    pub fn is_held(&self) -> bool {
        self.is_hit() && self.release_time.is_none() && self.note.is_hold()
    }
}
