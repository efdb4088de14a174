use crate::config::{MAX_NORMALIZED_SCORE, VIEW_FUTURE, VIEW_PAST};
use crate::core::input::PRIMARY_LANES;
use crate::game::judgment::MAX_NOTE_POINTS;
use crate::game::note::PlayableNote;
use crate::game::song::DanceTrack;

/// The working note list of the selected chart plus the engine's cursors into
/// it. Rebuilt wholesale whenever a difficulty is selected.
#[derive(Clone, Debug, Default)]
pub struct NoteField {
    /// Sorted ascending by end time.
    notes: Vec<PlayableNote>,
    /// First note the timeout sweep has not yet finalized. Only moves forward.
    cursor: usize,
    /// Per primary lane, the note last pressed in that lane (for hold release).
    active_notes: [Option<usize>; PRIMARY_LANES],
    score_factor: f64,
}

impl NoteField {
    pub fn from_track(track: &DanceTrack) -> Self {
        let mut notes: Vec<PlayableNote> =
            track.notes.iter().copied().map(PlayableNote::new).collect();
        // Stable, so notes ending together keep authoring order.
        notes.sort_by(|a, b| a.note.end.total_cmp(&b.note.end));
        let score_factor = if notes.is_empty() {
            1.0
        } else {
            MAX_NORMALIZED_SCORE / (MAX_NOTE_POINTS * notes.len() as f64)
        };
        Self {
            notes,
            cursor: 0,
            active_notes: [None; PRIMARY_LANES],
            score_factor,
        }
    }

    pub fn empty() -> Self {
        Self {
            score_factor: 1.0,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[PlayableNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlayableNote> {
        self.notes.get(index)
    }

    pub(crate) fn note_mut(&mut self, index: usize) -> &mut PlayableNote {
        &mut self.notes[index]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor += 1;
    }

    pub fn score_factor(&self) -> f64 {
        self.score_factor
    }

    pub fn active_note(&self, lane: usize) -> Option<usize> {
        self.active_notes.get(lane).copied().flatten()
    }

    pub(crate) fn set_active_note(&mut self, lane: usize, index: usize) {
        if let Some(slot) = self.active_notes.get_mut(lane) {
            *slot = Some(index);
        }
    }

    /// Indices from the cursor onwards whose begin time is at most `limit`.
    /// The list is ordered by end time, so the walk stops at the first note
    /// that begins later even if a longer hold further on began earlier.
    pub fn window_until(&self, limit: f64) -> impl Iterator<Item = usize> + '_ {
        (self.cursor..self.notes.len()).take_while(move |&i| self.notes[i].note.begin <= limit)
    }

    /// Notes inside the draw range around `time`.
    pub fn notes_in_view(&self, time: f64) -> impl Iterator<Item = (usize, &PlayableNote)> + '_ {
        self.notes.iter().enumerate().filter(move |(_, n)| {
            n.note.end - time >= VIEW_PAST && n.note.begin - time <= VIEW_FUTURE
        })
    }
}
