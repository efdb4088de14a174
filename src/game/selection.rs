use crate::error::EngineError;
use crate::game::chart::NoteField;
use crate::game::song::{lanes_for_mode, Difficulty, Song};
use log::{debug, info};
use std::sync::Arc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeDirection {
    Prev,
    /// Back to the first mode of the catalog.
    Current,
    Next,
}

/// Track/mode and difficulty picker. Owns the materialized note field of
/// whatever is currently selected.
#[derive(Clone, Debug)]
pub struct ChartSelector {
    song: Arc<Song>,
    /// Mode keys in catalog order with their lane counts.
    modes: Vec<(String, usize)>,
    mode_index: usize,
    level: Difficulty,
    field: NoteField,
}

impl ChartSelector {
    /// Every mode key of the catalog is checked against the lane table here,
    /// so later mode changes cannot fail.
    pub fn new(song: Arc<Song>) -> Result<Self, EngineError> {
        let modes = song
            .mode_keys()
            .into_iter()
            .map(|mode| match lanes_for_mode(&mode) {
                Some(lanes) => Ok((mode, lanes)),
                None => Err(EngineError::UnknownMode(mode)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if modes.is_empty() {
            return Err(EngineError::NoTracksAvailable);
        }

        let mut selector = Self {
            song,
            modes,
            mode_index: 0,
            level: Difficulty::Beginner,
            field: NoteField::empty(),
        };
        selector.select_mode(ModeDirection::Current);
        Ok(selector)
    }

    pub fn song(&self) -> &Arc<Song> {
        &self.song
    }

    pub fn mode(&self) -> &str {
        &self.modes[self.mode_index].0
    }

    pub fn lanes(&self) -> usize {
        self.modes[self.mode_index].1
    }

    pub fn difficulty(&self) -> Difficulty {
        self.level
    }

    pub fn field(&self) -> &NoteField {
        &self.field
    }

    pub(crate) fn field_mut(&mut self) -> &mut NoteField {
        &mut self.field
    }

    /// Cycles the mode key with wraparound and re-materializes the chart for
    /// the new mode. Returns `false` when the new mode has no charts at all,
    /// in which case the field is left empty and the level is kept.
    pub fn select_mode(&mut self, direction: ModeDirection) -> bool {
        let count = self.modes.len();
        self.mode_index = match direction {
            ModeDirection::Current => 0,
            ModeDirection::Next => (self.mode_index + 1) % count,
            ModeDirection::Prev => (self.mode_index + count - 1) % count,
        };
        info!("Track mode set to '{}' ({} lanes)", self.mode(), self.lanes());

        // Current level, then anything above it, then anything below it.
        if self.adjust_difficulty(0) || self.adjust_difficulty(-1) {
            return true;
        }
        debug!("Mode '{}' has no charts", self.mode());
        self.field = NoteField::empty();
        false
    }

    /// Moves the level by `delta`, skipping levels the current mode lacks.
    /// Returns `false` (and changes nothing) when no level exists in that
    /// direction. A zero delta searches upwards from the current level.
    pub fn adjust_difficulty(&mut self, delta: i32) -> bool {
        let mut delta = delta;
        loop {
            let proposed = self.level.level() as i32 + delta;
            let Some(level) = Difficulty::from_level(proposed) else {
                return false; // Out of bounds
            };
            if self.song.has_track(self.mode(), level) {
                return self.select_difficulty(level);
            }
            delta += if delta < 0 { -1 } else { 1 };
        }
    }

    /// Builds a fresh note field for `level` in the current mode, discarding
    /// all per-note state. Returns `false` if that chart is not authored.
    pub fn select_difficulty(&mut self, level: Difficulty) -> bool {
        let Some(track) = self.song.track(self.mode(), level) else {
            debug!("No {} chart for mode '{}'", level, self.mode());
            return false;
        };
        self.field = NoteField::from_track(track);
        self.level = level;
        info!(
            "Difficulty set to {} ({} notes, score factor {:.3})",
            level,
            self.field.len(),
            self.field.score_factor()
        );
        true
    }
}
