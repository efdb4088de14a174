//! Timing, note-matching and scoring engine for dance-pad rhythm games.
//!
//! The host owns rendering, audio and device polling. Every frame it hands
//! the engine the playback position and the pad events that arrived since
//! the last frame; [`game::gameplay::update`] resolves notes, scores hits and
//! reports what changed as [`game::events::GameEvent`]s.

pub mod config;
pub mod core;
pub mod error;
pub mod game;

pub use crate::config::Config;
pub use crate::core::clock::{ManualClock, PlaybackClock};
pub use crate::core::input::{EventKind, InputEvent, InputSource, Lane, QueuedInput};
pub use crate::error::EngineError;
pub use crate::game::events::GameEvent;
pub use crate::game::gameplay::{Snapshot, State};
pub use crate::game::note::{Note, NoteType, PlayableNote, Resolution};
pub use crate::game::song::{Difficulty, Song};
