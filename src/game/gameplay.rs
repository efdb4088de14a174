use crate::config::Config;
use crate::core::clock::PlaybackClock;
use crate::core::input::{EventKind, InputEvent, InputSource, Lane, PRIMARY_LANES};
use crate::error::EngineError;
use crate::game::chart::NoteField;
use crate::game::events::GameEvent;
use crate::game::matcher;
use crate::game::note::PlayableNote;
use crate::game::selection::{ChartSelector, ModeDirection};
use crate::game::session::Session;
use crate::game::song::{Difficulty, Song};
use crate::game::timing;
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// One player's dance graph: the selected chart, its note field and the
/// session counters. Advanced only through [`update`] / [`tick`].
#[derive(Clone, Debug)]
pub struct State {
    selector: ChartSelector,
    session: Session,
    config: Config,
    pressed: [bool; PRIMARY_LANES],
    current_time: f64,
}

/// Read-only view of a [`State`] for the renderer.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<'a> {
    pub time: f64,
    pub mode: &'a str,
    pub lanes: usize,
    pub difficulty: Difficulty,
    pub difficulty_name: &'static str,
    pub selecting: bool,
    pub alive: bool,
    pub score: f64,
    pub normalized_score: f64,
    pub display_score: u32,
    pub streak: u32,
    pub longest_streak: u32,
    pub last_milestone: u32,
    pub pressed: [bool; PRIMARY_LANES],
    pub notes: &'a [PlayableNote],
}

pub fn init(song: Arc<Song>, config: Config) -> Result<State, EngineError> {
    info!(
        "Initializing dance graph for '{}' by {} (controller delay {:.3}s)",
        song.title, song.artist, config.controller_delay
    );
    let selector = ChartSelector::new(song)?;
    Ok(State {
        selector,
        session: Session::new(),
        config,
        pressed: [false; PRIMARY_LANES],
        current_time: 0.0,
    })
}

/// Runs one engine tick against the playback clock, compensating for the
/// configured controller delay.
pub fn update<C, I>(state: &mut State, clock: &C, input: &mut I) -> Vec<GameEvent>
where
    C: PlaybackClock + ?Sized,
    I: InputSource + ?Sized,
{
    let time = clock.position() - state.config.controller_delay;
    tick(state, time, input)
}

/// Runs one engine tick at an already-compensated `time`. Stale notes are
/// resolved before any input is looked at, so a press is always judged
/// against this tick's live window.
pub fn tick<I>(state: &mut State, time: f64, input: &mut I) -> Vec<GameEvent>
where
    I: InputSource + ?Sized,
{
    state.current_time = time;
    let mut events = Vec::new();

    // Notes gone by
    timing::sweep_timeouts(state.selector.field_mut(), &mut state.session, time, &mut events);

    // Holding a pad when a mine comes?
    timing::detect_mine_holds(
        state.selector.field_mut(),
        &mut state.session,
        &state.pressed,
        time,
        &mut events,
    );

    while let Some(event) = input.poll() {
        handle_event(state, event, time, &mut events);
    }

    if let Some(streak) = state.session.check_milestone() {
        events.push(GameEvent::StreakMilestone { streak });
    }
    events
}

fn handle_event(state: &mut State, event: InputEvent, time: f64, events: &mut Vec<GameEvent>) {
    // Joining and keeping alive count every pad, not just the primary four.
    let was_joined = state.session.joined();
    state.session.touch(time);
    if let (false, Some(joined)) = (was_joined, state.session.join_time) {
        events.push(GameEvent::Joined { time: joined });
    }

    let Some(lane) = Lane::from_index(event.lane) else {
        return;
    };

    if event.kind == EventKind::Press && state.session.in_selection_window(time) {
        match lane {
            Lane::Up => change_difficulty(state, 1, events),
            Lane::Down => change_difficulty(state, -1, events),
            Lane::Left => change_mode(state, ModeDirection::Prev, events),
            Lane::Right => change_mode(state, ModeDirection::Next, events),
        }
    }

    let index = lane.index();
    let field = state.selector.field_mut();
    match event.kind {
        EventKind::Release => {
            state.pressed[index] = false;
            matcher::handle_release(field, &mut state.session, index, time, events);
        }
        EventKind::Press => {
            state.pressed[index] = true;
            matcher::handle_press(field, &mut state.session, index, time, events);
        }
    }
}

fn change_difficulty(state: &mut State, delta: i32, events: &mut Vec<GameEvent>) {
    if state.selector.adjust_difficulty(delta) {
        events.push(GameEvent::DifficultyChanged {
            difficulty: state.selector.difficulty(),
        });
    }
}

fn change_mode(state: &mut State, direction: ModeDirection, events: &mut Vec<GameEvent>) {
    let charted = state.selector.select_mode(direction);
    events.push(GameEvent::ModeChanged {
        mode: state.selector.mode().to_string(),
        lanes: state.selector.lanes(),
    });
    if charted {
        events.push(GameEvent::DifficultyChanged {
            difficulty: state.selector.difficulty(),
        });
    }
}

impl State {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selector(&self) -> &ChartSelector {
        &self.selector
    }

    pub fn field(&self) -> &NoteField {
        self.selector.field()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Time of the most recent tick, after controller-delay compensation.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_pressed(&self, lane: Lane) -> bool {
        self.pressed[lane.index()]
    }

    pub fn dead(&self, time: f64) -> bool {
        self.session.dead(time)
    }

    pub fn in_selection_window(&self, time: f64) -> bool {
        self.session.in_selection_window(time)
    }

    /// Cumulative score scaled so a flawless clear reaches the same maximum
    /// on every difficulty.
    pub fn normalized_score(&self) -> f64 {
        self.session.score * self.selector.field().score_factor()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let normalized_score = self.normalized_score();
        let difficulty = self.selector.difficulty();
        Snapshot {
            time: self.current_time,
            mode: self.selector.mode(),
            lanes: self.selector.lanes(),
            difficulty,
            difficulty_name: difficulty.name(),
            selecting: self.in_selection_window(self.current_time),
            alive: !self.dead(self.current_time),
            score: self.session.score,
            normalized_score,
            display_score: normalized_score.max(0.0) as u32,
            streak: self.session.streak,
            longest_streak: self.session.longest_streak,
            last_milestone: self.session.big_streak,
            pressed: self.pressed,
            notes: self.selector.field().notes(),
        }
    }
}
