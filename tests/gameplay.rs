use dancegraph::game::gameplay::{self, State};
use dancegraph::game::judgment::{MINE_PENALTY, Rank};
use dancegraph::{
    Config, Difficulty, EngineError, GameEvent, InputEvent, ManualClock, Note, QueuedInput,
    Resolution, Song,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn single_note_song() -> Song {
    Song::new("One Note", "Tester").with_track(
        "dance-single",
        Difficulty::Medium,
        vec![Note::tap(2.0, 1)],
    )
}

fn start(song: Song) -> State {
    gameplay::init(Arc::new(song), Config::default()).expect("song has tracks")
}

fn tick(state: &mut State, time: f64, events: &[InputEvent]) -> Vec<GameEvent> {
    let mut input = QueuedInput::new();
    input.extend(events.iter().copied());
    let out = gameplay::tick(state, time, &mut input);
    assert!(input.is_empty(), "tick drains every pending event");
    out
}

/// Joins well before the music so later presses are gameplay-only.
fn join_early(state: &mut State) {
    tick(state, -10.0, &[InputEvent::release(0)]);
    assert!(!state.in_selection_window(0.0));
}

#[test]
fn empty_catalog_fails_construction() {
    let err = gameplay::init(Arc::new(Song::new("none", "none")), Config::default()).unwrap_err();
    assert_eq!(err, EngineError::NoTracksAvailable);
}

#[test]
fn hit_then_payout_after_window() {
    let mut state = start(single_note_song());
    join_early(&mut state);

    let events = tick(&mut state, 2.05, &[InputEvent::press(1)]);
    let GameEvent::NoteHit { index, lane, score, accuracy, rank } = events[0].clone() else {
        panic!("expected a hit, got {:?}", events);
    };
    assert_eq!((index, lane, score), (0, 1, 30.0));
    assert!((accuracy - 0.6667).abs() < 1e-3);
    assert_eq!(rank, Rank::Good);
    assert_eq!(state.session().streak, 1);
    // Points are only banked once the note leaves the window.
    assert_eq!(state.session().score, 0.0);

    let events = tick(&mut state, 2.20, &[]);
    assert_eq!(events, vec![GameEvent::NoteFinalized { index: 0, score: 30.0 }]);
    assert_eq!(state.session().score, 30.0);

    let events = tick(&mut state, 2.20, &[]);
    assert!(events.is_empty());
    assert_eq!(state.session().score, 30.0);
}

#[test]
fn untouched_note_is_missed() {
    let mut state = start(single_note_song());
    join_early(&mut state);

    assert!(tick(&mut state, 2.14, &[]).is_empty());
    let events = tick(&mut state, 2.16, &[]);
    assert_eq!(events, vec![GameEvent::NoteMissed { index: 0, lane: 1 }]);
    assert_eq!(state.field().notes()[0].resolution, Resolution::Missed);
    assert_eq!(state.session().streak, 0);
    assert_eq!(state.session().score, 0.0);
}

#[test]
fn late_press_after_timeout_cannot_resolve_again() {
    let mut state = start(single_note_song());
    join_early(&mut state);
    tick(&mut state, 2.16, &[]);
    let events = tick(&mut state, 2.16, &[InputEvent::press(1)]);
    assert!(events.is_empty());
    assert_eq!(state.field().notes()[0].resolution, Resolution::Missed);
}

#[test]
fn held_lane_sets_off_mine_once() {
    let song = Song::new("Mines", "Tester").with_track(
        "dance-single",
        Difficulty::Easy,
        vec![Note::tap(4.0, 0), Note::mine(5.0, 2)],
    );
    let mut state = start(song);
    join_early(&mut state);
    tick(&mut state, 4.0, &[InputEvent::press(0)]);
    assert_eq!(state.session().streak, 1);

    // Pad goes down just before the mine's window opens.
    tick(&mut state, 4.8, &[InputEvent::press(2)]);
    assert_eq!(state.session().score, 50.0);

    let mut triggered = Vec::new();
    let mut time = 4.8;
    while time <= 5.1 {
        triggered.extend(
            tick(&mut state, time, &[])
                .into_iter()
                .filter(|e| matches!(e, GameEvent::MineTriggered { .. })),
        );
        time += 0.01;
    }
    tick(&mut state, 5.1, &[InputEvent::release(2)]);

    assert_eq!(triggered, vec![GameEvent::MineTriggered { index: 1, lane: 2, held: true }]);
    assert_eq!(state.session().score, 50.0 - MINE_PENALTY);
    assert_eq!(state.session().streak, 0);
    assert_eq!(state.session().longest_streak, 1);

    // The triggered mine is not charged again when it scrolls away.
    tick(&mut state, 6.0, &[]);
    assert_eq!(state.session().score, 50.0 - MINE_PENALTY);
}

#[test]
fn pressing_onto_mine_costs_the_same() {
    let song = Song::new("Mines", "Tester").with_track(
        "dance-single",
        Difficulty::Easy,
        vec![Note::mine(5.0, 2)],
    );
    let mut state = start(song);
    join_early(&mut state);
    let events = tick(&mut state, 4.9, &[InputEvent::press(2)]);
    assert_eq!(events, vec![GameEvent::MineTriggered { index: 0, lane: 2, held: false }]);
    tick(&mut state, 5.0, &[]);
    tick(&mut state, 5.1, &[InputEvent::release(2)]);
    tick(&mut state, 6.0, &[]);
    assert_eq!(state.session().score, -MINE_PENALTY);
}

#[test]
fn hold_released_early_scores_nothing() {
    let song = Song::new("Holds", "Tester").with_track(
        "dance-single",
        Difficulty::Hard,
        vec![Note::hold(1.0, 3.0, 3), Note::hold(4.0, 5.0, 3)],
    );
    let mut state = start(song);
    join_early(&mut state);

    tick(&mut state, 1.0, &[InputEvent::press(3)]);
    assert!(state.field().notes()[0].is_held());
    let events = tick(&mut state, 2.0, &[InputEvent::release(3)]);
    assert_eq!(events, vec![GameEvent::HoldFailed { index: 0, lane: 3, time: 2.0 }]);
    assert!(!state.field().notes()[0].is_held());

    tick(&mut state, 4.01, &[InputEvent::press(3)]);
    tick(&mut state, 5.0, &[InputEvent::release(3)]);
    tick(&mut state, 5.5, &[]);

    let notes = state.field().notes();
    assert_eq!(notes[0].score, 0.0);
    assert_eq!(notes[0].release_time, Some(2.0));
    assert_eq!(notes[1].score, 50.0);
    assert_eq!(notes[1].release_time, Some(5.5));
    assert_eq!(state.session().score, 50.0);
    assert_eq!(state.session().streak, 1);
    assert_eq!(state.session().longest_streak, 1);
}

#[test]
fn streak_milestones_fire_every_ten() {
    let notes: Vec<Note> = (0..25).map(|i| Note::tap(1.0 + i as f64 * 0.5, i % 4)).collect();
    let song =
        Song::new("Stream", "Tester").with_track("dance-single", Difficulty::Easy, notes.clone());
    let mut state = start(song);
    join_early(&mut state);

    let mut milestones = Vec::new();
    for note in &notes {
        for event in tick(&mut state, note.begin, &[InputEvent::press(note.lane)]) {
            if let GameEvent::StreakMilestone { streak } = event {
                milestones.push(streak);
            }
        }
    }
    assert_eq!(milestones, vec![10, 20]);
    assert_eq!(state.session().big_streak, 20);

    tick(&mut state, 20.0, &[]);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.score, 25.0 * 50.0);
    assert_eq!(snapshot.display_score, 10000);
    assert_eq!(snapshot.longest_streak, 25);
}

#[test]
fn join_window_drives_pickers() {
    let song = Song::new("Picker", "Tester")
        .with_track("dance-single", Difficulty::Beginner, vec![Note::tap(30.0, 0)])
        .with_track(
            "dance-single",
            Difficulty::Medium,
            vec![Note::tap(30.0, 1), Note::tap(31.0, 2)],
        )
        .with_track("dance-solo", Difficulty::Hard, vec![]);
    let mut state = start(song);
    assert_eq!(state.selector().mode(), "dance-single");
    assert_eq!(state.selector().difficulty(), Difficulty::Beginner);
    assert!(state.dead(0.0));

    let events = tick(&mut state, 10.0, &[InputEvent::press(2), InputEvent::release(2)]);
    assert_eq!(
        events,
        vec![
            GameEvent::Joined { time: 10.0 },
            GameEvent::DifficultyChanged { difficulty: Difficulty::Medium },
        ]
    );
    assert!(!state.dead(10.0));
    assert_eq!(state.field().len(), 2);

    let events = tick(&mut state, 11.0, &[InputEvent::press(3)]);
    assert_eq!(
        events,
        vec![
            GameEvent::ModeChanged { mode: "dance-solo".to_string(), lanes: 6 },
            GameEvent::DifficultyChanged { difficulty: Difficulty::Hard },
        ]
    );
    assert_eq!(state.snapshot().lanes, 6);
    assert!(state.field().is_empty());

    // Window closes five seconds after joining; arrows are gameplay again.
    tick(&mut state, 15.0, &[InputEvent::release(3), InputEvent::press(0)]);
    assert_eq!(state.selector().mode(), "dance-solo");
    assert!(!state.in_selection_window(15.0));
    assert!(state.dead(35.5));
}

#[test]
fn extra_pads_only_keep_player_alive() {
    let song = Song::new("Double", "Tester").with_track(
        "dance-double",
        Difficulty::Easy,
        vec![Note::tap(2.0, 6)],
    );
    let mut state = start(song);
    let events = tick(&mut state, 2.0, &[InputEvent::press(6)]);
    assert_eq!(events, vec![GameEvent::Joined { time: 2.0 }]);
    assert!(!state.dead(2.0));
    assert!(state.field().notes()[0].is_unresolved());
}

#[test]
fn controller_delay_shifts_the_clock() {
    let config = Config { controller_delay: 0.1 };
    let mut state = gameplay::init(Arc::new(single_note_song()), config).unwrap();
    let clock = ManualClock::new(2.1);
    let mut input = QueuedInput::new();
    input.push(InputEvent::release(0));
    gameplay::update(&mut state, &ManualClock::new(-10.0), &mut input);

    input.push(InputEvent::press(1));
    let events = gameplay::update(&mut state, &clock, &mut input);
    assert!((state.current_time() - 2.0).abs() < 1e-9);
    let GameEvent::NoteHit { score, .. } = events[0] else {
        panic!("expected a hit, got {:?}", events);
    };
    assert_eq!(score, 50.0);
}

#[test]
fn identical_streams_replay_identically() {
    let notes: Vec<Note> = vec![
        Note::tap(1.0, 0),
        Note::hold(1.5, 2.5, 1),
        Note::mine(2.0, 3),
        Note::tap(2.0, 2),
        Note::tap(3.0, 0),
    ];
    let script: Vec<(f64, Vec<InputEvent>)> = vec![
        (-1.0, vec![InputEvent::release(0)]),
        (1.02, vec![InputEvent::press(0), InputEvent::release(0)]),
        (1.55, vec![InputEvent::press(1)]),
        (1.96, vec![InputEvent::press(3), InputEvent::press(2)]),
        (2.1, vec![InputEvent::release(3), InputEvent::release(2)]),
        (2.3, vec![InputEvent::release(1)]),
        (4.0, vec![]),
    ];

    let run = || {
        let song = Song::new("Replay", "Tester").with_track(
            "dance-single",
            Difficulty::Easy,
            notes.clone(),
        );
        let mut state = start(song);
        let events: Vec<GameEvent> = script
            .iter()
            .flat_map(|(time, batch)| tick(&mut state, *time, batch))
            .collect();
        (events, state.session().clone())
    };
    assert_eq!(run(), run());
}
