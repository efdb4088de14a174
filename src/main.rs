use dancegraph::config::{self, CONFIG_INI_PATH, TOLERANCE};
use dancegraph::game::gameplay;
use dancegraph::{
    Difficulty, GameEvent, InputEvent, ManualClock, Note, PlaybackClock, QueuedInput, Song,
};
use log::{error, info, LevelFilter};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

const FRAME_TIME: f64 = 1.0 / 60.0;

/// A short two-mode demo catalog. Medium is the chart that gets played.
fn demo_song() -> Song {
    let mut medium = Vec::new();
    for beat in 0..32 {
        let time = 6.0 + beat as f64 * 0.5;
        medium.push(Note::tap(time, beat % 4));
    }
    medium.push(Note::hold(22.0, 24.0, 1));
    medium.push(Note::mine(25.0, 2));
    medium.push(Note::tap(26.0, 3));

    Song::new("Demo Stepchart", "dancegraph")
        .with_track("dance-single", Difficulty::Beginner, vec![Note::tap(6.0, 0)])
        .with_track("dance-single", Difficulty::Medium, medium)
        .with_track("dance-double", Difficulty::Hard, vec![Note::tap(6.0, 5)])
}

/// Scripted player: steps Right while the pickers are open (dance-double ->
/// dance-single, which lands on Medium), then plays every note dead on
/// except the last one and steps onto the mine.
fn scripted_input(song: &Song) -> Vec<(f64, InputEvent)> {
    let mut script = vec![(-1.0, InputEvent::press(3)), (-0.9, InputEvent::release(3))];
    let notes = song
        .track("dance-single", Difficulty::Medium)
        .map(|track| track.notes.as_slice())
        .unwrap_or_default();
    for note in notes.iter().filter(|n| !n.is_mine() && n.begin < 26.0) {
        script.push((note.begin, InputEvent::press(note.lane)));
        script.push((note.end + TOLERANCE / 2.0, InputEvent::release(note.lane)));
    }
    script.push((24.9, InputEvent::press(2)));
    script.push((25.1, InputEvent::release(2)));
    script.sort_by(|a, b| a.0.total_cmp(&b.0));
    script
}

fn main() -> Result<(), Box<dyn Error>> {
    // --- Logging Setup ---
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info) // Default level
        .filter_module("dancegraph::game::timing", LevelFilter::Debug)
        .filter_module("dancegraph::game::matcher", LevelFilter::Debug)
        .init();

    info!("Autoplay starting...");
    let config = config::load(Path::new(CONFIG_INI_PATH));

    let song = Arc::new(demo_song());
    let script = scripted_input(&song);
    let mut state = match gameplay::init(Arc::clone(&song), config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize dance graph: {}", e);
            return Err(e.into());
        }
    };

    // The recorded script is on the pad timeline; the clock runs ahead of it
    // by the controller delay.
    let mut clock = ManualClock::new(-2.0 + config.controller_delay);
    let mut input = QueuedInput::new();
    let mut pending = script.into_iter().peekable();
    let end_time = 28.0;

    while clock.position() - config.controller_delay < end_time {
        let now = clock.position() - config.controller_delay;
        while let Some((_, event)) = pending.next_if(|(at, _)| *at <= now) {
            input.push(event);
        }

        for event in gameplay::update(&mut state, &clock, &mut input) {
            match event {
                GameEvent::StreakMilestone { streak } => info!("{} Streak!", streak),
                GameEvent::MineTriggered { lane, .. } => info!("Boom on lane {}", lane),
                GameEvent::DifficultyChanged { difficulty } => info!("Picked {}", difficulty),
                _ => {}
            }
        }
        clock.advance(FRAME_TIME);
    }

    let snapshot = state.snapshot();
    info!(
        "Finished {} {}: score {} ({} raw), streak {}/{}",
        snapshot.mode,
        snapshot.difficulty_name,
        snapshot.display_score,
        snapshot.score,
        snapshot.streak,
        snapshot.longest_streak
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!("Autoplay exited gracefully.");
    Ok(())
}
