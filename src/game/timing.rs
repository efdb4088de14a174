use crate::config::TOLERANCE;
use crate::game::chart::NoteField;
use crate::game::events::GameEvent;
use crate::game::judgment::MINE_PENALTY;
use crate::game::note::{NoteType, Resolution};
use crate::game::session::Session;
use log::debug;

/// Finalizes every note whose end has passed by more than the tolerance:
/// unhit notes become misses, hit notes pay out their score. Running it twice
/// for the same `time` changes nothing the second time.
pub fn sweep_timeouts(
    field: &mut NoteField,
    session: &mut Session,
    time: f64,
    events: &mut Vec<GameEvent>,
) {
    while field.cursor() < field.len() {
        let index = field.cursor();
        let note = field.note_mut(index);
        if time <= note.note.end + TOLERANCE {
            break;
        }

        let lane = note.note.lane;
        match note.resolution {
            Resolution::Unresolved => {
                note.resolution = Resolution::Missed;
                if note.note.note_type == NoteType::Mine {
                    debug!("Mine avoided at {:.3}s (lane {})", note.note.begin, lane);
                    events.push(GameEvent::MineAvoided { index, lane });
                } else {
                    debug!(
                        "Missed note at time {:.3} (note timing {:.3}, lane {})",
                        time, note.note.begin, lane
                    );
                    session.break_streak();
                    events.push(GameEvent::NoteMissed { index, lane });
                }
            }
            Resolution::Hit => {
                if note.release_time.is_none() {
                    note.release_time = Some(time);
                }
                if note.note.note_type == NoteType::Regular {
                    session.score += note.score;
                    events.push(GameEvent::NoteFinalized { index, score: note.score });
                }
            }
            Resolution::Missed => {}
        }
        field.advance_cursor();
    }
}

/// Sets off mines that arrive while their lane is held down.
pub fn detect_mine_holds(
    field: &mut NoteField,
    session: &mut Session,
    pressed: &[bool],
    time: f64,
    events: &mut Vec<GameEvent>,
) {
    let triggered: Vec<usize> = field
        .window_until(time + TOLERANCE)
        .filter(|&i| {
            let Some(candidate) = field.get(i) else {
                return false;
            };
            let note = &candidate.note;
            candidate.is_unresolved()
                && note.is_mine()
                && pressed.get(note.lane).copied().unwrap_or(false)
                && note.begin >= time - TOLERANCE
                && note.end <= time + TOLERANCE
        })
        .collect();

    for index in triggered {
        let note = field.note_mut(index);
        note.resolution = Resolution::Hit;
        note.score = 0.0;
        let lane = note.note.lane;
        debug!("Hit mine at {:.3}s (lane {}, held)", time, lane);
        session.score -= MINE_PENALTY;
        session.break_streak();
        events.push(GameEvent::MineTriggered { index, lane, held: true });
    }
}
