use crate::config::TOLERANCE;
use crate::game::chart::NoteField;
use crate::game::events::GameEvent;
use crate::game::judgment::{self, MINE_PENALTY, Rank};
use crate::game::note::{NoteType, Resolution};
use crate::game::session::Session;
use log::debug;

/// Letting go of a pad before its hold ends fails the hold. A release never
/// hits anything by itself.
pub fn handle_release(
    field: &mut NoteField,
    session: &mut Session,
    lane: usize,
    time: f64,
    events: &mut Vec<GameEvent>,
) {
    let Some(index) = field.active_note(lane) else {
        return;
    };
    let note = field.note_mut(index);
    if note.release_time.is_none() && note.note.end > time + TOLERANCE {
        note.release_time = Some(time);
        note.score = 0.0;
        debug!(
            "Failed to hold note on lane {}! Begin: {:.3}; End: {:.3}",
            lane, note.note.begin, note.note.end
        );
        session.break_streak();
        events.push(GameEvent::HoldFailed { index, lane, time });
    }
}

/// Matches a press against the first unresolved note of its lane inside the
/// hit window. Returns the index of the note it resolved, if any.
pub fn handle_press(
    field: &mut NoteField,
    session: &mut Session,
    lane: usize,
    time: f64,
    events: &mut Vec<GameEvent>,
) -> Option<usize> {
    let index = field.window_until(time + TOLERANCE).find(|&i| {
        field.get(i).is_some_and(|candidate| {
            candidate.is_unresolved()
                && candidate.note.lane == lane
                && time >= candidate.note.begin - TOLERANCE
        })
    })?;

    let note = field.note_mut(index);
    note.resolution = Resolution::Hit;
    match note.note.note_type {
        NoteType::Regular => {
            let error = note.note.begin - time;
            note.score = judgment::points(error);
            note.accuracy = judgment::accuracy(error);
            let (score, accuracy) = (note.score, note.accuracy);
            debug!(
                "Hit lane {} at {:.3}s, error {:.1}ms, {} points",
                lane,
                time,
                error * 1000.0,
                score
            );
            session.extend_streak();
            events.push(GameEvent::NoteHit {
                index,
                lane,
                score,
                accuracy,
                rank: Rank::from_accuracy(accuracy),
            });
        }
        NoteType::Mine => {
            debug!("Stepped on mine at {:.3}s (lane {})", time, lane);
            session.score -= MINE_PENALTY;
            session.break_streak();
            events.push(GameEvent::MineTriggered { index, lane, held: false });
        }
    }
    field.set_active_note(lane, index);
    Some(index)
}
