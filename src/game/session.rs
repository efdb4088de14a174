use crate::config::{DEATH_DELAY, JOIN_DELAY, STREAK_MILESTONE_STEP};
use log::info;

#[inline(always)]
pub fn next_milestone(previous: u32) -> u32 {
    previous + STREAK_MILESTONE_STEP
}

/// Per-player bookkeeping that survives difficulty and mode changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Raw accumulated points; multiply by the chart's score factor to
    /// normalize.
    pub score: f64,
    pub streak: u32,
    pub longest_streak: u32,
    /// Last milestone that was celebrated.
    pub big_streak: u32,
    /// `None` until the player's first input.
    pub join_time: Option<f64>,
    /// Time of the player's latest input.
    pub activity_time: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an input at `time`. The first one joins the player; joining
    /// before playback starts backdates the join so the pickers stay open
    /// until the music begins.
    pub fn touch(&mut self, time: f64) {
        if self.join_time.is_none() {
            let joined = if time < 0.0 { -JOIN_DELAY } else { time };
            info!("Player joined at {:.3}s", joined);
            self.join_time = Some(joined);
        }
        self.activity_time = time;
    }

    pub fn joined(&self) -> bool {
        self.join_time.is_some()
    }

    pub fn dead(&self, time: f64) -> bool {
        match self.join_time {
            None => true,
            Some(_) => time > self.activity_time + DEATH_DELAY,
        }
    }

    /// Whether inputs at `time` still steer the track/difficulty pickers.
    pub fn in_selection_window(&self, time: f64) -> bool {
        self.join_time.is_some_and(|joined| time < joined + JOIN_DELAY)
    }

    pub fn extend_streak(&mut self) {
        self.streak += 1;
        if self.streak > self.longest_streak {
            self.longest_streak = self.streak;
        }
    }

    pub fn break_streak(&mut self) {
        self.streak = 0;
    }

    /// Returns the milestone reached this tick, at most one per call.
    pub fn check_milestone(&mut self) -> Option<u32> {
        let next = next_milestone(self.big_streak);
        if self.streak >= next {
            self.big_streak = next;
            info!("{} streak!", next);
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_joined_is_dead() {
        let session = Session::new();
        assert!(session.dead(0.0));
        assert!(!session.in_selection_window(0.0));
    }

    #[test]
    fn idles_out_after_death_delay() {
        let mut session = Session::new();
        session.touch(10.0);
        assert!(!session.dead(30.0));
        assert!(session.dead(30.5));
        session.touch(30.5);
        assert!(!session.dead(31.0));
    }

    #[test]
    fn early_join_is_backdated() {
        let mut session = Session::new();
        session.touch(-2.0);
        assert_eq!(session.join_time, Some(-JOIN_DELAY));
        assert!(session.in_selection_window(-0.1));
        assert!(!session.in_selection_window(0.0));
    }

    #[test]
    fn join_time_is_set_once() {
        let mut session = Session::new();
        session.touch(12.0);
        session.touch(14.0);
        assert_eq!(session.join_time, Some(12.0));
        assert_eq!(session.activity_time, 14.0);
        assert!(session.in_selection_window(16.9));
        assert!(!session.in_selection_window(17.0));
    }

    #[test]
    fn longest_streak_never_drops() {
        let mut session = Session::new();
        for _ in 0..7 {
            session.extend_streak();
        }
        session.break_streak();
        session.extend_streak();
        assert_eq!(session.streak, 1);
        assert_eq!(session.longest_streak, 7);
    }

    #[test]
    fn milestones_fire_once_each() {
        let mut session = Session::new();
        let mut fired = Vec::new();
        let mut tick = |session: &mut Session, streak: u32| {
            session.streak = streak;
            fired.extend(session.check_milestone());
        };
        tick(&mut session, 10);
        tick(&mut session, 10);
        tick(&mut session, 25);
        tick(&mut session, 25);
        tick(&mut session, 25);
        assert_eq!(fired, vec![10, 20]);
    }
}
