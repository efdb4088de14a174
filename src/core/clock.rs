/// Source of the current playback position, in the same unit (seconds) as
/// note timestamps.
pub trait PlaybackClock {
    fn position(&self) -> f64;
}

/// A clock the host (or a test) sets explicitly every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ManualClock {
    position: f64,
}

impl ManualClock {
    pub fn new(position: f64) -> Self {
        Self { position }
    }

    pub fn set(&mut self, position: f64) {
        self.position = position;
    }

    pub fn advance(&mut self, delta: f64) {
        self.position += delta;
    }
}

impl PlaybackClock for ManualClock {
    fn position(&self) -> f64 {
        self.position
    }
}
