use serde::Serialize;
use std::collections::VecDeque;

/// Lanes that drive both gameplay and the track/difficulty pickers. Modes
/// with more pads still only read these four.
pub const PRIMARY_LANES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Lane {
    Left = 0,
    Down = 1,
    Up = 2,
    Right = 3,
}

impl Lane {
    pub const ALL: [Lane; PRIMARY_LANES] = [Lane::Left, Lane::Down, Lane::Up, Lane::Right];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn from_index(index: usize) -> Option<Lane> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Press,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputEvent {
    pub kind: EventKind,
    /// Physical pad index; may exceed the primary lanes.
    pub lane: usize,
}

impl InputEvent {
    pub const fn press(lane: usize) -> Self {
        Self { kind: EventKind::Press, lane }
    }

    pub const fn release(lane: usize) -> Self {
        Self { kind: EventKind::Release, lane }
    }
}

/// A drainable stream of pad events. `poll` returns `None` once nothing is
/// pending for the current tick.
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// FIFO of pending events, filled by the host between ticks.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    pending: VecDeque<InputEvent>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }
}

impl Extend<InputEvent> for QueuedInput {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
