use crate::config::TOLERANCE;
use serde::Serialize;

/// Points for a single tier of accuracy; a perfect hit collects all tiers.
const TIER_POINTS: f64 = 15.0;
const FINESSE_POINTS: f64 = 5.0;

/// Points a flawless hit is worth.
pub const MAX_NOTE_POINTS: f64 = 50.0;

/// Subtracted from the cumulative score whenever a mine goes off. Same
/// magnitude as a perfect hit.
pub const MINE_PENALTY: f64 = MAX_NOTE_POINTS;

/// Gives points based on error from a perfect hit. A step function: exact
/// thresholds keep scores comparable across versions.
pub fn points(error: f64) -> f64 {
    let error = error.abs();
    let mut score = 0.0;
    if error < TOLERANCE {
        score += TIER_POINTS;
    }
    if error < TOLERANCE / 2.0 {
        score += TIER_POINTS;
    }
    if error < TOLERANCE / 4.0 {
        score += TIER_POINTS;
    }
    if error < TOLERANCE / 6.0 {
        score += FINESSE_POINTS;
    }
    score
}

/// Normalized closeness of a hit, 1.0 when dead on.
pub fn accuracy(error: f64) -> f64 {
    (1.0 - error.abs() / TOLERANCE).clamp(0.0, 1.0)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Perfect,
    Excellent,
    Great,
    Good,
    Ok,
    Poor,
    Bad,
    Horrible,
}

impl Rank {
    pub fn from_accuracy(accuracy: f64) -> Rank {
        if accuracy > 0.90 {
            Rank::Perfect
        } else if accuracy > 0.80 {
            Rank::Excellent
        } else if accuracy > 0.70 {
            Rank::Great
        } else if accuracy > 0.60 {
            Rank::Good
        } else if accuracy > 0.50 {
            Rank::Ok
        } else if accuracy > 0.40 {
            Rank::Poor
        } else if accuracy > 0.30 {
            Rank::Bad
        } else {
            Rank::Horrible
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Perfect => "Perfect!",
            Rank::Excellent => "Excellent!",
            Rank::Great => "Great!",
            Rank::Good => "Good!",
            Rank::Ok => "OK!",
            Rank::Poor => "Poor!",
            Rank::Bad => "Bad!",
            Rank::Horrible => "Horrible!",
        }
    }
}
