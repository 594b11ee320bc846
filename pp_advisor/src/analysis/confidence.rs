//! Confidence estimate attached to analyses and suggestions.

/// Lowest confidence ever reported
pub const MIN_CONFIDENCE: f32 = 0.5;

/// Highest confidence ever reported
pub const MAX_CONFIDENCE: f32 = 0.99;

const STRENGTH_WEIGHT: f32 = 0.5;
const ODDS_WEIGHT: f32 = 0.3;
const HISTORY_WEIGHT: f32 = 0.2;

/// Pot odds at which the odds term saturates
const ODDS_SATURATION: f32 = 5.0;

/// History length at which the information term saturates
const HISTORY_SATURATION: f32 = 10.0;

/// Blend strength, odds and information volume into a confidence score.
///
/// `0.5·s + 0.3·min(o/5, 1) + 0.2·min(n/10, 1)`, clamped to `[0.5, 0.99]`.
/// Non-finite inputs fall back to the minimum.
pub fn estimate_confidence(strength: f32, pot_odds: f32, history_len: usize) -> f32 {
    let odds_term = (pot_odds / ODDS_SATURATION).min(1.0);
    let history_term = (history_len as f32 / HISTORY_SATURATION).min(1.0);
    let raw = STRENGTH_WEIGHT * strength + ODDS_WEIGHT * odds_term + HISTORY_WEIGHT * history_term;

    if raw.is_nan() {
        return MIN_CONFIDENCE;
    }
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
