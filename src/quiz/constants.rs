//! Scoring and state constants shared across the quiz engine.

/// Strong effect on a personality trait (-20 to +20).
pub const STRONG_EFFECT: f64 = 20.0;

/// Moderate effect on a personality trait (-15 to +15).
pub const MODERATE_EFFECT: f64 = 15.0;

/// Mild effect on a personality trait (-5 to +5).
pub const MILD_EFFECT: f64 = 5.0;

/// Maximum effect for slider-type questions.
pub const SLIDER_MAX_EFFECT: f64 = 20.0;

/// Range for score normalization (-100 to +100).
pub const NORMALIZATION_RANGE: f64 = 100.0;

/// Slider neutral position (0-100 scale).
pub const SLIDER_NEUTRAL: f64 = 50.0;

/// Storage key for in-progress quiz state.
pub const PROGRESS_STORAGE_KEY: &str = "personalityQuizState_v2";
