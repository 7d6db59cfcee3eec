use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one successful lookup, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as resolved by the provider.
    pub city: String,
    /// Country code, e.g. "RU".
    pub country: String,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    /// Raw provider condition id, see [`ConditionKind::from_code`].
    pub condition_id: u16,
    /// Localized condition text, e.g. "ясно".
    pub description: String,
    pub observed_at: DateTime<Utc>,
}

impl CurrentConditions {
    pub fn condition(&self) -> ConditionKind {
        ConditionKind::from_code(self.condition_id)
    }

    /// Temperature as displayed, rounded half-up.
    pub fn temperature_rounded(&self) -> i32 {
        round_half_up(self.temperature_c)
    }

    pub fn temp_min_rounded(&self) -> i32 {
        round_half_up(self.temp_min_c)
    }

    pub fn temp_max_rounded(&self) -> i32 {
        round_half_up(self.temp_max_c)
    }
}

/// Icon category for a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Thunderstorm,
    Rain,
    Snow,
    Clouds,
    Clear,
}

impl ConditionKind {
    /// Map a condition id to its icon category by the fixed ranges: 2xx
    /// thunderstorm, 3xx-5xx rain and drizzle, 6xx snow, 7xx atmosphere.
    /// Everything else, including 800 and ids below 200, is clear.
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => ConditionKind::Thunderstorm,
            300..=599 => ConditionKind::Rain,
            600..=699 => ConditionKind::Snow,
            700..=799 => ConditionKind::Clouds,
            _ => ConditionKind::Clear,
        }
    }

    /// Terminal stand-in for the icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            ConditionKind::Thunderstorm => "⛈",
            ConditionKind::Rain => "🌧",
            ConditionKind::Snow => "❄",
            ConditionKind::Clouds => "☁",
            ConditionKind::Clear => "☀",
        }
    }
}

/// Display rounding: halves go towards positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
