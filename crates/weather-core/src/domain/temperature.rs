use serde::{Deserialize, Serialize};

/// Temperatures at or above this are hot.
pub const HOT_THRESHOLD_C: f64 = 30.0;

/// Temperatures at or below this are cold.
pub const COLD_THRESHOLD_C: f64 = 10.0;

/// Coarse temperature classification exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Hot,
    Cold,
    Moderate,
}

impl TemperatureBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Hot => "hot",
            TemperatureBand::Cold => "cold",
            TemperatureBand::Moderate => "moderate",
        }
    }
}

/// Classify a Celsius temperature. The hot bound is checked first.
pub fn classify(temp_c: f64) -> TemperatureBand {
    if temp_c >= HOT_THRESHOLD_C {
        TemperatureBand::Hot
    } else if temp_c <= COLD_THRESHOLD_C {
        TemperatureBand::Cold
    } else {
        TemperatureBand::Moderate
    }
}
