use serde::Deserialize;

/// The style of the scroll indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStyle {
    /// Dark indicators with a light border, visible on any background.
    #[default]
    Default,
    /// Dark indicators, best on light backgrounds.
    Black,
    /// Light indicators, best on dark backgrounds.
    White,
}

/// The rate at which a scroll view decelerates after the user lifts their finger.
///
/// The rate is the fraction of velocity kept per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecelerationRate {
    /// The regular deceleration rate (`0.998`).
    #[default]
    Normal,
    /// A fast deceleration rate (`0.99`).
    Fast,
    /// Any other rate.
    Custom(f64),
}

impl DecelerationRate {
    /// Returns the raw per-millisecond rate.
    pub fn value(&self) -> f64 {
        match self {
            DecelerationRate::Normal => 0.998,
            DecelerationRate::Fast => 0.99,
            DecelerationRate::Custom(rate) => *rate,
        }
    }
}

impl From<f64> for DecelerationRate {
    fn from(rate: f64) -> Self {
        Self::Custom(rate)
    }
}
