use std::time::Duration;

/// Pause between finishing the last segment and flipping to the completed
/// state, during which the UI may display a final full render.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Inter-tick delay preset, applied uniformly regardless of segment length
/// or stroke complexity.
pub enum Pace {
    /// 50 ms between segments.
    Fast,
    /// 100 ms between segments.
    #[default]
    Normal,
    /// 200 ms between segments.
    Slow,
}

impl Pace {
    /// The delay a driver should wait between ticks.
    pub fn delay(self) -> Duration {
        match self {
            Self::Fast => Duration::from_millis(50),
            Self::Normal => Duration::from_millis(100),
            Self::Slow => Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/pace.rs"]
mod tests;
