//! Upload progress indicator state.

/// A thin progress bar attached to an upload container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressBar {
    percent: f32,
}

impl ProgressBar {
    /// Create a bar at the given initial percentage.
    pub fn new(percent: f32) -> Self {
        let mut bar = Self::default();
        bar.set(percent);
        bar
    }

    /// Update the fill, clamped to 0..=100.
    pub fn set(&mut self, percent: f32) {
        self.percent = percent.clamp(0.0, 100.0);
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// The `aria-valuenow` projection of the fill.
    pub fn aria_value_now(&self) -> u32 {
        self.percent.round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}
