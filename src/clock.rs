/// Turns per-frame timestamps into elapsed time
///
/// The first tick sets the baseline and reports zero elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { previous: None }
    }

    /// Seconds since the previous tick; zero on the first tick and when the
    /// timestamp goes backwards
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let dt = match self.previous {
            Some(previous) => (timestamp - previous).max(0.0),
            None => 0.0,
        };
        self.previous = Some(timestamp);
        dt
    }
}
