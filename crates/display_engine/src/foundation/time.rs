//! Frame timing

/// Simulation clock advanced by the host once per frame
///
/// Display objects read it through their game reference; it is never
/// advanced in the middle of an update sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    /// Milliseconds covered by the current frame
    pub elapsed_ms: f32,
    /// Milliseconds since the clock started
    pub total_ms: f64,
    /// Number of frames advanced so far
    pub frame: u64,
}

impl FrameClock {
    /// Advance the clock by one frame of the given length
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.elapsed_ms = elapsed_ms.max(0.0);
        self.total_ms += f64::from(self.elapsed_ms);
        self.frame += 1;
    }
}
