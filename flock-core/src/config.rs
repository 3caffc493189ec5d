/// Per-simulation mode switches, read at the start of each tick.
///
/// These were process-wide statics in older flocking sketches; carrying them
/// as a value lets multiple simulations coexist and makes a run reproducible
/// from its configuration alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Measure distances against the nearest periodic image of each neighbor.
    /// When off, all steering falls back to straight-line Euclidean geometry.
    pub torus: bool,
    /// Collect the (position, image) pairs that contribute to each cohesion
    /// force so a renderer can draw debug lines. No effect on motion.
    pub cohesion_links: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            torus: true,
            cohesion_links: false,
        }
    }
}

impl SimConfig {
    /// Straight-line mode: no wraparound shortcuts in the neighbor metric.
    pub fn euclidean() -> Self {
        Self {
            torus: false,
            ..Self::default()
        }
    }
}
