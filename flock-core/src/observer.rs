//! Wrap-crossing observation. Trail drawing, vector export and other
//! extensions attach here instead of subclassing the boid, keeping the
//! simulation core free of rendering concerns.

use crate::boid::Boid;
use crate::flock::Flock;
use crate::vector::Vector2;

/// Domain edge a boid exited through during the wrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Edges crossed in one wrap step; a fast boid can cross on both axes at
/// once in a corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapCrossing {
    pub x: Option<Edge>,
    pub y: Option<Edge>,
}

impl WrapCrossing {
    pub fn occurred(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Callback invoked by [`Flock::tick_observed`] immediately after a boid has
/// been teleported across the seam. `index` is the boid's position in the
/// flock's container order.
pub trait WrapObserver {
    fn on_wrap(&mut self, index: usize, boid: &Boid, crossing: WrapCrossing);
}

/// Records each boid's path as polyline segments, lifting the pen at every
/// wrap so exported trails never draw a stroke across the seam.
///
/// Drive it with one `record` call after each tick:
///
/// ```no_run
/// # use flock_core::{Domain, Flock, SimConfig, TrailRecorder};
/// # let mut flock = Flock::new(Domain::new(800.0, 600.0).unwrap(), SimConfig::default());
/// let mut trails = TrailRecorder::new(flock.len());
/// for _ in 0..100 {
///     flock.tick_observed(&mut trails);
///     trails.record(&flock);
/// }
/// ```
#[derive(Debug, Default)]
pub struct TrailRecorder {
    trails: Vec<Vec<Vec<Vector2>>>,
}

impl TrailRecorder {
    pub fn new(boid_count: usize) -> Self {
        Self {
            trails: vec![vec![Vec::new()]; boid_count],
        }
    }

    /// Appends every boid's current position to its open segment. Grows to
    /// match the flock if boids were added since construction.
    pub fn record(&mut self, flock: &Flock) {
        if self.trails.len() < flock.len() {
            self.trails.resize(flock.len(), vec![Vec::new()]);
        }
        for (trail, boid) in self.trails.iter_mut().zip(flock.boids()) {
            // unwrap is fine: every trail is created with one open segment
            trail.last_mut().unwrap().push(boid.position);
        }
    }

    /// Polyline segments recorded for the boid at `index`.
    pub fn segments(&self, index: usize) -> &[Vec<Vector2>] {
        &self.trails[index]
    }

    pub fn clear(&mut self) {
        for trail in &mut self.trails {
            trail.clear();
            trail.push(Vec::new());
        }
    }
}

impl WrapObserver for TrailRecorder {
    fn on_wrap(&mut self, index: usize, boid: &Boid, _crossing: WrapCrossing) {
        if let Some(trail) = self.trails.get_mut(index) {
            // Pen up, move to the teleported position, pen down.
            trail.push(vec![boid.position]);
        }
    }
}
