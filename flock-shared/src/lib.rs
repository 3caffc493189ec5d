use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 2D point in domain coordinates, as exchanged with rendering and
/// export collaborators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Raised when boid settings would put the simulation into an invalid state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),
    #[error("max speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f32),
    #[error("max force must be positive, got {0}")]
    NonPositiveMaxForce(f32),
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f32),
    #[error("{rule} distance must be non-negative, got {value}")]
    NegativeDistance { rule: &'static str, value: f32 },
}

/// Per-boid behavior parameters.
///
/// Distances are the neighbor radii of the three flocking rules; weights are
/// the multipliers applied to each rule's steering force before it is added
/// to the boid's acceleration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidSettings {
    pub mass: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// Size factor; used by rendering and by the wrap margin, not by the
    /// steering math.
    pub radius: f32,
    pub separation_distance: f32,
    pub alignment_distance: f32,
    pub cohesion_distance: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
}

impl Default for BoidSettings {
    fn default() -> Self {
        Self {
            mass: 1.0,
            max_speed: 2.0,
            max_force: 0.05,
            radius: 2.0,
            separation_distance: 24.0,
            alignment_distance: 80.0,
            cohesion_distance: 120.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
        }
    }
}

impl BoidSettings {
    /// Rejects settings that would propagate NaNs or divide-by-zero through
    /// the integration step. Checked once at construction; nothing in the
    /// steering math fails at runtime under valid settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.mass > 0.0) {
            return Err(SettingsError::NonPositiveMass(self.mass));
        }
        if !(self.max_speed > 0.0) {
            return Err(SettingsError::NonPositiveMaxSpeed(self.max_speed));
        }
        if !(self.max_force > 0.0) {
            return Err(SettingsError::NonPositiveMaxForce(self.max_force));
        }
        if !(self.radius >= 0.0) {
            return Err(SettingsError::NegativeRadius(self.radius));
        }
        for (rule, value) in [
            ("separation", self.separation_distance),
            ("alignment", self.alignment_distance),
            ("cohesion", self.cohesion_distance),
        ] {
            if !(value >= 0.0) {
                return Err(SettingsError::NegativeDistance { rule, value });
            }
        }
        Ok(())
    }
}

/// One boid's observable state after a tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidState {
    pub position: Position,
    pub velocity: Position,
    pub visible: bool,
}

/// Everything a rendering or export collaborator needs after a tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlockSnapshot {
    pub width: f32,
    pub height: f32,
    pub boids: Vec<BoidState>,
}
