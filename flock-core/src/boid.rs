use rand::Rng;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::observer::{Edge, WrapCrossing};
use crate::steering;
use crate::torus::{self, Domain, Zone};
use crate::vector::Vector2;
use flock_shared::BoidSettings;

/// A single boid: kinematic state plus its behavior parameters.
///
/// Kinematic fields change only inside `integrate`, `apply_force`, the
/// steering accumulators and `wrap`; the owning driver may also set them
/// directly between ticks.
#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub settings: BoidSettings,
    /// Rendering hint; never read by the steering math.
    pub visible: bool,
}

impl Boid {
    /// Validates `settings` up front so no NaN or divide-by-zero can surface
    /// mid-simulation.
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        settings: BoidSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            position,
            velocity,
            acceleration: Vector2::zero(),
            settings,
            visible: true,
        })
    }

    /// Spawns a boid at a uniform random position with a small random
    /// velocity, each component in [-1, 1).
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        domain: &Domain,
        settings: BoidSettings,
    ) -> Result<Self, ConfigError> {
        let position = Vector2::new(
            rng.gen_range(0.0..domain.width()),
            rng.gen_range(0.0..domain.height()),
        );
        let velocity = Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        Self::new(position, velocity, settings)
    }

    /// Accumulates an external force, weighted by mass (F = ma).
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force / self.settings.mass;
    }

    /// Applies the accumulated acceleration, clamps speed, moves, and resets
    /// the accumulator. `|velocity| <= max_speed` holds on return, and a
    /// tick's behavior is entirely determined by forces applied during it.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(self.settings.max_speed);
        self.position += self.velocity;
        self.acceleration = Vector2::zero();
    }

    /// Teleports across the seam once the boid leaves the domain by more than
    /// its radius, reporting which edges were crossed. This is the positional
    /// half of the torus; the metric half lives in [`torus::nearest_image`],
    /// and both read the same domain.
    pub fn wrap(&mut self, domain: &Domain) -> Option<WrapCrossing> {
        let r = self.settings.radius;
        let mut crossing = WrapCrossing::default();
        if self.position.x < -r {
            self.position.x = domain.width() + r;
            crossing.x = Some(Edge::Left);
        } else if self.position.x > domain.width() + r {
            self.position.x = -r;
            crossing.x = Some(Edge::Right);
        }
        if self.position.y < -r {
            self.position.y = domain.height() + r;
            crossing.y = Some(Edge::Top);
        } else if self.position.y > domain.height() + r {
            self.position.y = -r;
            crossing.y = Some(Edge::Bottom);
        }
        if crossing.occurred() {
            Some(crossing)
        } else {
            None
        }
    }

    /// Accumulates a full-speed steering force toward `target`.
    pub fn seek(&mut self, target: Vector2, domain: &Domain, config: &SimConfig) {
        let force = steering::steer(self, target, domain, config, false);
        self.acceleration += force;
    }

    /// Accumulates a steering force toward `target` with arrival damping.
    pub fn arrive(&mut self, target: Vector2, domain: &Domain, config: &SimConfig) {
        let force = steering::steer(self, target, domain, config, true);
        self.acceleration += force;
    }

    /// Accumulates a repulsion from `obstacle`; negative `force` attracts.
    pub fn avoid(&mut self, obstacle: Vector2, force: f32, domain: &Domain, config: &SimConfig) {
        let backoff = steering::avoid(self, obstacle, force, domain, config);
        self.acceleration += backoff;
    }

    /// Rotates the velocity by `theta` radians.
    pub fn turn(&mut self, theta: f32) {
        self.velocity = self.velocity.rotate(theta);
    }

    /// Nearest periodic image of `point` relative to this boid, with its zone
    /// code. Diagnostic helper for drivers that draw wrap-aware overlays.
    pub fn nearest_image_of(&self, point: Vector2, domain: &Domain) -> (Vector2, Zone) {
        torus::nearest_image(domain, self.position, point)
    }
}
