//! Generic steering-force generators: seek toward a target, with optional
//! arrival damping, and signed obstacle avoidance. Every output is clamped to
//! the boid's `max_force`.

use crate::boid::Boid;
use crate::config::SimConfig;
use crate::torus::{self, Domain};
use crate::vector::Vector2;

/// Distance at which arrival damping starts scaling the desired speed down.
pub const ARRIVAL_RADIUS: f32 = 100.0;

/// Steering force toward `target`, or toward its nearest periodic image when
/// torus mode is on. With `slow_down`, the desired speed falls off linearly
/// inside [`ARRIVAL_RADIUS`] so the boid does not overshoot. A target at zero
/// distance yields the zero vector.
pub fn steer(
    boid: &Boid,
    target: Vector2,
    domain: &Domain,
    config: &SimConfig,
    slow_down: bool,
) -> Vector2 {
    let mapped = if config.torus {
        torus::nearest_image(domain, boid.position, target).0
    } else {
        target
    };
    let offset = mapped - boid.position;
    let d = offset.magnitude();
    if d > 0.0 {
        let desired = if slow_down && d < ARRIVAL_RADIUS {
            offset.normalize() * (boid.settings.max_speed * (d / ARRIVAL_RADIUS))
        } else {
            offset.normalize() * boid.settings.max_speed
        };
        (desired - boid.velocity).limit(boid.settings.max_force)
    } else {
        Vector2::zero()
    }
}

/// Repulsion from `obstacle`: `-force` times the seek force toward it.
/// A negative `force` therefore attracts; callers rely on that sign
/// convention.
pub fn avoid(
    boid: &Boid,
    obstacle: Vector2,
    force: f32,
    domain: &Domain,
    config: &SimConfig,
) -> Vector2 {
    steer(boid, obstacle, domain, config, false) * -force
}
