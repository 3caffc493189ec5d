//! The three classic flocking rules. Each scans the full neighbor iterator
//! once, measuring distance to the nearest periodic image of every other boid
//! when torus mode is on. A boid never counts itself: its distance from
//! itself is 0, which fails the `0 < d` test.

use crate::boid::Boid;
use crate::config::SimConfig;
use crate::steering;
use crate::torus::{self, Domain};
use crate::vector::Vector2;

fn image_of(boid: &Boid, other: Vector2, domain: &Domain, config: &SimConfig) -> Vector2 {
    if config.torus {
        torus::nearest_image(domain, boid.position, other).0
    } else {
        other
    }
}

/// Reynolds steering law: reinterpret an aggregate direction as a desired
/// heading at full speed, and steer from the current velocity toward it.
fn steer_toward(boid: &Boid, direction: Vector2) -> Vector2 {
    let desired = direction.normalize() * boid.settings.max_speed;
    (desired - boid.velocity).limit(boid.settings.max_force)
}

/// Steer away from neighbors closer than `separation_distance`, each
/// weighted by the inverse of its distance so the nearest push hardest.
pub fn separation<'a, I>(boid: &Boid, others: I, domain: &Domain, config: &SimConfig) -> Vector2
where
    I: Iterator<Item = &'a Boid>,
{
    let mut steer = Vector2::zero();
    let mut count = 0;

    for other in others {
        let image = image_of(boid, other.position, domain, config);
        let d = boid.position.distance(&image);
        if d > 0.0 && d < boid.settings.separation_distance {
            let diff = (boid.position - image).normalize() / d;
            steer += diff;
            count += 1;
        }
    }

    if count > 0 {
        steer = steer / count as f32;
    }

    if steer.magnitude() > 0.0 {
        steer_toward(boid, steer)
    } else {
        steer
    }
}

/// Steer toward the average velocity of neighbors within
/// `alignment_distance`.
pub fn alignment<'a, I>(boid: &Boid, others: I, domain: &Domain, config: &SimConfig) -> Vector2
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2::zero();
    let mut count = 0;

    for other in others {
        let image = image_of(boid, other.position, domain, config);
        let d = boid.position.distance(&image);
        if d > 0.0 && d < boid.settings.alignment_distance {
            sum += other.velocity;
            count += 1;
        }
    }

    if count > 0 {
        sum = sum / count as f32;
    }

    if sum.magnitude() > 0.0 {
        steer_toward(boid, sum)
    } else {
        Vector2::zero()
    }
}

/// Seek the centroid of the nearest images of neighbors within
/// `cohesion_distance`. Returns the zero accumulator when no neighbor
/// qualifies.
pub fn cohesion<'a, I>(boid: &Boid, others: I, domain: &Domain, config: &SimConfig) -> Vector2
where
    I: Iterator<Item = &'a Boid>,
{
    cohesion_inner(boid, others, domain, config, None)
}

/// Like [`cohesion`], but also appends each contributing
/// `(boid position, neighbor image)` pair to `links` so a driver can draw
/// cohesion debug lines. The force is identical.
pub fn cohesion_with_links<'a, I>(
    boid: &Boid,
    others: I,
    domain: &Domain,
    config: &SimConfig,
    links: &mut Vec<(Vector2, Vector2)>,
) -> Vector2
where
    I: Iterator<Item = &'a Boid>,
{
    cohesion_inner(boid, others, domain, config, Some(links))
}

fn cohesion_inner<'a, I>(
    boid: &Boid,
    others: I,
    domain: &Domain,
    config: &SimConfig,
    mut links: Option<&mut Vec<(Vector2, Vector2)>>,
) -> Vector2
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2::zero();
    let mut count = 0;

    for other in others {
        let image = image_of(boid, other.position, domain, config);
        let d = boid.position.distance(&image);
        if d > 0.0 && d < boid.settings.cohesion_distance {
            if let Some(links) = links.as_mut() {
                links.push((boid.position, image));
            }
            sum += image;
            count += 1;
        }
    }

    if count > 0 {
        steering::steer(boid, sum / count as f32, domain, config, false)
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_shared::BoidSettings;

    fn boid_at(x: f32, y: f32) -> Boid {
        Boid::new(Vector2::new(x, y), Vector2::zero(), BoidSettings::default()).unwrap()
    }

    fn domain() -> Domain {
        Domain::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_lone_boid_feels_nothing() {
        let boid = boid_at(400.0, 300.0);
        let flock = [boid.clone()];
        let d = domain();
        let config = SimConfig::default();
        assert_eq!(separation(&boid, flock.iter(), &d, &config), Vector2::zero());
        assert_eq!(alignment(&boid, flock.iter(), &d, &config), Vector2::zero());
        assert_eq!(cohesion(&boid, flock.iter(), &d, &config), Vector2::zero());
    }

    #[test]
    fn test_separation_pushes_apart() {
        let boid = boid_at(400.0, 300.0);
        let others = [boid.clone(), boid_at(410.0, 300.0)];
        let force = separation(&boid, others.iter(), &domain(), &SimConfig::default());
        assert!(force.x < 0.0);
        assert!(force.magnitude() <= boid.settings.max_force + 0.0001);
    }

    #[test]
    fn test_separation_across_seam() {
        // 780 apart in the plane, 20 apart on the torus.
        let a = boid_at(10.0, 300.0);
        let b = boid_at(790.0, 300.0);
        let flock = [a.clone(), b.clone()];
        let d = domain();

        let on = SimConfig::default();
        let fa = separation(&a, flock.iter(), &d, &on);
        let fb = separation(&b, flock.iter(), &d, &on);
        assert!(fa.x > 0.0, "a is pushed right, away from the seam");
        assert!(fb.x < 0.0, "b is pushed left, away from the seam");

        let off = SimConfig::euclidean();
        assert_eq!(separation(&a, flock.iter(), &d, &off), Vector2::zero());
        assert_eq!(separation(&b, flock.iter(), &d, &off), Vector2::zero());
    }

    #[test]
    fn test_alignment_matches_neighbor_heading() {
        let boid = boid_at(400.0, 300.0);
        let mut neighbor = boid_at(420.0, 300.0);
        neighbor.velocity = Vector2::new(0.0, 1.0);
        let flock = [boid.clone(), neighbor];
        let force = alignment(&boid, flock.iter(), &domain(), &SimConfig::default());
        assert!(force.y > 0.0);
        assert!(force.magnitude() <= boid.settings.max_force + 0.0001);
    }

    #[test]
    fn test_alignment_ignores_distant_boids() {
        let boid = boid_at(0.0, 0.0);
        let mut far = boid_at(300.0, 300.0);
        far.velocity = Vector2::new(1.0, 0.0);
        let flock = [boid.clone(), far];
        let force = alignment(&boid, flock.iter(), &domain(), &SimConfig::default());
        assert_eq!(force, Vector2::zero());
    }

    #[test]
    fn test_cohesion_pulls_toward_centroid() {
        let boid = boid_at(400.0, 300.0);
        let flock = [boid.clone(), boid_at(450.0, 300.0), boid_at(450.0, 320.0)];
        let force = cohesion(&boid, flock.iter(), &domain(), &SimConfig::default());
        assert!(force.x > 0.0);
        assert!(force.magnitude() <= boid.settings.max_force + 0.0001);
    }

    #[test]
    fn test_cohesion_no_neighbors_is_zero_not_nan() {
        let boid = boid_at(0.0, 0.0);
        let flock = [boid.clone(), boid_at(400.0, 300.0)];
        let force = cohesion(&boid, flock.iter(), &domain(), &SimConfig::default());
        assert_eq!(force, Vector2::zero());
        assert!(!force.x.is_nan() && !force.y.is_nan());
    }

    #[test]
    fn test_cohesion_links_capture_contributors() {
        let boid = boid_at(10.0, 300.0);
        let flock = [boid.clone(), boid_at(790.0, 300.0), boid_at(60.0, 300.0)];
        let d = domain();
        let config = SimConfig::default();
        let mut links = Vec::new();
        let with = cohesion_with_links(&boid, flock.iter(), &d, &config, &mut links);
        let without = cohesion(&boid, flock.iter(), &d, &config);
        assert_eq!(with, without);
        assert_eq!(links.len(), 2);
        // The seam neighbor shows up at its image, not its raw position.
        assert!(links.iter().any(|(_, image)| image.x == -10.0));
    }
}
