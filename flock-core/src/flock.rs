use log::{debug, trace};
use rand::Rng;

use crate::boid::Boid;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::jitter::JitterSpec;
use crate::observer::WrapObserver;
use crate::placement::Placement;
use crate::rules;
use crate::torus::Domain;
use crate::vector::Vector2;
use flock_shared::{BoidSettings, BoidState, FlockSnapshot, Position};

/// An ordered collection of boids sharing one domain and one configuration.
///
/// `tick` advances each boid fully before moving to the next in container
/// order, so later boids see some neighbors already moved this tick. That is
/// the update order of the reference algorithm and the emergent motion
/// depends on it; a snapshot-then-commit batch update would be symmetric but
/// visibly different. Structural mutation is only possible between ticks
/// because `tick` holds the exclusive borrow.
pub struct Flock {
    boids: Vec<Boid>,
    domain: Domain,
    config: SimConfig,
    cohesion_links: Vec<(Vector2, Vector2)>,
}

impl Flock {
    pub fn new(domain: Domain, config: SimConfig) -> Self {
        Self {
            boids: Vec::new(),
            domain,
            config,
            cohesion_links: Vec::new(),
        }
    }

    /// Places `count` boids via `placement`, with behavior parameters drawn
    /// by perturbing `base` through `jitter` when one is supplied. Initial
    /// velocities are random unit-box vectors from the same RNG, so a seeded
    /// RNG reproduces the whole flock.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        placement: &Placement,
        base: &BoidSettings,
        jitter: Option<&JitterSpec>,
    ) -> Result<(), ConfigError> {
        let positions = placement.positions(rng, &self.domain, count)?;
        for position in positions {
            let settings = match jitter {
                Some(spec) => spec.sample(rng, base),
                None => *base,
            };
            let velocity = Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            self.boids.push(Boid::new(position, velocity, settings)?);
        }
        debug!("populated flock with {} boids, total {}", count, self.boids.len());
        Ok(())
    }

    /// Advances every boid one step: flock rules, integrate, wrap.
    pub fn tick(&mut self) {
        self.run(None);
    }

    /// Like [`tick`](Flock::tick), notifying `observer` of every seam
    /// crossing as it happens.
    pub fn tick_observed(&mut self, observer: &mut dyn WrapObserver) {
        self.run(Some(observer));
    }

    fn run(&mut self, mut observer: Option<&mut dyn WrapObserver>) {
        trace!("tick: {} boids", self.boids.len());
        self.cohesion_links.clear();
        for i in 0..self.boids.len() {
            let force = {
                let boid = &self.boids[i];
                let sep = rules::separation(boid, self.boids.iter(), &self.domain, &self.config);
                let ali = rules::alignment(boid, self.boids.iter(), &self.domain, &self.config);
                let coh = if self.config.cohesion_links {
                    rules::cohesion_with_links(
                        boid,
                        self.boids.iter(),
                        &self.domain,
                        &self.config,
                        &mut self.cohesion_links,
                    )
                } else {
                    rules::cohesion(boid, self.boids.iter(), &self.domain, &self.config)
                };
                sep * boid.settings.separation_weight
                    + ali * boid.settings.alignment_weight
                    + coh * boid.settings.cohesion_weight
            };
            let boid = &mut self.boids[i];
            // Rule forces go straight into the acceleration, unweighted by
            // mass; only external forces pass through apply_force.
            boid.acceleration += force;
            boid.integrate();
            if let Some(crossing) = boid.wrap(&self.domain) {
                if let Some(obs) = observer.as_deref_mut() {
                    obs.on_wrap(i, boid, crossing);
                }
            }
        }
    }

    pub fn add_boid(&mut self, boid: Boid) {
        self.boids.push(boid);
        debug!("added boid, flock size {}", self.boids.len());
    }

    /// Removes and returns the most recently added boid.
    pub fn remove_newest(&mut self) -> Option<Boid> {
        let boid = self.boids.pop();
        if boid.is_some() {
            debug!("removed newest boid, flock size {}", self.boids.len());
        }
        boid
    }

    /// Removes and returns the oldest boid.
    pub fn remove_oldest(&mut self) -> Option<Boid> {
        if self.boids.is_empty() {
            return None;
        }
        let boid = self.boids.remove(0);
        debug!("removed oldest boid, flock size {}", self.boids.len());
        Some(boid)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Mutable access for drivers injecting external forces (wind, pointer
    /// attraction) between ticks.
    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mode switches take effect at the start of the next tick.
    pub fn set_config(&mut self, config: SimConfig) {
        self.config = config;
    }

    /// The (position, neighbor image) pairs that contributed to cohesion in
    /// the last tick. Empty unless `cohesion_links` is switched on.
    pub fn cohesion_links(&self) -> &[(Vector2, Vector2)] {
        &self.cohesion_links
    }

    /// Per-tick outputs for rendering and export collaborators.
    pub fn snapshot(&self) -> FlockSnapshot {
        FlockSnapshot {
            width: self.domain.width(),
            height: self.domain.height(),
            boids: self
                .boids
                .iter()
                .map(|b| BoidState {
                    position: Position::new(b.position.x, b.position.y),
                    velocity: Position::new(b.velocity.x, b.velocity.y),
                    visible: b.visible,
                })
                .collect(),
        }
    }
}
