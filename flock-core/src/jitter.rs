//! Per-boid Gaussian perturbation of behavior parameters, applied once at
//! creation time. Keeping it outside the tick path means a flock's motion is
//! reproducible from its settings alone.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use flock_shared::BoidSettings;

/// Standard deviations for the per-boid parameter draws. A draw that comes
/// back non-positive falls back to the base value, so jitter can never
/// produce invalid settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterSpec {
    pub distance_sigma: f32,
    pub weight_sigma: f32,
}

impl Default for JitterSpec {
    fn default() -> Self {
        Self {
            distance_sigma: 0.005,
            weight_sigma: 0.01,
        }
    }
}

impl JitterSpec {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, base: &BoidSettings) -> BoidSettings {
        let mut settings = *base;
        settings.separation_distance =
            perturbed(rng, base.separation_distance, self.distance_sigma);
        settings.alignment_distance = perturbed(rng, base.alignment_distance, self.distance_sigma);
        settings.cohesion_distance = perturbed(rng, base.cohesion_distance, self.distance_sigma);
        settings.separation_weight = perturbed(rng, base.separation_weight, self.weight_sigma);
        settings.alignment_weight = perturbed(rng, base.alignment_weight, self.weight_sigma);
        settings.cohesion_weight = perturbed(rng, base.cohesion_weight, self.weight_sigma);
        settings
    }
}

fn perturbed<R: Rng + ?Sized>(rng: &mut R, mean: f32, sigma: f32) -> f32 {
    let drawn = match Normal::new(mean, sigma) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mean,
    };
    if drawn > 0.0 {
        drawn
    } else {
        mean
    }
}
