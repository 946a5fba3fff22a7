use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

use super::RandomOracle;

/// Centre of the bell curve on the unit interval.
const BELL_MEAN: f32 = 0.5;

/// Spread of the bell curve; about 95% of draws land in `[0, 1]` before clamping.
const BELL_STD_DEV: f32 = 0.25;

/// Uniform, bell-weighted and Bernoulli sampling over one shared engine.
///
/// All draws serialize through a single mutex, so every caller consumes the
/// same stream. Share one sampler with `Arc` rather than constructing one
/// per call site. Draw order across threads is unspecified.
pub struct RandomSampler<R = StdRng> {
    engine: Mutex<R>,
}

impl RandomSampler<StdRng> {
    /// Sampler seeded once from operating-system entropy.
    pub fn from_entropy() -> Self {
        tracing::debug!("random sampler seeded from entropy");
        Self::with_engine(StdRng::from_entropy())
    }

    /// Sampler with a fixed seed, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "random sampler seeded from configuration");
        Self::with_engine(StdRng::seed_from_u64(seed))
    }

    /// Uses `seed` when present and entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomSampler<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> RandomSampler<R> {
    pub fn with_engine(engine: R) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    // A panic mid-draw cannot leave the engine in an invalid state.
    fn engine(&self) -> MutexGuard<'_, R> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform draw from the inclusive range between `min` and `max`.
    pub fn uniform(&self, min: i32, max: i32) -> i32 {
        let (min, max) = match ordered(min, max) {
            Ok(range) => range,
            Err(constant) => return constant,
        };

        Uniform::new_inclusive(min, max).sample(&mut *self.engine())
    }

    /// Bell-weighted draw from the inclusive range between `min` and `max`.
    ///
    /// A `N(0.5, 0.25)` sample is clamped to `[0, 1]` and scaled onto the
    /// range, truncating toward `min`. The extremes are reachable but rare.
    pub fn weighted(&self, min: i32, max: i32) -> i32 {
        let (min, max) = match ordered(min, max) {
            Ok(range) => range,
            Err(constant) => return constant,
        };

        let z: f32 = StandardNormal.sample(&mut *self.engine());
        let unit = (BELL_MEAN + BELL_STD_DEV * z).clamp(0.0, 1.0);

        let span = i64::from(max) - i64::from(min);
        let offset = (f64::from(unit) * span as f64) as i64;
        (i64::from(min) + offset).clamp(i64::from(min), i64::from(max)) as i32
    }

    /// Bernoulli trial that succeeds with `probability`.
    ///
    /// Probabilities outside `[0, 1]` are clamped; NaN never succeeds.
    pub fn bernoulli(&self, probability: f64) -> bool {
        let p = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        if p != probability {
            tracing::warn!(probability, clamped = p, "bernoulli probability out of range");
        }

        self.engine().gen_bool(p)
    }
}

impl<R: RngCore + Send> RandomOracle for RandomSampler<R> {
    fn uniform(&self, min: i32, max: i32) -> i32 {
        RandomSampler::uniform(self, min, max)
    }

    fn weighted(&self, min: i32, max: i32) -> i32 {
        RandomSampler::weighted(self, min, max)
    }

    fn bernoulli(&self, probability: f64) -> bool {
        RandomSampler::bernoulli(self, probability)
    }
}

impl<R> fmt::Debug for RandomSampler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSampler").finish_non_exhaustive()
    }
}

/// Normalizes a caller-supplied range.
///
/// `Err` carries the constant result of a degenerate `min == max` range,
/// which must be returned without touching the engine.
fn ordered(min: i32, max: i32) -> Result<(i32, i32), i32> {
    match min.cmp(&max) {
        std::cmp::Ordering::Equal => Err(min),
        std::cmp::Ordering::Less => Ok((min, max)),
        std::cmp::Ordering::Greater => Ok((max, min)),
    }
}
