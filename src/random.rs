//! Seedable pseudo-random array generation.
//!
//! A [`Generator`] owns its state, so independent generators never influence
//! each other. The free functions in this module draw from a process-wide
//! default generator that seeds itself from OS entropy on first use and can
//! be reseeded with [`seed`].

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{Array, Result, ValueError};

static DEFAULT: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::from_entropy()));

/// A pseudo-random stream backed by xoshiro256++.
#[derive(Clone, Debug)]
pub struct Generator {
    rng: Xoshiro256PlusPlus,
}

impl Generator {
    /// The same seed always reproduces the same sequence of draws.
    pub fn seed_from_u64(seed: u64) -> Self {
        log::debug!("seeding generator with {}", seed);
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        log::debug!("seeding generator from OS entropy");
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Samples drawn independently and uniformly from `[0, 1)`.
    pub fn uniform(&mut self, shape: &[usize]) -> Array<f64> {
        Array::from_shape_simple_fn(shape, || self.rng.gen::<f64>())
    }

    /// Samples from the standard normal distribution.
    pub fn normal(&mut self, shape: &[usize]) -> Array<f64> {
        Array::from_shape_simple_fn(shape, || self.rng.sample(StandardNormal))
    }

    /// Integers drawn uniformly from `[low, high)`.
    pub fn randint(&mut self, low: i64, high: i64, shape: &[usize]) -> Result<Array<i64>> {
        let dist = int_range(low, high)?;
        Ok(Array::from_shape_simple_fn(shape, || self.rng.sample(&dist)))
    }

    /// A single integer drawn uniformly from `[low, high)`.
    pub fn randint_scalar(&mut self, low: i64, high: i64) -> Result<i64> {
        let dist = int_range(low, high)?;
        Ok(self.rng.sample(dist))
    }
}

fn int_range(low: i64, high: i64) -> Result<Uniform<i64>> {
    if high <= low {
        return Err(ValueError::EmptyRange { low, high }.into());
    }
    Ok(Uniform::new(low, high))
}

/// Runs `f` with exclusive access to the default generator.
pub fn with_default<F, R>(f: F) -> R
where
    F: FnOnce(&mut Generator) -> R,
{
    let mut guard = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Reseeds the default generator.
pub fn seed(seed: u64) {
    with_default(|rng| *rng = Generator::seed_from_u64(seed));
}

/// Uniform `[0, 1)` samples from the default generator.
pub fn rand(shape: &[usize]) -> Array<f64> {
    with_default(|rng| rng.uniform(shape))
}

/// Standard normal samples from the default generator.
pub fn randn(shape: &[usize]) -> Array<f64> {
    with_default(|rng| rng.normal(shape))
}

/// Integers in `[low, high)` from the default generator.
pub fn randint(low: i64, high: i64, shape: &[usize]) -> Result<Array<i64>> {
    with_default(|rng| rng.randint(low, high, shape))
}

pub fn randint_scalar(low: i64, high: i64) -> Result<i64> {
    with_default(|rng| rng.randint_scalar(low, high))
}
