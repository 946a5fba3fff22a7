//! Gameplay randomness over a single, once-seeded engine.
//!
//! [`RandomSampler`] owns the engine behind a mutex and is shared by
//! reference or `Arc`. Gameplay code should depend on [`RandomOracle`]
//! so tests can substitute a seeded sampler.

mod oracle;
mod sampler;

pub use oracle::RandomOracle;
pub use sampler::RandomSampler;
