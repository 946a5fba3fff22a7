//! Configuration loading and startup wiring for the server kernels.
//!
//! This crate reads `KernelConfig` from TOML and builds a [`KernelContext`]
//! that owns the checksum ceiling, the shared random sampler, and the
//! password scheme. Systems receive the context explicitly instead of
//! reaching for process-wide globals.

pub mod loaders;

pub use loaders::{ConfigLoader, KernelContext, LoadResult};
