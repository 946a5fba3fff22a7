//! Kernel context wiring configuration into ready-to-use kernels.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kernel_core::{ChecksumEngine, KernelConfig, PasswordScheme, RandomOracle, RandomSampler};

use crate::loaders::{ConfigLoader, LoadResult};

/// Kernels built once at startup and handed to the systems that need them.
///
/// The sampler is created here exactly once and shared through `Arc`;
/// cloning the context shares the same engine.
#[derive(Clone, Debug)]
pub struct KernelContext {
    checksum: ChecksumEngine,
    sampler: Arc<RandomSampler>,
    password_scheme: PasswordScheme,
}

impl KernelContext {
    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            checksum: ChecksumEngine::new(config.max_message_size),
            sampler: Arc::new(RandomSampler::from_seed_option(config.rng_seed)),
            password_scheme: config.password_scheme,
        }
    }

    /// Load `config.toml` from `data_dir` and build the context.
    ///
    /// # Directory Structure
    ///
    /// ```text
    /// data_dir/
    /// └── config.toml
    /// ```
    pub fn load(data_dir: impl AsRef<Path>) -> LoadResult<Self> {
        let path: PathBuf = data_dir.as_ref().join("config.toml");
        let config = ConfigLoader::load(&path)?;
        Ok(Self::from_config(&config))
    }

    pub fn checksum(&self) -> &ChecksumEngine {
        &self.checksum
    }

    pub fn sampler(&self) -> &Arc<RandomSampler> {
        &self.sampler
    }

    /// The sampler as a trait object, for gameplay code written against
    /// [`RandomOracle`].
    pub fn random(&self) -> &dyn RandomOracle {
        self.sampler.as_ref()
    }

    pub fn password_scheme(&self) -> PasswordScheme {
        self.password_scheme
    }

    /// Compare a login attempt against the stored credential.
    pub fn verify_password(&self, plain: &str, stored: &str) -> bool {
        self.password_scheme.verify(plain, stored)
    }
}

impl Default for KernelContext {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}
