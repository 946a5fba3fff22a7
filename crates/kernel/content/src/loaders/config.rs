//! Kernel configuration loader.

use std::path::Path;

use kernel_core::KernelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for kernel configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Missing keys take their [`KernelConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<KernelConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            max_message_size = config.max_message_size,
            password_scheme = %config.password_scheme,
            seeded = config.rng_seed.is_some(),
            "loaded kernel config"
        );

        Ok(config)
    }

    /// Parse and validate config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<KernelConfig> {
        let config: KernelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid kernel config: {}", e))?;

        Ok(config)
    }
}
