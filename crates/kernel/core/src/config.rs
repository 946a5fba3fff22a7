use crate::checksum::NETWORK_MESSAGE_MAX_SIZE;
use crate::credentials::PasswordScheme;
use crate::error::ConfigError;

/// Tunable parameters shared by the kernels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    /// Checksum ceiling in bytes; longer buffers are rejected.
    pub max_message_size: usize,

    /// Storage scheme for account passwords.
    pub password_scheme: PasswordScheme,

    /// Fixed seed for the random sampler. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl KernelConfig {
    /// Largest ceiling the 16-bit length prefix can describe.
    pub const MAX_FRAMED_MESSAGE_SIZE: usize = u16::MAX as usize;

    pub fn new() -> Self {
        Self {
            max_message_size: NETWORK_MESSAGE_MAX_SIZE,
            password_scheme: PasswordScheme::default(),
            rng_seed: None,
        }
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_password_scheme(mut self, scheme: PasswordScheme) -> Self {
        self.password_scheme = scheme;
        self
    }

    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_size == 0 {
            return Err(ConfigError::ZeroMessageSize);
        }
        if self.max_message_size > Self::MAX_FRAMED_MESSAGE_SIZE {
            return Err(ConfigError::MessageSizeTooLarge {
                size: self.max_message_size,
                limit: Self::MAX_FRAMED_MESSAGE_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = KernelConfig::default();
        assert_eq!(config.max_message_size, NETWORK_MESSAGE_MAX_SIZE);
        assert_eq!(config.password_scheme, PasswordScheme::Sha1);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unusable_ceilings() {
        assert_eq!(
            KernelConfig::new().with_max_message_size(0).validate(),
            Err(ConfigError::ZeroMessageSize)
        );
        assert_eq!(
            KernelConfig::new().with_max_message_size(70_000).validate(),
            Err(ConfigError::MessageSizeTooLarge {
                size: 70_000,
                limit: 65_535,
            })
        );
    }
}
