//! Typed errors for conversions from raw wire values and configuration.
//!
//! The kernels themselves never fail: oversize checksum input, inverted
//! ranges and unknown combat indices all resolve to documented sentinels.
//! Errors only appear where a caller explicitly asks for a fallible
//! conversion (`TryFrom`) or hands in a configuration to validate.

/// Raw direction byte that does not name one of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction value {0}")]
pub struct UnknownDirection(pub u8);

/// Raw combat flag that is neither zero nor one of the twelve defined bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown combat type flag {0:#06x}")]
pub struct UnknownCombatType(pub u16);

/// Rejected [`KernelConfig`](crate::KernelConfig) values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A zero ceiling would reject every message, including empty ones.
    #[error("max_message_size must be greater than zero")]
    ZeroMessageSize,

    /// The network layer frames messages with a 16-bit length prefix.
    #[error("max_message_size {size} exceeds the framing limit of {limit} bytes")]
    MessageSizeTooLarge { size: usize, limit: usize },
}
