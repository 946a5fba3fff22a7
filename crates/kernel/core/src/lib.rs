//! Deterministic computation kernels shared by the game server.
//!
//! `kernel-core` holds the small, bit-exact primitives that gameplay and
//! networking code lean on everywhere: the message checksum, compass
//! direction math, the combat type index codec, and the shared random
//! sampler. Everything except [`RandomSampler`] is a pure function.
pub mod checksum;
pub mod combat;
pub mod config;
pub mod credentials;
pub mod error;
pub mod grid;
pub mod random;

pub use checksum::{CHECKSUM_REJECTED, ChecksumEngine, NETWORK_MESSAGE_MAX_SIZE, checksum};
pub use combat::{
    COMBAT_COUNT, COMBAT_INDEX_COUNT, CombatTable, CombatType, CombatTypes, combat_index_of_raw,
};
pub use config::KernelConfig;
pub use credentials::PasswordScheme;
pub use error::{ConfigError, UnknownCombatType, UnknownDirection};
pub use grid::{Direction, Position, direction_to, step, step_raw};
pub use random::{RandomOracle, RandomSampler};
