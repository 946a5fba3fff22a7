//! Combat type flags, flag sets, and the dense index codec.
//!
//! Combat types travel as single-bit flags but are stored in dense tables.
//! [`CombatType::to_index`] and [`CombatType::from_index`] convert between
//! the two spaces; index `0` belongs to [`CombatType::None`].

mod kind;
mod mask;
mod table;

pub use kind::{COMBAT_COUNT, COMBAT_INDEX_COUNT, CombatType, combat_index_of_raw};
pub use mask::CombatTypes;
pub use table::CombatTable;
