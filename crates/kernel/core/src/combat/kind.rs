//! Combat type flags and their dense index encoding.

use crate::error::UnknownCombatType;

/// Number of real combat types (excluding [`CombatType::None`]).
pub const COMBAT_COUNT: usize = 12;

/// Number of dense indices, `None` included.
pub const COMBAT_INDEX_COUNT: usize = COMBAT_COUNT + 1;

/// Damage or healing category carried by an attack, spell or condition.
///
/// Each value is either zero or exactly one bit; combinations are expressed
/// with [`CombatTypes`](super::CombatTypes).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum CombatType {
    #[default]
    #[strum(to_string = "unknown", serialize = "none")]
    None = 0,
    #[strum(to_string = "physical")]
    Physical = 1 << 0,
    #[strum(to_string = "energy")]
    Energy = 1 << 1,
    #[strum(to_string = "earth")]
    Earth = 1 << 2,
    #[strum(to_string = "fire")]
    Fire = 1 << 3,
    #[strum(to_string = "undefined")]
    Undefined = 1 << 4,
    #[strum(to_string = "lifedrain")]
    LifeDrain = 1 << 5,
    #[strum(to_string = "manadrain")]
    ManaDrain = 1 << 6,
    #[strum(to_string = "healing")]
    Healing = 1 << 7,
    #[strum(to_string = "drown")]
    Drown = 1 << 8,
    #[strum(to_string = "ice")]
    Ice = 1 << 9,
    #[strum(to_string = "holy")]
    Holy = 1 << 10,
    #[strum(to_string = "death")]
    Death = 1 << 11,
}

impl CombatType {
    /// The twelve real combat types in dense index order (indices `1..=12`).
    pub const DAMAGE_KINDS: [CombatType; COMBAT_COUNT] = [
        CombatType::Physical,
        CombatType::Energy,
        CombatType::Earth,
        CombatType::Fire,
        CombatType::Undefined,
        CombatType::LifeDrain,
        CombatType::ManaDrain,
        CombatType::Healing,
        CombatType::Drown,
        CombatType::Ice,
        CombatType::Holy,
        CombatType::Death,
    ];

    /// Raw flag value.
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Dense index in `0..COMBAT_INDEX_COUNT`.
    ///
    /// The table is spelled out so that resistance tables keep their layout
    /// if bit assignments ever change.
    pub const fn to_index(self) -> usize {
        match self {
            CombatType::None => 0,
            CombatType::Physical => 1,
            CombatType::Energy => 2,
            CombatType::Earth => 3,
            CombatType::Fire => 4,
            CombatType::Undefined => 5,
            CombatType::LifeDrain => 6,
            CombatType::ManaDrain => 7,
            CombatType::Healing => 8,
            CombatType::Drown => 9,
            CombatType::Ice => 10,
            CombatType::Holy => 11,
            CombatType::Death => 12,
        }
    }

    /// Inverse of [`Self::to_index`].
    ///
    /// Index `0` is [`CombatType::None`], so the two functions form a
    /// bijection over `0..COMBAT_INDEX_COUNT`. Indices past the end also
    /// yield [`CombatType::None`].
    pub fn from_index(index: usize) -> CombatType {
        if index == 0 || index > COMBAT_COUNT {
            return CombatType::None;
        }
        CombatType::from_repr(1 << (index - 1)).unwrap_or(CombatType::None)
    }

    /// Name lookup used by monster and spell definitions.
    ///
    /// Unknown names resolve to [`CombatType::None`].
    pub fn from_name(name: &str) -> CombatType {
        name.parse().unwrap_or(CombatType::None)
    }

    pub const fn is_none(self) -> bool {
        matches!(self, CombatType::None)
    }

    /// True for the categories that restore rather than remove health.
    pub const fn is_healing(self) -> bool {
        matches!(self, CombatType::Healing)
    }
}

impl TryFrom<u16> for CombatType {
    type Error = UnknownCombatType;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        CombatType::from_repr(bits).ok_or(UnknownCombatType(bits))
    }
}

impl From<CombatType> for u16 {
    fn from(kind: CombatType) -> Self {
        kind.bits()
    }
}

/// Dense index of a raw combat flag.
///
/// Values that are not one of the thirteen defined flags map to index `0`.
pub fn combat_index_of_raw(bits: u16) -> usize {
    CombatType::from_repr(bits).map_or(0, CombatType::to_index)
}
