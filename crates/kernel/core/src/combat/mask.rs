use bitflags::bitflags;

use super::CombatType;

bitflags! {
    /// Set of combat types, e.g. a creature's immunities.
    ///
    /// Bits line up with the [`CombatType`] discriminants, so a single type
    /// converts losslessly into a one-element set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatTypes: u16 {
        const PHYSICAL   = 1 << 0;
        const ENERGY     = 1 << 1;
        const EARTH      = 1 << 2;
        const FIRE       = 1 << 3;
        const UNDEFINED  = 1 << 4;
        const LIFE_DRAIN = 1 << 5;
        const MANA_DRAIN = 1 << 6;
        const HEALING    = 1 << 7;
        const DROWN      = 1 << 8;
        const ICE        = 1 << 9;
        const HOLY       = 1 << 10;
        const DEATH      = 1 << 11;
    }
}

impl CombatTypes {
    /// True when `kind` is in the set. [`CombatType::None`] is never a member.
    pub fn has(self, kind: CombatType) -> bool {
        !kind.is_none() && self.contains(CombatTypes::from(kind))
    }

    /// Members of the set in dense index order.
    pub fn kinds(self) -> impl Iterator<Item = CombatType> {
        CombatType::DAMAGE_KINDS
            .into_iter()
            .filter(move |kind| self.has(*kind))
    }
}

impl From<CombatType> for CombatTypes {
    fn from(kind: CombatType) -> Self {
        CombatTypes::from_bits_truncate(kind.bits())
    }
}

impl FromIterator<CombatType> for CombatTypes {
    fn from_iter<I: IntoIterator<Item = CombatType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CombatTypes::empty(), |set, kind| set | CombatTypes::from(kind))
    }
}
