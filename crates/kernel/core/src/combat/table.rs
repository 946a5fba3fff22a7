use std::ops::{Index, IndexMut};

use super::{COMBAT_INDEX_COUNT, CombatType};

/// Array-backed table with one slot per combat type, `None` included.
///
/// Slots are addressed through [`CombatType::to_index`], which keeps
/// per-type resistance and modifier tables dense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTable<T> {
    slots: [T; COMBAT_INDEX_COUNT],
}

impl<T> CombatTable<T> {
    pub const fn from_slots(slots: [T; COMBAT_INDEX_COUNT]) -> Self {
        Self { slots }
    }

    pub fn get(&self, kind: CombatType) -> &T {
        &self.slots[kind.to_index()]
    }

    pub fn set(&mut self, kind: CombatType, value: T) {
        self.slots[kind.to_index()] = value;
    }

    /// Every slot paired with its combat type, in dense index order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatType, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, value)| (CombatType::from_index(index), value))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Copy> CombatTable<T> {
    /// Table with every slot set to `value`.
    pub const fn filled(value: T) -> Self {
        Self {
            slots: [value; COMBAT_INDEX_COUNT],
        }
    }
}

impl<T: Default> Default for CombatTable<T> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T> Index<CombatType> for CombatTable<T> {
    type Output = T;

    fn index(&self, kind: CombatType) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<CombatType> for CombatTable<T> {
    fn index_mut(&mut self, kind: CombatType) -> &mut T {
        &mut self.slots[kind.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_dense_index() {
        let mut resistances = CombatTable::<i32>::default();
        resistances[CombatType::Fire] = 50;
        resistances.set(CombatType::Death, -25);

        assert_eq!(resistances.as_slice()[4], 50);
        assert_eq!(resistances.as_slice()[12], -25);
        assert_eq!(*resistances.get(CombatType::Ice), 0);
    }

    #[test]
    fn iteration_visits_every_type_once() {
        let table = CombatTable::filled(1u8);
        let kinds: Vec<_> = table.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds.len(), COMBAT_INDEX_COUNT);
        assert_eq!(kinds[0], CombatType::None);
        assert_eq!(&kinds[1..], &CombatType::DAMAGE_KINDS);
    }
}
