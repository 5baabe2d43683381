// crates/engine_ecs/src/world.rs

use crate::entity::Entity;
use crate::storage::SparseSet;

/// Owns a set of values addressed by generational `Entity` handles.
///
/// Freed slots are reused with a bumped generation, so a handle kept past
/// `despawn` resolves to `None` instead of aliasing the slot's next occupant.
pub struct EntityTable<T> {
    values: SparseSet<T>,
    free_indices: Vec<u32>,
    generations: Vec<u32>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            values: SparseSet::new(),
            free_indices: Vec::new(),
            generations: Vec::new(),
        }
    }

    pub fn spawn(&mut self, value: T) -> Entity {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            (self.generations.len() - 1) as u32
        };

        let generation = self.generations[index as usize];
        let entity = Entity::new(index, generation);
        self.values.insert(entity, value);
        entity
    }

    /// Remove the value and retire the handle. Returns `None` for handles that
    /// are already dead.
    pub fn despawn(&mut self, entity: Entity) -> Option<T> {
        let value = self.values.remove(entity)?;
        let slot = &mut self.generations[entity.index()];
        *slot = slot.wrapping_add(1);
        self.free_indices.push(entity.index() as u32);
        Some(value)
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.values.contains(entity)
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.values.get(entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.values.get_mut(entity)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iteration order is storage order, not spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.values.iter().map(|(e, v)| (*e, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.values.iter_mut().map(|(e, v)| (*e, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn despawned_handle_does_not_alias_reused_slot() {
        let mut table = EntityTable::new();
        let first = table.spawn("first");
        assert_eq!(table.despawn(first), Some("first"));

        let second = table.spawn("second");
        assert_eq!(second.index(), first.index());
        assert_ne!(second.generation(), first.generation());

        assert!(!table.is_alive(first));
        assert_eq!(table.get(first), None);
        assert_eq!(table.get(second), Some(&"second"));
    }

    #[test]
    fn double_despawn_is_a_no_op() {
        let mut table = EntityTable::new();
        let e = table.spawn(1);
        assert_eq!(table.despawn(e), Some(1));
        assert_eq!(table.despawn(e), None);
        assert!(table.is_empty());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut table = EntityTable::new();
        let e = table.spawn(1);
        *table.get_mut(e).unwrap() += 41;
        assert_eq!(table.get(e), Some(&42));
        assert_eq!(table.iter().count(), 1);
    }
}
