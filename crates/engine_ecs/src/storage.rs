// crates/engine_ecs/src/storage.rs
use crate::Entity;

pub struct SparseSet<T> {
    dense: Vec<T>,               // Tightly packed data (Cache friendly!)
    entities: Vec<Entity>,       // The entity that owns the data at 'dense[i]'
    sparse: Vec<Option<usize>>,  // Maps Entity Index -> Dense Index
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            sparse: Vec::new(),
        }
    }

    /// Insert or overwrite the value stored for `entity`'s slot.
    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index();

        // Resize sparse array if the entity index is too big
        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }

        if let Some(dense_index) = self.sparse[index] {
            self.dense[dense_index] = value;
            self.entities[dense_index] = entity;
        } else {
            let dense_index = self.dense.len();
            self.dense.push(value);
            self.entities.push(entity);
            self.sparse[index] = Some(dense_index);
        }
    }

    fn dense_index(&self, entity: Entity) -> Option<usize> {
        let dense_index = (*self.sparse.get(entity.index())?)?;
        // Check generation to ensure the handle still refers to this occupant.
        (self.entities[dense_index].generation() == entity.generation()).then_some(dense_index)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.dense_index(entity).is_some()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.dense_index(entity).map(|i| &self.dense[i])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.dense_index(entity).map(|i| &mut self.dense[i])
    }

    /// Remove with swap-remove so `dense` stays packed.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let dense_index = self.dense_index(entity)?;
        let last = self.dense.len() - 1;

        self.dense.swap(dense_index, last);
        self.entities.swap(dense_index, last);
        self.sparse[entity.index()] = None;

        if dense_index != last {
            let moved = self.entities[dense_index];
            self.sparse[moved.index()] = Some(dense_index);
        }

        self.entities.pop();
        self.dense.pop()
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    // Iterate over (Entity, Component) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &T)> {
        self.entities.iter().zip(self.dense.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.entities.iter().zip(self.dense.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_remaining_entries_reachable() {
        let mut set = SparseSet::new();
        let a = Entity::new(0, 0);
        let b = Entity::new(1, 0);
        let c = Entity::new(5, 0);
        set.insert(a, "a");
        set.insert(b, "b");
        set.insert(c, "c");

        assert_eq!(set.remove(a), Some("a"));
        assert_eq!(set.get(a), None);
        assert_eq!(set.get(b), Some(&"b"));
        assert_eq!(set.get(c), Some(&"c"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn stale_generation_is_not_found() {
        let mut set = SparseSet::new();
        set.insert(Entity::new(2, 1), 10);
        assert!(set.get(Entity::new(2, 0)).is_none());
        assert!(set.remove(Entity::new(2, 0)).is_none());
        assert_eq!(set.get(Entity::new(2, 1)), Some(&10));
    }
}
