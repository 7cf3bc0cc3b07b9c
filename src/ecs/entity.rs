//! Entity implementation

/// Entity identifier
///
/// Entities are plain identities owned by the application; attaching a
/// light component to one never transfers ownership of the entity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Allocator for entity identifiers
#[derive(Debug, Default)]
pub struct EntityRegistry {
    next_id: u32,
}

impl EntityRegistry {
    /// Create a new registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity
    pub fn create(&mut self) -> Entity {
        let entity = Entity::new(self.next_id);
        self.next_id += 1;
        entity
    }
}
