// In-memory stores
//
// Both stores share one CRUD contract. Each owns its own id counter
// (starting at 1) and keeps records ordered by id.

pub mod account;
pub mod customer;

pub use account::AccountStore;
pub use customer::CustomerStore;

use crate::error::Result;

/// CRUD contract shared by the customer and account stores
pub trait Store {
    type Entity;
    type Id: Copy;

    /// Insert a new entity, assigning its id
    ///
    /// Stores may also overwrite a record they already hold (customers) or
    /// reject it (accounts, keyed by number).
    fn save(&mut self, entity: Self::Entity) -> Result<Self::Entity>;

    /// Remove by identity; false when nothing matched
    fn delete(&mut self, entity: &Self::Entity) -> bool;

    fn delete_by_id(&mut self, id: Self::Id) -> bool;

    /// All entities, ordered by id
    fn find_all(&self) -> Vec<Self::Entity>;

    /// NotFound when absent
    fn get_by_id(&self, id: Self::Id) -> Result<Self::Entity>;

    fn save_all(&mut self, entities: Vec<Self::Entity>) -> Result<Vec<Self::Entity>> {
        entities.into_iter().map(|e| self.save(e)).collect()
    }

    /// Returns how many of the given entities were actually removed
    fn delete_all(&mut self, entities: &[Self::Entity]) -> usize {
        entities.iter().filter(|e| self.delete(e)).count()
    }
}
