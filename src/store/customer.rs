// 👥 Customer Store - customers indexed by sequential id

use crate::entities::{Customer, CustomerId};
use crate::error::{BankError, Result};
use crate::seed;
use crate::store::Store;
use std::collections::BTreeMap;
use tracing::{debug, error, info};

pub struct CustomerStore {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

impl CustomerStore {
    /// Create new empty store
    pub fn new() -> Self {
        CustomerStore {
            customers: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store holding the five seed customers (ids 1..=5)
    pub fn seeded() -> Self {
        let mut store = CustomerStore::new();
        for customer in seed::default_customers() {
            store.insert_new(customer);
        }
        info!(count = store.len(), "default customers loaded");
        store
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn contains(&self, id: CustomerId) -> bool {
        self.customers.contains_key(&id)
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Mutable access for the synchronization layer
    pub fn get_mut(&mut self, id: CustomerId) -> Result<&mut Customer> {
        self.customers
            .get_mut(&id)
            .ok_or_else(|| BankError::customer_not_found(id))
    }

    fn insert_new(&mut self, mut customer: Customer) -> Customer {
        let id = self.next_id;
        self.next_id += 1;
        customer.id = Some(id);
        self.customers.insert(id, customer.clone());
        info!(customer_id = id, name = %customer.name, "customer saved");
        customer
    }
}

impl Store for CustomerStore {
    type Entity = Customer;
    type Id = CustomerId;

    fn save(&mut self, customer: Customer) -> Result<Customer> {
        match customer.id {
            Some(id) if self.customers.contains_key(&id) => {
                self.customers.insert(id, customer.clone());
                debug!(customer_id = id, "customer persisted");
                Ok(customer)
            }
            _ => Ok(self.insert_new(customer)),
        }
    }

    fn delete(&mut self, customer: &Customer) -> bool {
        match customer.id {
            Some(id) => self.delete_by_id(id),
            None => false,
        }
    }

    fn delete_by_id(&mut self, id: CustomerId) -> bool {
        if self.customers.remove(&id).is_some() {
            info!(customer_id = id, "customer deleted");
            true
        } else {
            error!(customer_id = id, "failed to delete customer");
            false
        }
    }

    fn find_all(&self) -> Vec<Customer> {
        debug!(count = self.customers.len(), "retrieved all customers");
        self.customers.values().cloned().collect()
    }

    fn get_by_id(&self, id: CustomerId) -> Result<Customer> {
        self.customers
            .get(&id)
            .cloned()
            .ok_or_else(|| BankError::customer_not_found(id))
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = CustomerStore::seeded();
        let all = store.find_all();
        assert_eq!(all.len(), 5);
        let ids: Vec<_> = all.iter().map(|c| c.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.get_by_id(2).unwrap().name, "Alice Smith");
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let mut store = CustomerStore::new();
        let a = store.save(Customer::new("A", "a@example.com", 20)).unwrap();
        let b = store.save(Customer::new("B", "b@example.com", 30)).unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn test_save_existing_overwrites() {
        let mut store = CustomerStore::new();
        let mut a = store.save(Customer::new("A", "a@example.com", 20)).unwrap();
        a.name = "Renamed".to_string();
        let saved = store.save(a).unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().name, "Renamed");
    }

    #[test]
    fn test_save_with_unknown_id_gets_fresh_id() {
        let mut store = CustomerStore::seeded();
        let mut stranger = Customer::new("X", "x@example.com", 50);
        stranger.id = Some(99);
        let saved = store.save(stranger).unwrap();
        assert_eq!(saved.id, Some(6));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = CustomerStore::seeded();
        assert!(store.delete_by_id(5));
        let saved = store.save(Customer::new("New", "new@example.com", 22)).unwrap();
        assert_eq!(saved.id, Some(6));
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store = CustomerStore::new();
        let err = store.get_by_id(1).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_delete_and_bulk_operations() {
        let mut store = CustomerStore::new();
        let saved = store
            .save_all(vec![
                Customer::new("A", "a@example.com", 20),
                Customer::new("B", "b@example.com", 30),
                Customer::new("C", "c@example.com", 40),
            ])
            .unwrap();
        assert_eq!(store.len(), 3);

        assert!(store.delete(&saved[0]));
        assert!(!store.delete(&saved[0]));
        assert!(!store.delete(&Customer::new("unsaved", "u@example.com", 1)));

        assert_eq!(store.delete_all(&saved), 2);
        assert!(store.is_empty());
    }
}
