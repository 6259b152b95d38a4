// 👤 Customer Entity - sequential identity + ordered list of owned account numbers

use serde::{Deserialize, Serialize};
use std::fmt;

pub type CustomerId = u64;

// ============================================================================
// CUSTOMER ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Sequential id, `None` until the customer store saves it
    pub id: Option<CustomerId>,

    pub name: String,
    pub email: String,
    pub age: u32,

    /// Numbers of the accounts this customer owns, in attachment order
    #[serde(default)]
    pub accounts: Vec<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Customer {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
            accounts: Vec::new(),
        }
    }

    pub fn owns(&self, number: &str) -> bool {
        self.accounts.iter().any(|n| n == number)
    }

    /// Append an account number; returns false if it was already listed
    pub fn attach(&mut self, number: &str) -> bool {
        if self.owns(number) {
            return false;
        }
        self.accounts.push(number.to_string());
        true
    }

    /// Remove an account number; returns false if it was not listed
    pub fn detach(&mut self, number: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|n| n != number);
        self.accounts.len() != before
    }

    /// Copy the editable fields (name, email, age) from another record
    pub fn merge_fields(&mut self, other: &Customer) {
        self.name = other.name.clone();
        self.email = other.email.clone();
        self.age = other.age;
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer(id={:?}, name={}, email={}, age={}, accounts={})",
            self.id,
            self.name,
            self.email,
            self.age,
            self.accounts.len()
        )
    }
}

// ============================================================================
// PARTIAL UPDATE
// ============================================================================

/// Editable fields of a customer; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl CustomerPatch {
    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(age) = self.age {
            customer.age = age;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
