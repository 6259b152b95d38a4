// 🌱 Default data loaded when the stores start up
//
// Five named customers; each gets one zero-balance account whose currency is
// the Currency at the same position as the customer's name.

use crate::entities::{Currency, Customer};
use crate::error::{BankError, Result};

pub const NAMES: [&str; 5] = [
    "John Doe",
    "Alice Smith",
    "Michael Johnson",
    "Emily Brown",
    "Daniel Wilson",
];

/// "Alice Smith" → "alicesmith@example.com"
pub fn default_email(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', ""))
}

pub fn default_age(name: &str) -> u32 {
    (name.len() % 50 + 20) as u32
}

/// Unsaved customer records for every seed name, in order
pub fn default_customers() -> Vec<Customer> {
    NAMES
        .iter()
        .map(|name| Customer::new(*name, default_email(name), default_age(name)))
        .collect()
}

/// Currency for a seed customer, by the position of its name
pub fn currency_for(name: &str) -> Result<Currency> {
    NAMES
        .iter()
        .position(|n| *n == name)
        .and_then(|i| Currency::ALL.get(i).copied())
        .ok_or_else(|| BankError::invalid(format!("Unknown customer name: {}", name)))
}
