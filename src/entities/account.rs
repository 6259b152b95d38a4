// 💳 Account Entity - opaque number identity + owner reference
//
// "The sequential id is assigned by the store, the number is the account's identity"
//
// - number: UUID v4 generated at construction, never changes
// - id: assigned by AccountStore on first save
// - customer_id: the owning customer (one source of truth, no copied fields)

use crate::entities::customer::CustomerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type AccountId = u64;

// ============================================================================
// CURRENCY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    UAH,
    CHF,
    GBP,
}

impl Currency {
    /// Declaration order; seed customers pick their currency by position
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::UAH,
        Currency::CHF,
        Currency::GBP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::UAH => "UAH",
            Currency::CHF => "CHF",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown currency: {}", s))
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// Identity: number (equality and hashing use it, nothing else)
/// Values: currency, balance (balance changes through operations)
/// Relationship: customer_id → Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Sequential id, `None` until the account store saves it
    pub id: Option<AccountId>,

    number: String,

    pub currency: Currency,

    /// Non-negative by convention, enforced by the operations layer only
    pub balance: f64,

    /// Owning customer
    pub customer_id: CustomerId,
}

impl Account {
    /// Create a zero-balance account with a fresh number
    pub fn new(currency: Currency, customer_id: CustomerId) -> Self {
        Account {
            id: None,
            number: uuid::Uuid::new_v4().to_string(),
            currency,
            balance: 0.0,
            customer_id,
        }
    }

    /// Same as `new`, but with an opening balance
    pub fn with_balance(currency: Currency, customer_id: CustomerId, balance: f64) -> Self {
        Account {
            balance,
            ..Account::new(currency, customer_id)
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn belongs_to(&self, customer_id: CustomerId) -> bool {
        self.customer_id == customer_id
    }

    pub fn can_cover(&self, amount: f64) -> bool {
        self.balance >= amount
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Account {}

impl std::hash::Hash for Account {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account{{id={:?}, number='{}', currency={}, balance={}}}",
            self.id, self.number, self.currency, self.balance
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new(Currency::EUR, 2);

        assert!(account.id.is_none());
        assert_eq!(account.currency, Currency::EUR);
        assert_eq!(account.balance, 0.0);
        assert_eq!(account.customer_id, 2);
        assert!(uuid::Uuid::parse_str(account.number()).is_ok());
    }

    #[test]
    fn test_numbers_are_unique() {
        let a = Account::new(Currency::USD, 1);
        let b = Account::new(Currency::USD, 1);
        assert_ne!(a.number(), b.number());
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_by_number_only() {
        let a = Account::with_balance(Currency::USD, 1, 10.0);
        let mut b = a.clone();
        b.balance = 99.0;
        b.id = Some(42);
        b.customer_id = 5;
        assert_eq!(a, b);
    }

    #[test]
    fn test_can_cover() {
        let account = Account::with_balance(Currency::GBP, 1, 50.0);
        assert!(account.can_cover(50.0));
        assert!(!account.can_cover(50.01));
    }

    #[test]
    fn test_currency_parse_and_serialize() {
        assert_eq!("uah".parse::<Currency>().unwrap(), Currency::UAH);
        assert!("XYZ".parse::<Currency>().is_err());
        assert_eq!(serde_json::to_string(&Currency::CHF).unwrap(), "\"CHF\"");
        let parsed: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Currency::GBP);
    }
}
