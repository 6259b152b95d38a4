// ❗ Error taxonomy shared by stores, operations and synchronization
//
// Two kinds of failure only:
// - NotFound: unknown customer id or account number
// - InvalidArgument: bad amount, same-account transfer, duplicate, unknown owner

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Lookup by id or number found nothing
    #[error("{entity} with {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// Request rejected before any state was touched
    #[error("{0}")]
    InvalidArgument(String),
}

impl BankError {
    pub fn account_not_found(number: &str) -> Self {
        BankError::NotFound {
            entity: "Account",
            key: format!("number {}", number),
        }
    }

    pub fn account_id_not_found(id: u64) -> Self {
        BankError::NotFound {
            entity: "Account",
            key: format!("id {}", id),
        }
    }

    pub fn customer_not_found(id: u64) -> Self {
        BankError::NotFound {
            entity: "Customer",
            key: format!("id {}", id),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        BankError::InvalidArgument(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BankError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
