// 🔗 Customer/Account Synchronization
//
// Keeps each customer's `accounts` list consistent with the account store:
// - create_account / delete_account edit both sides
// - delete_customer cascades to every account owned by the customer
// - update_customer fans the new fields out to the customer's accounts
// - assign_accounts_to_customers reconciles the lists from the store
//
// Multi-step operations are not rolled back on a late failure.

use crate::bank::Bank;
use crate::entities::{Account, Currency, Customer, CustomerId};
use crate::error::{BankError, Result};
use crate::store::Store;
use std::str::FromStr;
use tracing::{debug, info, warn};

// ============================================================================
// SYNC POLICY
// ============================================================================

/// When `assign_accounts_to_customers` is allowed to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Reconcile on every call (idempotent)
    #[default]
    Always,

    /// Stop reconciling for good once any account was deleted through
    /// `delete_account`
    LatchOnDelete,
}

impl FromStr for SyncPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(SyncPolicy::Always),
            "latch" | "latch-on-delete" => Ok(SyncPolicy::LatchOnDelete),
            other => Err(format!("expected 'always' or 'latch', got '{}'", other)),
        }
    }
}

// ============================================================================
// SYNCHRONIZATION
// ============================================================================

impl Bank {
    /// Open a new account for an existing customer
    pub fn create_account(
        &mut self,
        customer_id: CustomerId,
        currency: Currency,
        amount: f64,
    ) -> Result<Account> {
        if !self.customers.contains(customer_id) {
            return Err(BankError::invalid(format!(
                "Customer not found with id: {}",
                customer_id
            )));
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(BankError::invalid(
                "Opening balance must be a non-negative number",
            ));
        }

        let account = Account::with_balance(currency, customer_id, amount);

        if self.customers.get_mut(customer_id)?.owns(account.number()) {
            return Err(BankError::invalid(format!(
                "Account with number {} already exists for customer with id: {}",
                account.number(),
                customer_id
            )));
        }

        let saved = self.accounts.save(account)?;
        self.customers.get_mut(customer_id)?.attach(saved.number());
        info!(customer_id, number = saved.number(), %currency, "account created");
        Ok(saved)
    }

    /// Remove one of a customer's accounts from the customer and the store
    pub fn delete_account(&mut self, customer_id: CustomerId, number: &str) -> Result<()> {
        let customer = self
            .customers
            .get_mut(customer_id)
            .map_err(|_| BankError::invalid(format!("Customer not found with id: {}", customer_id)))?;

        if !customer.detach(number) {
            return Err(BankError::invalid(format!(
                "Account with number {} not found",
                number
            )));
        }

        if !self.accounts.contains_number(number) {
            warn!(customer_id, number, "listed account was already gone from the store");
            return Ok(());
        }

        self.accounts.delete_by_number(number);
        self.accounts_modified = true;
        info!(customer_id, number, "account removed from customer");
        Ok(())
    }

    /// Delete a customer together with every account it owns
    pub fn delete_customer(&mut self, customer_id: CustomerId) -> Result<bool> {
        let customer = self.customers.get_by_id(customer_id)?;

        for number in &customer.accounts {
            self.accounts.delete_by_number(number);
        }

        let deleted = self.customers.delete_by_id(customer_id);

        if deleted {
            // accounts owned by the customer but never attached to its list
            let dangling = self.accounts.by_customer(customer_id);
            let removed = self.accounts.delete_all(&dangling);
            if removed > 0 {
                warn!(customer_id, removed, "removed accounts left without an owner");
            }
        }

        Ok(deleted)
    }

    /// Merge name/email/age into the stored customer and fan them out
    pub fn update_customer(&mut self, customer: &Customer) -> Result<Customer> {
        let id = customer
            .id
            .ok_or_else(|| BankError::invalid("Customer has no id"))?;

        let existing = self.customers.get_mut(id)?;
        existing.merge_fields(customer);
        let merged = existing.clone();

        let updated = self.accounts.update_customer_data(&merged);
        let saved = self.customers.save(merged)?;

        for account in &updated {
            debug!(customer_id = id, %account, "updated account for customer");
        }
        Ok(saved)
    }

    /// Attach every stored account to its owner's list; returns how many
    /// numbers were attached
    pub fn assign_accounts_to_customers(&mut self) -> usize {
        if self.policy == SyncPolicy::LatchOnDelete && self.accounts_modified {
            warn!("skipping account assignment as accounts were modified");
            return 0;
        }

        let mut attached = 0;
        for account in self.accounts.find_all() {
            let Ok(customer) = self.customers.get_mut(account.customer_id) else {
                continue;
            };
            if customer.attach(account.number()) {
                attached += 1;
            } else {
                debug!(
                    number = account.number(),
                    customer_id = account.customer_id,
                    "account already listed for customer"
                );
            }
        }

        if attached > 0 {
            info!(attached, "accounts assigned to customers");
        }
        attached
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(policy: SyncPolicy) -> Bank {
        Bank::seeded(policy).unwrap()
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("always".parse::<SyncPolicy>().unwrap(), SyncPolicy::Always);
        assert_eq!("LATCH".parse::<SyncPolicy>().unwrap(), SyncPolicy::LatchOnDelete);
        assert!("never".parse::<SyncPolicy>().is_err());
        assert_eq!(SyncPolicy::default(), SyncPolicy::Always);
    }

    #[test]
    fn test_create_account_for_unknown_customer() {
        let mut bank = seeded(SyncPolicy::Always);
        let err = bank.create_account(42, Currency::USD, 0.0).unwrap_err();
        assert!(matches!(err, BankError::InvalidArgument(_)));
        assert_eq!(bank.find_accounts().len(), 5);
    }

    #[test]
    fn test_create_account_links_both_sides() {
        let mut bank = seeded(SyncPolicy::Always);
        let account = bank.create_account(3, Currency::CHF, 12.5).unwrap();

        assert!(account.id.is_some());
        assert_eq!(account.balance, 12.5);
        assert_eq!(bank.find_account_by_number(account.number()).unwrap().customer_id, 3);
        assert!(bank.get_customer(3).unwrap().owns(account.number()));
    }

    #[test]
    fn test_create_account_rejects_negative_opening_balance() {
        let mut bank = seeded(SyncPolicy::Always);
        assert!(bank.create_account(1, Currency::USD, -1.0).is_err());
        assert!(bank.get_customer(1).unwrap().accounts.is_empty());
    }

    #[test]
    fn test_delete_account_requires_listed_number() {
        let mut bank = seeded(SyncPolicy::Always);
        // seeded account exists in the store but is not attached yet
        let seeded_number = bank.get_account(1).unwrap().number().to_string();
        assert!(bank.delete_account(1, &seeded_number).is_err());
        assert!(!bank.accounts_modified());

        assert!(bank.delete_account(99, &seeded_number).is_err());
    }

    #[test]
    fn test_delete_account_sets_flag_and_removes_both_sides() {
        let mut bank = seeded(SyncPolicy::Always);
        let account = bank.create_account(2, Currency::EUR, 0.0).unwrap();

        bank.delete_account(2, account.number()).unwrap();

        assert!(!bank.get_customer(2).unwrap().owns(account.number()));
        assert!(bank.find_account_by_number(account.number()).is_err());
        assert!(bank.accounts_modified());
    }

    #[test]
    fn test_delete_account_with_stale_listing_leaves_flag_clear() {
        let mut bank = seeded(SyncPolicy::LatchOnDelete);
        bank.customers.get_mut(3).unwrap().attach("stale-number");

        bank.delete_account(3, "stale-number").unwrap();

        assert!(!bank.get_customer(3).unwrap().owns("stale-number"));
        assert!(!bank.accounts_modified());
        assert_eq!(bank.find_accounts().len(), 5);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut bank = seeded(SyncPolicy::Always);
        assert_eq!(bank.assign_accounts_to_customers(), 5);
        assert_eq!(bank.assign_accounts_to_customers(), 0);

        for customer in bank.find_customers() {
            assert_eq!(customer.accounts.len(), 1);
        }
    }

    #[test]
    fn test_assign_keeps_running_after_delete_by_default() {
        let mut bank = seeded(SyncPolicy::Always);
        let extra = bank.create_account(1, Currency::USD, 0.0).unwrap();
        bank.delete_account(1, extra.number()).unwrap();

        assert_eq!(bank.assign_accounts_to_customers(), 5);
    }

    #[test]
    fn test_latch_policy_disables_assignment_forever() {
        let mut bank = seeded(SyncPolicy::LatchOnDelete);
        let extra = bank.create_account(1, Currency::USD, 0.0).unwrap();
        bank.delete_account(1, extra.number()).unwrap();

        assert_eq!(bank.assign_accounts_to_customers(), 0);
        bank.create_account(4, Currency::USD, 0.0).unwrap();
        assert_eq!(bank.assign_accounts_to_customers(), 0);
        assert_eq!(bank.get_customer(2).unwrap().accounts.len(), 0);
    }

    #[test]
    fn test_delete_customer_removes_listed_and_unlisted_accounts() {
        let mut bank = seeded(SyncPolicy::Always);
        bank.create_account(2, Currency::EUR, 10.0).unwrap();

        // seeded account of customer 2 was never attached
        assert!(bank.delete_customer(2).unwrap());

        assert!(bank.get_customer(2).is_err());
        assert!(bank.accounts().by_customer(2).is_empty());
        assert_eq!(bank.find_accounts().len(), 4);
        // other customers keep their accounts
        assert_eq!(bank.accounts().by_customer(1).len(), 1);
    }

    #[test]
    fn test_delete_unknown_customer() {
        let mut bank = seeded(SyncPolicy::Always);
        assert!(bank.delete_customer(77).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_customer_merges_fields() {
        let mut bank = seeded(SyncPolicy::Always);
        let mut edited = bank.get_customer(1).unwrap();
        edited.name = "Johnny Doe".to_string();
        edited.age = 40;
        edited.accounts.push("ignored".to_string());

        let saved = bank.update_customer(&edited).unwrap();

        assert_eq!(saved.name, "Johnny Doe");
        assert_eq!(saved.age, 40);
        assert_eq!(saved.email, "johndoe@example.com");
        assert!(saved.accounts.is_empty());
        assert_eq!(bank.get_customer(1).unwrap().name, "Johnny Doe");
    }

    #[test]
    fn test_update_unknown_customer() {
        let mut bank = seeded(SyncPolicy::Always);
        let mut ghost = Customer::new("Ghost", "ghost@example.com", 1);
        ghost.id = Some(100);
        assert!(bank.update_customer(&ghost).unwrap_err().is_not_found());

        ghost.id = None;
        assert!(bank.update_customer(&ghost).is_err());
    }
}
