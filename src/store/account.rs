// 💳 Account Store - accounts indexed by sequential id, looked up by number
//
// Two indexes kept in step:
// - accounts: id → Account (ordered, so find_all lists in creation order)
// - by_number: number → id

use crate::entities::{Account, AccountId, Customer, CustomerId};
use crate::error::{BankError, Result};
use crate::seed;
use crate::store::Store;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, error, info};

pub struct AccountStore {
    accounts: BTreeMap<AccountId, Account>,
    by_number: HashMap<String, AccountId>,
    next_id: AccountId,
}

impl AccountStore {
    /// Create new empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: BTreeMap::new(),
            by_number: HashMap::new(),
            next_id: 1,
        }
    }

    /// One zero-balance account per seed customer, currency by name position
    pub fn seeded(customers: &[Customer]) -> Result<Self> {
        let mut store = AccountStore::new();
        for customer in customers {
            let customer_id = customer
                .id
                .ok_or_else(|| BankError::invalid(format!("Customer {} has no id", customer.name)))?;
            let currency = seed::currency_for(&customer.name)?;
            store.save(Account::new(currency, customer_id))?;
        }
        info!(count = store.len(), "default accounts loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains_number(&self, number: &str) -> bool {
        self.by_number.contains_key(number)
    }

    /// Borrowing lookup by number
    pub fn get(&self, number: &str) -> Option<&Account> {
        self.by_number
            .get(number)
            .and_then(|id| self.accounts.get(id))
    }

    pub fn find_by_number(&self, number: &str) -> Result<Account> {
        debug!(number, "retrieving account by number");
        self.get(number)
            .cloned()
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Mutable lookup used by balance operations
    pub fn find_by_number_mut(&mut self, number: &str) -> Result<&mut Account> {
        let id = *self
            .by_number
            .get(number)
            .ok_or_else(|| BankError::account_not_found(number))?;
        self.accounts
            .get_mut(&id)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Remove by number; false when no such account
    pub fn delete_by_number(&mut self, number: &str) -> bool {
        match self.by_number.remove(number) {
            Some(id) => {
                self.accounts.remove(&id);
                info!(account_id = id, number, "account deleted");
                true
            }
            None => {
                error!(number, "account not found for deletion");
                false
            }
        }
    }

    /// Accounts owned by a customer, in creation order
    pub fn by_customer(&self, customer_id: CustomerId) -> Vec<Account> {
        self.accounts
            .values()
            .filter(|a| a.belongs_to(customer_id))
            .cloned()
            .collect()
    }

    /// Fan-out of an edited customer to its accounts
    ///
    /// Accounts reference their owner by id, so the new name/email/age are
    /// already what every view of these accounts will show. Returns the
    /// affected accounts.
    pub fn update_customer_data(&self, customer: &Customer) -> Vec<Account> {
        let Some(customer_id) = customer.id else {
            return Vec::new();
        };
        let affected = self.by_customer(customer_id);
        for account in &affected {
            debug!(
                account_id = ?account.id,
                customer_id,
                name = %customer.name,
                "customer data visible through account"
            );
        }
        info!(customer_id, accounts = affected.len(), "customer data fanned out");
        affected
    }

    /// Sum of all balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.values().map(|a| a.balance).sum()
    }
}

impl Store for AccountStore {
    type Entity = Account;
    type Id = AccountId;

    /// Insert only: a number already held is rejected and the store is left
    /// unchanged. Balances change through `find_by_number_mut`.
    fn save(&mut self, mut account: Account) -> Result<Account> {
        if self.by_number.contains_key(account.number()) {
            error!(number = account.number(), "account already exists");
            return Err(BankError::invalid(format!(
                "Account with number {} already exists",
                account.number()
            )));
        }

        let id = self.next_id;
        self.next_id += 1;
        account.id = Some(id);
        self.by_number.insert(account.number().to_string(), id);
        self.accounts.insert(id, account.clone());
        info!(account_id = id, %account, "account saved");
        Ok(account)
    }

    fn delete(&mut self, account: &Account) -> bool {
        self.delete_by_number(account.number())
    }

    fn delete_by_id(&mut self, id: AccountId) -> bool {
        match self.accounts.remove(&id) {
            Some(account) => {
                self.by_number.remove(account.number());
                info!(account_id = id, "deleted account");
                true
            }
            None => {
                error!(account_id = id, "failed to delete account");
                false
            }
        }
    }

    fn find_all(&self) -> Vec<Account> {
        debug!(count = self.accounts.len(), "retrieved all accounts");
        self.accounts.values().cloned().collect()
    }

    fn get_by_id(&self, id: AccountId) -> Result<Account> {
        self.accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| BankError::account_id_not_found(id))
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
