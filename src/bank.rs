// 🏦 Bank - owns both stores plus the synchronization state
//
// Account operations live in `operations`, customer/account synchronization
// in `sync`; both are further `impl Bank` blocks.

use crate::entities::{Account, AccountId, Customer, CustomerId};
use crate::error::Result;
use crate::store::{AccountStore, CustomerStore, Store};
use crate::sync::SyncPolicy;
use tracing::info;

pub struct Bank {
    pub(crate) customers: CustomerStore,
    pub(crate) accounts: AccountStore,

    /// Set by `delete_account`, never cleared
    pub(crate) accounts_modified: bool,

    pub(crate) policy: SyncPolicy,
}

impl Bank {
    /// Bank with empty stores
    pub fn new(policy: SyncPolicy) -> Self {
        Bank {
            customers: CustomerStore::new(),
            accounts: AccountStore::new(),
            accounts_modified: false,
            policy,
        }
    }

    /// Bank with the five default customers and one account each
    ///
    /// Customers start with an empty account list; the first
    /// `assign_accounts_to_customers` attaches the seeded accounts.
    pub fn seeded(policy: SyncPolicy) -> Result<Self> {
        let customers = CustomerStore::seeded();
        let accounts = AccountStore::seeded(&customers.find_all())?;
        info!(
            customers = customers.len(),
            accounts = accounts.len(),
            ?policy,
            "bank seeded"
        );
        Ok(Bank {
            customers,
            accounts,
            accounts_modified: false,
            policy,
        })
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn accounts_modified(&self) -> bool {
        self.accounts_modified
    }

    // ========================================================================
    // CUSTOMERS
    // ========================================================================

    pub fn save_customer(&mut self, customer: Customer) -> Result<Customer> {
        self.customers.save(customer)
    }

    pub fn find_customers(&self) -> Vec<Customer> {
        self.customers.find_all()
    }

    pub fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.customers.get_by_id(id)
    }

    // ========================================================================
    // ACCOUNTS
    // ========================================================================

    pub fn save_account(&mut self, account: Account) -> Result<Account> {
        self.accounts.save(account)
    }

    pub fn find_accounts(&self) -> Vec<Account> {
        self.accounts.find_all()
    }

    pub fn get_account(&self, id: AccountId) -> Result<Account> {
        self.accounts.get_by_id(id)
    }

    pub fn find_account_by_number(&self, number: &str) -> Result<Account> {
        self.accounts.find_by_number(number)
    }

    /// Delete an account by id and drop its number from the owner's list
    pub fn delete_account_by_id(&mut self, id: AccountId) -> bool {
        let Ok(account) = self.accounts.get_by_id(id) else {
            return self.accounts.delete_by_id(id);
        };
        if let Ok(owner) = self.customers.get_mut(account.customer_id) {
            owner.detach(account.number());
        }
        self.accounts.delete_by_id(id)
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts.total_balance()
    }
}
