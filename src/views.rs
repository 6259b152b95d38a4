// 🪟 Response views - which fields each endpoint family exposes
//
// Under /accounts: full account, owner without its account list
// Under /customers: full customer, accounts reduced to number/currency/balance

use crate::bank::Bank;
use crate::entities::{Account, AccountId, Currency, Customer, CustomerId};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Option<AccountId>,
    pub number: String,
    pub currency: Currency,
    pub balance: f64,
    pub customer: Option<CustomerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub number: String,
    pub currency: Currency,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub accounts: Vec<AccountSummary>,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        CustomerSummary {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            age: customer.age,
        }
    }
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        AccountSummary {
            number: account.number().to_string(),
            currency: account.currency,
            balance: account.balance,
        }
    }
}

impl AccountView {
    /// Resolve the owner from the customer store; `None` if it is gone
    pub fn render(account: &Account, bank: &Bank) -> Self {
        AccountView {
            id: account.id,
            number: account.number().to_string(),
            currency: account.currency,
            balance: account.balance,
            customer: bank
                .customers()
                .get(account.customer_id)
                .map(CustomerSummary::from),
        }
    }

    pub fn render_all(bank: &Bank) -> Vec<Self> {
        bank.find_accounts()
            .iter()
            .map(|a| AccountView::render(a, bank))
            .collect()
    }
}

impl CustomerView {
    /// Resolve listed numbers against the account store, skipping stale ones
    pub fn render(customer: &Customer, bank: &Bank) -> Self {
        let accounts = customer
            .accounts
            .iter()
            .filter_map(|number| {
                let found = bank.accounts().get(number);
                if found.is_none() {
                    warn!(customer_id = ?customer.id, number = %number, "listed account missing from store");
                }
                found.map(AccountSummary::from)
            })
            .collect();

        CustomerView {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            age: customer.age,
            accounts,
        }
    }

    pub fn render_all(bank: &Bank) -> Vec<Self> {
        bank.find_customers()
            .iter()
            .map(|c| CustomerView::render(c, bank))
            .collect()
    }
}
