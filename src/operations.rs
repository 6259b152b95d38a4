// 💸 Account Operations - deposit, withdraw, transfer
//
// Rules:
//   deposit   amount > 0                      → balance += amount
//   withdraw  amount > 0 && balance >= amount → balance -= amount, else Ok(false)
//   transfer  from != to, amount > 0, source covers amount → both legs applied
//
// Every check runs before the first mutation, so a failed call leaves
// balances untouched.

use crate::bank::Bank;
use crate::entities::Account;
use crate::error::{BankError, Result};
use tracing::{info, warn};

fn is_positive(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

impl Bank {
    /// Increase the balance of an account and return the updated account
    pub fn deposit(&mut self, number: &str, amount: f64) -> Result<Account> {
        if !is_positive(amount) {
            return Err(BankError::invalid("Deposit amount must be greater than zero"));
        }

        let account = self.accounts.find_by_number_mut(number)?;
        account.balance += amount;
        info!(number, amount, balance = account.balance, "deposit applied");
        Ok(account.clone())
    }

    /// Decrease the balance if the amount is positive and covered
    ///
    /// `Ok(false)` covers both an invalid amount and insufficient funds.
    pub fn withdraw(&mut self, number: &str, amount: f64) -> Result<bool> {
        let account = self.accounts.find_by_number_mut(number)?;

        if is_positive(amount) && account.can_cover(amount) {
            account.balance -= amount;
            info!(number, amount, balance = account.balance, "withdrawal applied");
            Ok(true)
        } else {
            warn!(number, amount, balance = account.balance, "withdrawal refused");
            Ok(false)
        }
    }

    /// Move `amount` from one account to another
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<()> {
        if from == to {
            return Err(BankError::invalid(
                "From and To account numbers cannot be the same",
            ));
        }

        if !is_positive(amount) {
            return Err(BankError::invalid("Transfer amount must be greater than 0"));
        }

        let source = self.accounts.find_by_number(from)?;
        self.accounts.find_by_number(to)?;

        if !source.can_cover(amount) {
            return Err(BankError::invalid("Insufficient balance in the from account"));
        }

        self.accounts.find_by_number_mut(from)?.balance -= amount;
        self.accounts.find_by_number_mut(to)?.balance += amount;
        info!(from, to, amount, "transfer applied");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Currency;
    use crate::sync::SyncPolicy;
    use rstest::rstest;

    fn bank_with_two_accounts(first: f64, second: f64) -> (Bank, String, String) {
        let mut bank = Bank::new(SyncPolicy::Always);
        let a = bank
            .save_account(Account::with_balance(Currency::USD, 1, first))
            .unwrap();
        let b = bank
            .save_account(Account::with_balance(Currency::USD, 2, second))
            .unwrap();
        (bank, a.number().to_string(), b.number().to_string())
    }

    fn balance(bank: &Bank, number: &str) -> f64 {
        bank.find_account_by_number(number).unwrap().balance
    }

    #[test]
    fn test_deposit_increases_balance() {
        let (mut bank, a, _) = bank_with_two_accounts(10.0, 0.0);
        let updated = bank.deposit(&a, 15.5).unwrap();
        assert_eq!(updated.balance, 25.5);
        assert_eq!(balance(&bank, &a), 25.5);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_deposit_rejects_non_positive(#[case] amount: f64) {
        let (mut bank, a, _) = bank_with_two_accounts(10.0, 0.0);
        let err = bank.deposit(&a, amount).unwrap_err();
        assert!(matches!(err, BankError::InvalidArgument(_)));
        assert_eq!(balance(&bank, &a), 10.0);
    }

    #[test]
    fn test_deposit_unknown_account() {
        let (mut bank, _, _) = bank_with_two_accounts(0.0, 0.0);
        assert!(bank.deposit("missing", 5.0).unwrap_err().is_not_found());
    }

    #[test]
    fn test_withdraw_valid_amount() {
        let (mut bank, a, _) = bank_with_two_accounts(100.0, 0.0);
        assert!(bank.withdraw(&a, 40.0).unwrap());
        assert_eq!(balance(&bank, &a), 60.0);
        assert!(bank.withdraw(&a, 60.0).unwrap());
        assert_eq!(balance(&bank, &a), 0.0);
    }

    #[rstest]
    #[case(150.0)]
    #[case(0.0)]
    #[case(-5.0)]
    fn test_withdraw_refused_leaves_balance(#[case] amount: f64) {
        let (mut bank, a, _) = bank_with_two_accounts(100.0, 0.0);
        assert!(!bank.withdraw(&a, amount).unwrap());
        assert_eq!(balance(&bank, &a), 100.0);
    }

    #[test]
    fn test_withdraw_unknown_account() {
        let (mut bank, _, _) = bank_with_two_accounts(0.0, 0.0);
        assert!(bank.withdraw("missing", 1.0).unwrap_err().is_not_found());
    }

    #[test]
    fn test_transfer_conserves_total() {
        let (mut bank, a, b) = bank_with_two_accounts(100.0, 20.0);
        bank.transfer(&a, &b, 70.0).unwrap();
        assert_eq!(balance(&bank, &a), 30.0);
        assert_eq!(balance(&bank, &b), 90.0);
        assert_eq!(bank.total_balance(), 120.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(10.0)]
    #[case(1_000.0)]
    fn test_transfer_to_same_account_always_fails(#[case] amount: f64) {
        let (mut bank, a, _) = bank_with_two_accounts(100.0, 0.0);
        let err = bank.transfer(&a, &a, amount).unwrap_err();
        assert_eq!(
            err.to_string(),
            "From and To account numbers cannot be the same"
        );
        assert_eq!(balance(&bank, &a), 100.0);
    }

    #[test]
    fn test_transfer_insufficient_balance_changes_nothing() {
        let (mut bank, a, b) = bank_with_two_accounts(50.0, 5.0);
        let err = bank.transfer(&a, &b, 50.01).unwrap_err();
        assert!(matches!(err, BankError::InvalidArgument(_)));
        assert_eq!(balance(&bank, &a), 50.0);
        assert_eq!(balance(&bank, &b), 5.0);
    }

    #[test]
    fn test_transfer_non_positive_amount() {
        let (mut bank, a, b) = bank_with_two_accounts(50.0, 5.0);
        assert!(bank.transfer(&a, &b, 0.0).is_err());
        assert!(bank.transfer(&a, &b, -3.0).is_err());
        assert_eq!(bank.total_balance(), 55.0);
    }

    #[test]
    fn test_transfer_unknown_destination_changes_nothing() {
        let (mut bank, a, _) = bank_with_two_accounts(50.0, 0.0);
        let err = bank.transfer(&a, "missing", 10.0).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(balance(&bank, &a), 50.0);
    }
}
