//! The ordered account collection and its demo seed data.

use crate::account::Account;
use crate::money::Money;
use rust_decimal::Decimal;

/// All accounts known to the bank, in opening order.
///
/// Order is meaningful: movements display chronologically and username
/// lookups resolve first-match, so two accounts whose owners share initials
/// collide in favor of the earlier one. Accounts leave the store only
/// through [`AccountStore::close`].
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        AccountStore {
            accounts: Vec::new(),
        }
    }

    /// Creates the store seeded with the four demo accounts.
    pub fn demo() -> Self {
        let mut store = AccountStore::new();
        store.open(Account::new(
            "Jonas Schmedtmann",
            movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
            Decimal::new(12, 1),
            1111,
        ));
        store.open(Account::new(
            "Jessica Davis",
            movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
            Decimal::new(15, 1),
            2222,
        ));
        store.open(Account::new(
            "Steven Thomas Williams",
            movements(&[200, -200, 340, -300, -20, 50, 400, -460]),
            Decimal::new(7, 1),
            3333,
        ));
        store.open(Account::new(
            "Sarah Smith",
            movements(&[430, 1000, 700, 50, 90]),
            Decimal::ONE,
            4444,
        ));
        store
    }

    /// Appends an account to the store.
    pub fn open(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// First account whose username matches, in store order.
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.username == username)
    }

    /// Mutable variant of [`AccountStore::find`].
    pub fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.username == username)
    }

    /// Index of the first account whose username matches.
    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.username == username)
    }

    /// Account at `index`.
    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    /// Mutable account at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// Removes and returns the first account whose username matches.
    ///
    /// Returns `None` (store untouched) if no account matches.
    pub fn close(&mut self, username: &str) -> Option<Account> {
        let index = self.position(username)?;
        Some(self.accounts.remove(index))
    }

    /// Number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates accounts in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }
}

fn movements(values: &[i64]) -> Vec<Money> {
    values.iter().copied().map(Money::from).collect()
}
