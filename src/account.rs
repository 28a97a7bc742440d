//! Bank account model: the fixed-shape record and the username rule.

use crate::money::Money;
use crate::summary::{self, Summary};
use rust_decimal::Decimal;
use serde::Serialize;

/// Derives the login username from an owner's full name.
///
/// Lowercases the name, splits it on whitespace, and concatenates the first
/// character of each word. The empty string derives the empty string.
///
/// # Examples
///
/// ```
/// use teller::derive_username;
///
/// assert_eq!(derive_username("Jonas Schmedtmann"), "js");
/// assert_eq!(derive_username("Steven Thomas Williams"), "stw");
/// ```
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// A single bank account.
///
/// # Invariants
///
/// - `username` is derived from `owner` exactly once, at construction;
///   neither field changes afterwards.
/// - `movements` is in insertion (chronological) order; positive amounts
///   are deposits, negative ones withdrawals.
/// - The balance is never stored; it is recomputed from `movements` on
///   every call.
///
/// Usernames are not guaranteed unique across accounts. Store lookups
/// resolve collisions first-match, in account order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Full display name of the owner.
    pub owner: String,

    /// Derived login identifier (lowercase initials of `owner`).
    pub username: String,

    /// Signed transaction history, oldest first.
    pub movements: Vec<Money>,

    /// Percentage applied to each qualifying deposit.
    pub interest_rate: Decimal,

    /// Numeric secret, compared by equality.
    pub pin: u32,
}

impl Account {
    /// Creates an account, deriving the username from the owner name.
    pub fn new(owner: &str, movements: Vec<Money>, interest_rate: Decimal, pin: u32) -> Self {
        Account {
            username: derive_username(owner),
            owner: owner.to_owned(),
            movements,
            interest_rate,
            pin,
        }
    }

    /// The owner's first name, used for welcome messages.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }

    /// Records a deposit movement.
    ///
    /// Callers validate the amount; this only appends `+amount`.
    pub fn deposit(&mut self, amount: Money) {
        self.movements.push(amount);
    }

    /// Records a withdrawal movement.
    ///
    /// Callers validate the amount and balance; this only appends `-amount`.
    pub fn withdraw(&mut self, amount: Money) {
        self.movements.push(-amount);
    }

    /// The current balance, summed fresh from `movements`.
    pub fn balance(&self) -> Money {
        summary::balance(&self.movements)
    }

    /// The income/expense/interest summary, derived fresh from `movements`.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.movements, self.interest_rate)
    }
}
