//! Render-ready account snapshots for the display collaborator.

use crate::account::Account;
use crate::money::Money;
use crate::summary::Summary;
use serde::Serialize;

/// Whether a movement credits or debits the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Classifies a movement by sign; zero renders as a withdrawal.
    pub fn of(amount: Money) -> Self {
        if amount > Money::ZERO {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

/// One display row of the movement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementView {
    /// 1-based position within the displayed order.
    pub seq: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

/// Snapshot of one account for the rendering layer.
///
/// Built fresh after every successful operation; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub username: String,
    pub owner: String,
    /// Balance summed from the movements at build time.
    pub balance: Money,
    /// Income/expense/interest triad at build time.
    pub summary: Summary,
    /// Movements in display order: ascending when sorted, insertion order
    /// otherwise.
    pub movements: Vec<MovementView>,
}

impl AccountView {
    /// Builds the snapshot, sorting a copy of the movements when asked.
    pub fn build(account: &Account, sorted: bool) -> Self {
        let mut ordered = account.movements.clone();
        if sorted {
            ordered.sort();
        }

        let movements = ordered
            .into_iter()
            .enumerate()
            .map(|(index, amount)| MovementView {
                seq: index + 1,
                kind: MovementKind::of(amount),
                amount,
            })
            .collect();

        AccountView {
            username: account.username.clone(),
            owner: account.owner.clone(),
            balance: account.balance(),
            summary: account.summary(),
            movements,
        }
    }

    /// Amounts in display order, without the row tags.
    pub fn amounts(&self) -> Vec<Money> {
        self.movements.iter().map(|m| m.amount).collect()
    }
}
