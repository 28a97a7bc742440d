//! Core banking engine: typed operations, script replay, statements.
//!
//! Applies session events in the order they arrive and keeps the account
//! store and session state consistent. The engine is single-threaded and
//! synchronous; every operation runs to completion before the next one.

use crate::account::Account;
use crate::error::{Rejection, TellerError};
use crate::event::{Event, EventRecord};
use crate::money::Money;
use crate::session::Session;
use crate::store::AccountStore;
use crate::view::AccountView;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::io::{Read, Write};

/// Fraction of a requested loan that some past movement must reach.
const LOAN_QUALIFYING_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

/// The banking engine.
///
/// Owns the account store and the session, applies operations against
/// them, and hands back a refreshed [`AccountView`] after every successful
/// operation for the rendering layer to consume. Rejected operations leave
/// account data untouched.
pub struct Teller {
    /// All accounts, in opening order.
    store: AccountStore,

    /// Login state and sort toggle.
    session: Session,
}

impl Teller {
    /// Creates an engine over the given store, with nobody logged in.
    pub fn new(store: AccountStore) -> Self {
        Teller {
            store,
            session: Session::new(),
        }
    }

    /// Creates an engine over the seeded demo store.
    pub fn demo() -> Self {
        Teller::new(AccountStore::demo())
    }

    /// Read access to the accounts.
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Read access to the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Snapshot of the current account under the current sort setting.
    pub fn current_view(&self) -> Option<AccountView> {
        let username = self.session.current()?;
        let account = self.store.find(username)?;
        Some(AccountView::build(account, self.session.sorted()))
    }

    /// Authenticates an account by username and exact PIN equality.
    ///
    /// Lookup is first-match in store order. A failed attempt leaves the
    /// previous session, if any, exactly as it was.
    pub fn log_in(&mut self, username: &str, pin: u32) -> Result<AccountView, Rejection> {
        let account = self
            .store
            .find(username)
            .filter(|account| account.pin == pin)
            .ok_or(Rejection::InvalidCredentials)?;

        let username = account.username.clone();
        self.session.log_in(username);

        // Safety: the session was just pointed at a stored account
        Ok(self.current_view().expect("current account exists"))
    }

    /// Moves an amount from the current account to `to`.
    ///
    /// Preconditions are checked in order: positive amount, recipient
    /// exists, sender balance covers the amount, recipient is a different
    /// account. Either both movements are recorded or neither is.
    pub fn transfer(&mut self, to: &str, amount: Money) -> Result<AccountView, Rejection> {
        let sender = self.session.current().ok_or(Rejection::NotLoggedIn)?;
        // Safety: the session always names a stored account
        let sender_pos = self.store.position(sender).expect("session account exists");

        if amount <= Money::ZERO {
            return Err(Rejection::InvalidAmount);
        }

        let recipient_pos = self
            .store
            .position(to)
            .ok_or(Rejection::UnknownRecipient)?;

        let sender_account = self.store.get(sender_pos).expect("sender position is valid");
        if sender_account.balance() < amount {
            return Err(Rejection::InsufficientBalance);
        }

        if recipient_pos == sender_pos {
            return Err(Rejection::SelfTransfer);
        }

        // All checks passed; record both sides.
        self.store
            .get_mut(sender_pos)
            .expect("sender position is valid")
            .withdraw(amount);
        self.store
            .get_mut(recipient_pos)
            .expect("recipient position is valid")
            .deposit(amount);

        // Safety: the sender is still in the store
        Ok(self.current_view().expect("current account exists"))
    }

    /// Credits a loan to the current account.
    ///
    /// Eligible when some past movement reaches 10% of the requested
    /// amount ([`LOAN_QUALIFYING_RATIO`]).
    pub fn request_loan(&mut self, amount: Money) -> Result<AccountView, Rejection> {
        let username = self.session.current().ok_or(Rejection::NotLoggedIn)?;

        if amount <= Money::ZERO {
            return Err(Rejection::InvalidAmount);
        }

        // Safety: the session always names a stored account
        let account = self.store.find_mut(username).expect("session account exists");

        let threshold = amount * LOAN_QUALIFYING_RATIO;
        if !account.movements.iter().any(|movement| *movement >= threshold) {
            return Err(Rejection::LoanIneligible);
        }

        account.deposit(amount);

        // Safety: the current account is still in the store
        Ok(self.current_view().expect("current account exists"))
    }

    /// Closes the current account after its credentials are re-entered.
    ///
    /// The supplied username and PIN must match the logged-in account.
    /// Removes the account from the store permanently, clears the session,
    /// and returns the removed record.
    pub fn close_account(&mut self, username: &str, pin: u32) -> Result<Account, Rejection> {
        let current = self.session.current().ok_or(Rejection::NotLoggedIn)?;
        // Safety: the session always names a stored account
        let account = self.store.find(current).expect("session account exists");

        if account.username != username || account.pin != pin {
            return Err(Rejection::CloseCredentialMismatch);
        }

        let closed = self.store.close(current).expect("session account exists");
        self.session.clear();
        Ok(closed)
    }

    /// Flips the display ordering and returns the refreshed view.
    ///
    /// The flag flips on every request, even with nobody logged in; the
    /// rejection then only means there is no view to refresh.
    pub fn toggle_sort(&mut self) -> Result<AccountView, Rejection> {
        self.session.toggle_sort();
        self.current_view().ok_or(Rejection::NotLoggedIn)
    }

    /// Replays a session script from a CSV reader.
    ///
    /// Records are read one at a time. Malformed rows are logged at warn
    /// level and skipped; rejected operations are logged at debug level
    /// and are otherwise silent no-ops.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<(), TellerError> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(event) = record.parse() {
                        self.apply_event(event, row_num);
                    } else {
                        warn!("Row {}: Failed to parse session event", row_num);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        debug!(
            "Replay finished: {} accounts open, session {}",
            self.store.len(),
            if self.session.is_active() { "active" } else { "idle" }
        );

        Ok(())
    }

    /// Applies a single parsed event, logging the outcome.
    fn apply_event(&mut self, event: Event, row: usize) {
        match event {
            Event::Login { username, pin } => match self.log_in(&username, pin) {
                Ok(view) => {
                    // Safety: a successful login leaves the account in the store
                    let account = self.store.find(&view.username).expect("current account exists");
                    debug!(
                        "Row {}: Welcome back {}, balance {}",
                        row,
                        account.first_name(),
                        view.balance
                    );
                }
                Err(rejection) => debug!("Row {}: Login ignored: {}", row, rejection),
            },
            Event::Transfer { to, amount } => match self.transfer(&to, amount) {
                Ok(view) => debug!(
                    "Row {}: Transferred {} to {}, balance now {}",
                    row, amount, to, view.balance
                ),
                Err(rejection) => debug!("Row {}: Transfer ignored: {}", row, rejection),
            },
            Event::Loan { amount } => match self.request_loan(amount) {
                Ok(view) => debug!(
                    "Row {}: Loan of {} granted, balance now {}",
                    row, amount, view.balance
                ),
                Err(rejection) => debug!("Row {}: Loan ignored: {}", row, rejection),
            },
            Event::Close { username, pin } => match self.close_account(&username, pin) {
                Ok(closed) => debug!("Row {}: Closed account of {}", row, closed.owner),
                Err(rejection) => debug!("Row {}: Close ignored: {}", row, rejection),
            },
            Event::Sort => match self.toggle_sort() {
                Ok(_) => debug!(
                    "Row {}: Movement display sorted {}",
                    row,
                    if self.session.sorted() { "on" } else { "off" }
                ),
                Err(rejection) => debug!("Row {}: Sort ignored: {}", row, rejection),
            },
        }
    }

    /// Writes final account statements as CSV.
    ///
    /// Rows follow store order; all amounts carry 2 decimal places.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<(), TellerError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "username",
            "owner",
            "balance",
            "total_in",
            "total_out",
            "interest",
        ])?;

        for account in self.store.iter() {
            let summary = account.summary();
            csv_writer.write_record([
                account.username.clone(),
                account.owner.clone(),
                account.balance().to_string(),
                summary.total_in.to_string(),
                summary.total_out.to_string(),
                summary.interest.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grand_total(teller: &Teller) -> Money {
        teller.store().iter().map(Account::balance).sum()
    }

    /// Property: a transfer either moves the exact amount between two
    /// accounts or changes nothing; the grand total across all accounts is
    /// invariant either way.
    #[test]
    fn transfer_conserves_grand_total() {
        proptest!(|(amount in -5_000i64..=20_000, recipient_idx in 0usize..4)| {
            let recipients = ["js", "jd", "stw", "ss"];
            let mut teller = Teller::demo();
            teller.log_in("js", 1111).unwrap();

            let before = grand_total(&teller);
            let result = teller.transfer(recipients[recipient_idx], Money::from(amount));

            prop_assert_eq!(grand_total(&teller), before);
            if let Ok(view) = result {
                prop_assert_eq!(view.balance, Money::from(3840 - amount));
            }
        });
    }
}
