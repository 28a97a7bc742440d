//! Session-script models: raw CSV rows and their typed events.

use crate::money::Money;
use serde::Deserialize;
use std::str::FromStr;

/// Raw session-script row as read from CSV.
///
/// Every row carries all five columns (`event,user,pin,to,amount`), with
/// the unused ones left empty. String-based fields keep the reader
/// flexible; [`EventRecord::parse`] does the number parsing the operations
/// expect from their caller.
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    /// Event name: login, transfer, loan, close, sort (case-insensitive).
    #[serde(rename = "event")]
    pub event_type: String,

    /// Username (login and close rows).
    pub user: Option<String>,

    /// PIN (login and close rows).
    pub pin: Option<String>,

    /// Recipient username (transfer rows).
    pub to: Option<String>,

    /// Amount (transfer and loan rows).
    pub amount: Option<String>,
}

impl EventRecord {
    /// Parses the raw row into a typed event.
    ///
    /// Returns `None` if the row is invalid (unknown event name, missing
    /// or unparseable required field).
    pub fn parse(&self) -> Option<Event> {
        let event_type = self.event_type.trim().to_lowercase();

        match event_type.as_str() {
            "login" => Some(Event::Login {
                username: non_empty(&self.user)?.to_owned(),
                pin: self.parse_pin()?,
            }),
            "transfer" => Some(Event::Transfer {
                to: non_empty(&self.to)?.to_owned(),
                amount: self.parse_amount()?,
            }),
            "loan" => Some(Event::Loan {
                amount: self.parse_amount()?,
            }),
            "close" => Some(Event::Close {
                username: non_empty(&self.user)?.to_owned(),
                pin: self.parse_pin()?,
            }),
            "sort" => Some(Event::Sort),
            _ => None,
        }
    }

    /// Parses the PIN field into a number.
    fn parse_pin(&self) -> Option<u32> {
        non_empty(&self.pin)?.parse().ok()
    }

    /// Parses the amount field into [`Money`].
    ///
    /// Negative amounts parse fine here; rejecting them is the engine's
    /// job, so the failure is observable as a typed rejection.
    fn parse_amount(&self) -> Option<Money> {
        Money::from_str(non_empty(&self.amount)?).ok()
    }
}

/// Returns the trimmed field content, treating blanks as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    let trimmed = value.as_deref()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A parsed session event ready for the engine.
#[derive(Debug, Clone)]
pub enum Event {
    /// Authenticate an account by username and PIN.
    Login { username: String, pin: u32 },

    /// Move an amount from the current account to another account.
    Transfer { to: String, amount: Money },

    /// Credit a loan to the current account if its history qualifies.
    Loan { amount: Money },

    /// Close the current account after re-entering its credentials.
    Close { username: String, pin: u32 },

    /// Flip the movement display ordering.
    Sort,
}
