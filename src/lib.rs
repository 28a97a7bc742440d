//! # Teller
//!
//! A small banking engine that replays account sessions: logins, transfers,
//! loan requests, account closures, and a movement sort toggle.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts carry 4 decimal places via
//!   `rust_decimal`, displayed at 2
//! - **Derived state**: Balances and summaries are recomputed from the
//!   movement log, never cached
//! - **First-match lookups**: Accounts are found by username in opening
//!   order
//! - **Silent rejections**: Failed operations are logged and skipped, and
//!   never mutate account data
//!
//! ## Example
//!
//! ```
//! use teller::{Money, Teller};
//!
//! let mut teller = Teller::demo();
//! let view = teller.log_in("js", 1111).unwrap();
//! assert_eq!(view.balance, Money::from(3840));
//!
//! teller.transfer("jd", Money::from(250)).unwrap();
//! assert_eq!(teller.current_view().unwrap().balance, Money::from(3590));
//! ```

pub mod account;
pub mod engine;
pub mod error;
pub mod event;
pub mod money;
pub mod session;
pub mod store;
pub mod summary;
pub mod view;

pub use account::{derive_username, Account};
pub use engine::Teller;
pub use error::{Rejection, Result, TellerError};
pub use event::{Event, EventRecord};
pub use money::Money;
pub use session::Session;
pub use store::AccountStore;
pub use summary::{balance, Summary, INTEREST_FLOOR};
pub use view::{AccountView, MovementKind, MovementView};
