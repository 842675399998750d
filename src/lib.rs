//! teller - In-memory bank account ledger for the terminal
//!
//! Accounts live in a volatile store for the lifetime of a session.
//! Nothing is persisted; every run starts empty.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (users, accounts, uids)
//! - `storage`: In-memory storage layer
//! - `services`: Business logic layer
//! - `dto`: Transfer shapes between services and presentation
//! - `audit`: Session activity journal
//! - `display`: Terminal output formatting
//! - `cli`: Interactive menu loop
//!
//! # Example
//!
//! ```
//! use teller::dto::{NewAccount, NewUser};
//! use teller::services::AccountService;
//! use teller::storage::AccountStore;
//!
//! let store = AccountStore::new();
//! let service = AccountService::new(&store);
//!
//! let account = service
//!     .insert_account(NewAccount::new(
//!         "GR16 0110 1250 0000 0001 2300 695",
//!         NewUser::new("Jane", "Doe", "120-44-0101"),
//!         250.0,
//!     ))
//!     .unwrap();
//!
//! let after = service.deposit(account.uid(), 50.0).unwrap();
//! assert_eq!(after.balance, 300.0);
//! ```

pub mod audit;
pub mod cli;
pub mod display;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TellerError, TellerResult};
