//! In-memory storage layer.

pub mod accounts;

pub use accounts::AccountStore;
