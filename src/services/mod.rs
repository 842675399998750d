//! Business-rule layer.

pub mod account;

pub use account::AccountService;
