//! Core entity model.

pub mod account;
pub mod ids;
pub mod user;

pub use account::Account;
pub use ids::{AccountUid, RandomUids, SequentialUids, UidSource, UserUid};
pub use user::User;
