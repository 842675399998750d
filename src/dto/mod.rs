//! Transfer objects between the service and presentation layers.
//!
//! Inbound shapes (`New*`, `*Update`) carry exactly what an operation
//! needs and no uids of their own; outbound views are flat read-only
//! copies the presentation layer builds from returned entities.

pub mod account;
pub mod user;

pub use account::{AccountUpdate, AccountView, NewAccount};
pub use user::{NewUser, UserUpdate, UserView};
