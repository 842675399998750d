//! Interactive terminal front end.

mod account;
mod menu;
mod prompt;

pub use menu::run_menu;
