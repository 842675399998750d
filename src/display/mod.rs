//! Output formatting for the terminal.

pub mod account;

pub use account::{
    format_account_details, format_account_line, format_account_list, format_activity,
};
