use std::io;

use anyhow::Result;
use clap::Parser;

use teller::cli::run_menu;
use teller::services::AccountService;
use teller::storage::AccountStore;

/// In-memory bank account ledger for the terminal.
///
/// Accounts exist for the lifetime of the session; nothing is persisted.
#[derive(Parser)]
#[command(name = "teller", version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let store = AccountStore::new();
    let service = AccountService::new(&store);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_menu(&service, &mut input, &mut output)?;
    Ok(())
}
