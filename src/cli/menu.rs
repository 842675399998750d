//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use crate::services::AccountService;

use super::account;
use super::prompt::read_line;

const MENU: &str = "\
Please choose one of the following:
  1. Insert account
  2. Update account
  3. Delete account
  4. Find account by IBAN
  5. List accounts
  6. Deposit
  7. Withdraw
  8. Recent activity
  q. Quit";

/// Runs the menu until the user quits or the input runs out.
///
/// Reader and writer are generic so tests can drive a whole session
/// through in-memory buffers.
pub fn run_menu<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", MENU)?;
        write!(output, "> ")?;
        output.flush()?;

        let choice = match read_line(input)? {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => account::insert(service, input, output)?,
            "2" => account::update(service, input, output)?,
            "3" => account::delete(service, input, output)?,
            "4" => account::find_by_iban(service, input, output)?,
            "5" => account::list(service, output)?,
            "6" => account::deposit(service, input, output)?,
            "7" => account::withdraw(service, input, output)?,
            "8" => account::activity(service, output)?,
            "q" | "Q" => {
                writeln!(output, "Goodbye. Thanks for using our app.")?;
                break;
            }
            _ => writeln!(output, "Wrong choice.")?,
        }
    }

    Ok(())
}
