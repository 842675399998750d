//! Menu actions for account management.
//!
//! Each action gathers its input, calls the service, and prints either a
//! confirmation or the error message verbatim. Service errors never end
//! the session.

use std::io::{self, BufRead, Write};

use crate::display;
use crate::dto::{AccountUpdate, AccountView, NewAccount, NewUser, UserUpdate};
use crate::services::AccountService;

use super::prompt::{prompt_amount, prompt_field, prompt_uid};

pub(super) fn insert<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let data = match prompt_new_account(input, output)? {
        Some(data) => data,
        None => return Ok(()),
    };

    match service.insert_account(data) {
        Ok(account) => writeln!(
            output,
            "Inserted: {}",
            display::format_account_line(&AccountView::from(&account))
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn update<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let uid = match prompt_uid(input, output, "Account uid")? {
        Some(uid) => uid,
        None => return Ok(()),
    };
    let data = match prompt_account_update(input, output)? {
        Some(data) => data,
        None => return Ok(()),
    };

    match service.update_account(uid, data) {
        Ok(_) => writeln!(output, "Account updated.")?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn delete<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let uid = match prompt_uid(input, output, "Account uid")? {
        Some(uid) => uid,
        None => return Ok(()),
    };

    match service.delete_account(uid) {
        Ok(()) => writeln!(output, "Account deleted.")?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn find_by_iban<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let iban = match prompt_field(input, output, "IBAN")? {
        Some(iban) => iban,
        None => return Ok(()),
    };

    match service.account_by_iban(&iban) {
        Ok(account) => writeln!(
            output,
            "{}",
            display::format_account_details(&AccountView::from(&account))
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn list<W: Write>(service: &AccountService<'_>, output: &mut W) -> io::Result<()> {
    let views: Vec<AccountView> = service
        .all_accounts()
        .iter()
        .map(AccountView::from)
        .collect();
    writeln!(output, "{}", display::format_account_list(&views))?;
    Ok(())
}

pub(super) fn deposit<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let uid = match prompt_uid(input, output, "Account uid")? {
        Some(uid) => uid,
        None => return Ok(()),
    };
    let amount = match prompt_amount(input, output, "Amount")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match service.deposit(uid, amount) {
        Ok(account) => writeln!(
            output,
            "Deposit successful. New balance: {:.2}",
            account.balance
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn withdraw<R: BufRead, W: Write>(
    service: &AccountService<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let iban = match prompt_field(input, output, "IBAN")? {
        Some(iban) => iban,
        None => return Ok(()),
    };
    let ssn = match prompt_field(input, output, "SSN")? {
        Some(ssn) => ssn,
        None => return Ok(()),
    };
    let amount = match prompt_amount(input, output, "Amount")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match service.withdraw(&iban, &ssn, amount) {
        Ok(account) => writeln!(
            output,
            "Withdrawal successful. New balance: {:.2}",
            account.balance
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

pub(super) fn activity<W: Write>(service: &AccountService<'_>, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", display::format_activity(&service.activity()))?;
    Ok(())
}

fn prompt_new_account<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<NewAccount>> {
    let iban = match prompt_field(input, output, "IBAN")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let balance = match prompt_amount(input, output, "Opening balance")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let firstname = match prompt_field(input, output, "First name")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let lastname = match prompt_field(input, output, "Last name")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let ssn = match prompt_field(input, output, "SSN")? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(NewAccount::new(
        iban,
        NewUser::new(firstname, lastname, ssn),
        balance,
    )))
}

fn prompt_account_update<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<AccountUpdate>> {
    let iban = match prompt_field(input, output, "IBAN")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let balance = match prompt_amount(input, output, "New balance")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let firstname = match prompt_field(input, output, "First name")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let lastname = match prompt_field(input, output, "Last name")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let ssn = match prompt_field(input, output, "SSN")? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(AccountUpdate::new(
        None,
        iban,
        UserUpdate::new(firstname, lastname, ssn),
        balance,
    )))
}
