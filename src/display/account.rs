//! Terminal formatting for accounts and activity.

use crate::audit::Activity;
use crate::dto::AccountView;

/// Formats accounts as a table with uid, iban, holder, and balance
/// columns. Column widths adapt to the data.
pub fn format_account_list(accounts: &[AccountView]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let iban_width = accounts
        .iter()
        .map(|account| account.iban.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let holder_width = accounts
        .iter()
        .map(|account| account.holder.firstname.len() + account.holder.lastname.len() + 1)
        .max()
        .unwrap_or(6)
        .max(6);

    let mut lines = Vec::new();
    lines.push(format!(
        "{:<36}  {:<iban_width$}  {:<holder_width$}  {:>12}",
        "UID",
        "IBAN",
        "HOLDER",
        "BALANCE",
        iban_width = iban_width,
        holder_width = holder_width,
    ));
    lines.push("-".repeat(54 + iban_width + holder_width));

    for account in accounts {
        let uid = account.uid.to_string();
        let holder = format!("{} {}", account.holder.firstname, account.holder.lastname);
        lines.push(format!(
            "{:<36}  {:<iban_width$}  {:<holder_width$}  {:>12.2}",
            uid,
            account.iban,
            holder,
            account.balance,
            iban_width = iban_width,
            holder_width = holder_width,
        ));
    }

    lines.join("\n")
}

/// Formats one account as a labeled block.
pub fn format_account_details(account: &AccountView) -> String {
    let lines = vec![
        format!("Account:  {}", account.uid),
        format!("IBAN:     {}", account.iban),
        format!(
            "Holder:   {} {} (uid {})",
            account.holder.firstname, account.holder.lastname, account.holder.uid
        ),
        format!("SSN:      {}", account.holder.ssn),
        format!("Balance:  {:.2}", account.balance),
    ];
    lines.join("\n")
}

/// Formats one account as a single line, for confirmations.
pub fn format_account_line(account: &AccountView) -> String {
    format!(
        "{} [{}] {} {}, balance {:.2}",
        account.iban,
        account.uid,
        account.holder.firstname,
        account.holder.lastname,
        account.balance
    )
}

/// Formats journal entries one per line, oldest first.
pub fn format_activity(entries: &[Activity]) -> String {
    if entries.is_empty() {
        return "No activity yet.".to_string();
    }

    entries
        .iter()
        .map(Activity::render)
        .collect::<Vec<_>>()
        .join("\n")
}
