//! Line-oriented input helpers.
//!
//! Every helper returns `Ok(None)` when the input runs out, so callers
//! can unwind cleanly at end of input.

use std::io::{self, BufRead, Write};

use crate::models::AccountUid;

/// Reads one line and trims it. Returns `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for a free-form field.
pub(crate) fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    read_line(input)
}

/// Prompts for an amount, asking again until the input parses.
pub(crate) fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<f64>> {
    loop {
        let raw = match prompt_field(input, output, label)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw.parse::<f64>() {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

/// Prompts for an account uid, asking again until the input parses.
pub(crate) fn prompt_uid<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<AccountUid>> {
    loop {
        let raw = match prompt_field(input, output, label)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw.parse::<AccountUid>() {
            Ok(uid) => return Ok(Some(uid)),
            Err(_) => writeln!(output, "Please enter a valid uid.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_line_trims() {
        let mut input = Cursor::new("  hello  \n");
        assert_eq!(read_line(&mut input).unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_amount_retries_until_numeric() {
        let mut input = Cursor::new("abc\n12.5\n");
        let mut output = Vec::new();

        let amount = prompt_amount(&mut input, &mut output, "Amount").unwrap();

        assert_eq!(amount, Some(12.5));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Please enter a number."));
    }

    #[test]
    fn test_prompt_amount_gives_up_at_end_of_input() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();

        let amount = prompt_amount(&mut input, &mut output, "Amount").unwrap();

        assert_eq!(amount, None);
    }

    #[test]
    fn test_prompt_uid_retries_until_valid() {
        let mut input = Cursor::new("nope\n00000000-0000-0000-0000-000000000001\n");
        let mut output = Vec::new();

        let uid = prompt_uid(&mut input, &mut output, "Account uid").unwrap();

        assert_eq!(
            uid.unwrap().to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Please enter a valid uid."));
    }
}
