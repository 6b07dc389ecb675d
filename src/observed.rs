//! Reading observed outputs from text.
//!
//! One value per line, decimal or `0x`-prefixed hexadecimal. Blank lines and
//! anything after a `#` are ignored. Values come back as `u64` so that the
//! 32-bit range check happens at ingestion, not here.

use crate::error::RecoveryError;

pub fn parse(text: &str) -> Result<Vec<u64>, RecoveryError> {
    let mut values = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let content = match line.split_once('#') {
            Some((head, _)) => head,
            None => line,
        }
        .trim();

        if content.is_empty() {
            continue;
        }

        let parsed = match content
            .strip_prefix("0x")
            .or_else(|| content.strip_prefix("0X"))
        {
            Some(digits) => u64::from_str_radix(digits, 16),
            None => content.parse::<u64>(),
        };

        let value = parsed.map_err(|_| RecoveryError::Malformed {
            line: number + 1,
            text: String::from(content),
        })?;

        values.push(value);
    }

    Ok(values)
}
