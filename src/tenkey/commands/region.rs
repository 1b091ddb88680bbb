use crate::area_codes::AreaCodeTable;
use crate::commands::{CmdMessage, CmdResult, RegionMatch};
use crate::error::{Result, TenkeyError};
use crate::format;
use crate::model::PHONE_LEN;

/// Resolves the region of a phone number given in any notation.
pub fn run(table: &AreaCodeTable, input: &str) -> Result<CmdResult> {
    let digits = format::digits_only(input);
    if digits.is_empty() {
        return Err(TenkeyError::Api(format!("No digits in '{}'", input)));
    }

    let entry = table.find(&digits);
    let code_len = entry.map(|e| e.code.len()).unwrap_or(0);
    let display = match code_len {
        0 => digits.clone(),
        len if digits.len() == PHONE_LEN => format::phone(&digits, len),
        len => format::phone_partial(&digits, len),
    };

    let mut result = CmdResult::default();
    if digits.len() != PHONE_LEN {
        result.add_message(CmdMessage::warning(format!(
            "Landline numbers have {} digits, got {}",
            PHONE_LEN,
            digits.len()
        )));
    }
    if entry.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No known area code prefixes {}",
            digits
        )));
    }

    Ok(result.with_region(RegionMatch {
        region: table.resolve_region(&digits).to_string(),
        code: entry.map(|e| e.code.clone()),
        display,
        digits,
    }))
}
