//! Account header detection in statement text.

use anyhow::Result;
use regex::Regex;
use statement_core::AccountInfo;

/// Find `Account Name:` / `Account Number:` header lines.
///
/// Returns `None` unless an account number is present; the name may be empty.
pub fn detect_account(text: &str, bank_logo: Option<&str>) -> Result<Option<AccountInfo>> {
    let name_re = Regex::new(r"(?im)^\s*(?:account\s+name|a/c\s+name)\s*[:\-]\s*(.+?)\s*$")?;
    let number_re =
        Regex::new(r"(?im)^\s*(?:account\s+(?:number|no\.?)|a/c\s+no\.?)\s*[:\-]\s*([0-9Xx*]{4,})")?;

    let Some(number) = number_re.captures(text).map(|c| c[1].to_string()) else {
        return Ok(None);
    };
    let name = name_re
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    Ok(Some(AccountInfo {
        account_name: name,
        account_number: number,
        bank_logo: bank_logo.map(str::to_string),
    }))
}
