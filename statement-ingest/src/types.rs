use serde::{Deserialize, Serialize};
use statement_core::{AccountInfo, RawTransaction};
use std::path::Path;

/// Input layouts the readers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementFormat {
    /// Array of raw records, or `{ "transactions": [...], "pageCount": n }`
    Json,
    /// Header row + one raw record per line
    Csv,
    /// Extracted text of a Canara-style multi-line passbook
    CanaraText,
    /// Extracted text of a UPI app statement, one transaction per line
    UpiText,
}

impl StatementFormat {
    /// Pick a reader from the file extension, falling back to text markers.
    pub fn detect(path: &Path, content: &str) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => return StatementFormat::Json,
            Some("csv") => return StatementFormat::Csv,
            _ => {}
        }

        let head: String = content.chars().take(4000).collect::<String>().to_lowercase();
        if head.contains("phonepe") || head.contains("phone pe") || head.contains("upi transaction id") {
            StatementFormat::UpiText
        } else if head.contains("canara") {
            StatementFormat::CanaraText
        } else if content.trim_start().starts_with('[') || content.trim_start().starts_with('{') {
            StatementFormat::Json
        } else {
            StatementFormat::CanaraText
        }
    }

    /// Logo key for the account roll-up, when the layout implies a bank.
    pub fn bank_logo(&self) -> Option<&'static str> {
        match self {
            StatementFormat::CanaraText => Some("canara"),
            StatementFormat::UpiText => Some("phonepe"),
            StatementFormat::Json | StatementFormat::Csv => None,
        }
    }
}

/// Reader output, ready for the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedStatement {
    pub transactions: Vec<RawTransaction>,
    /// Page count when the input carries one
    pub page_count: Option<u32>,
    pub account: Option<AccountInfo>,
}
