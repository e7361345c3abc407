//! statement-ingest: statement readers (CSV/JSON/extracted text) producing raw records.

pub mod account;
pub mod parsers;
pub mod structured;
pub mod types;

pub use account::detect_account;
pub use parsers::{canara::parse_canara_text, upi_text::parse_upi_text};
pub use structured::{read_csv, read_json};
pub use types::{ParsedStatement, StatementFormat};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Page count of extracted text, when pages are separated by form feeds.
pub fn count_pages(text: &str) -> Option<u32> {
    if !text.contains('\x0c') {
        return None;
    }
    let pages = text.split('\x0c').filter(|p| !p.trim().is_empty()).count();
    u32::try_from(pages).ok()
}

/// Parse statement content already in memory.
pub fn parse_statement(content: &str, format: StatementFormat) -> Result<ParsedStatement> {
    debug!(?format, bytes = content.len(), "parsing statement");
    match format {
        StatementFormat::Json => {
            let (transactions, page_count) = read_json(content)?;
            Ok(ParsedStatement {
                transactions,
                page_count,
                account: None,
            })
        }
        StatementFormat::Csv => Ok(ParsedStatement {
            transactions: read_csv(content.as_bytes())?,
            page_count: None,
            account: None,
        }),
        StatementFormat::CanaraText | StatementFormat::UpiText => {
            let transactions = if format == StatementFormat::CanaraText {
                parse_canara_text(content)?
            } else {
                parse_upi_text(content)?
            };
            Ok(ParsedStatement {
                transactions,
                page_count: count_pages(content),
                account: detect_account(content, format.bank_logo())?,
            })
        }
    }
}

/// Read and parse a statement file. `format = None` auto-detects.
pub fn read_statement(
    path: impl AsRef<Path>,
    format: Option<StatementFormat>,
) -> Result<ParsedStatement> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let format = format.unwrap_or_else(|| StatementFormat::detect(path, &content));
    parse_statement(&content, format).with_context(|| format!("parsing {} as {:?}", path.display(), format))
}
