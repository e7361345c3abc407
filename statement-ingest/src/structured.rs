//! Structured inputs: CSV exports and JSON handed over by an upstream parser.

use anyhow::{Context, Result};
use csv::StringRecord;
use serde::Deserialize;
use statement_core::{RawAmount, RawTransaction};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    date: String,
    #[serde(default, alias = "particulars", alias = "narration")]
    description: String,
    deposits: Option<String>,
    withdrawals: Option<String>,
    amount: Option<String>,
    balance: Option<String>,
}

fn cell(value: Option<String>) -> Option<RawAmount> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(RawAmount::Text)
}

/// Read raw records from CSV with a header row. Header names are matched
/// case-insensitively; empty cells are treated as absent.
pub fn read_csv(reader: impl Read) -> Result<Vec<RawTransaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: StringRecord = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    rdr.set_headers(headers);

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // Line 1 is the header.
        let row = row.with_context(|| format!("CSV line {}", i + 2))?;
        out.push(RawTransaction {
            date: row.date,
            description: row.description,
            deposits: cell(row.deposits),
            withdrawals: cell(row.withdrawals),
            amount: cell(row.amount),
            balance: cell(row.balance),
        });
    }
    Ok(out)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonStatement {
    Envelope {
        transactions: Vec<RawTransaction>,
        #[serde(default, rename = "pageCount")]
        page_count: Option<u32>,
    },
    Records(Vec<RawTransaction>),
}

/// Read raw records from JSON: a bare array or an envelope with `pageCount`.
pub fn read_json(text: &str) -> Result<(Vec<RawTransaction>, Option<u32>)> {
    let parsed: JsonStatement =
        serde_json::from_str(text).context("expected an array of records or a {\"transactions\": [...]} object")?;
    Ok(match parsed {
        JsonStatement::Envelope {
            transactions,
            page_count,
        } => (transactions, page_count),
        JsonStatement::Records(records) => (records, None),
    })
}
