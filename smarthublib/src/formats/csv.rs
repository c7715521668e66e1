//! Transactions as flat CSV for spreadsheet hand-off. Headers:
//! id,date,description,amount,kind,category
//!
//! Reading yields a dataset carrying only transactions; the other collections
//! stay at their defaults.

use crate::{
    error::{HubError, Result},
    model::{new_id, Transaction, TxKind},
    store::Dataset,
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    id: Option<String>,
    date: String,
    description: String,
    amount: String,
    kind: String,
    category: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    id: &'a str,
    date: String,
    description: &'a str,
    amount: String,
    kind: &'a str,
    category: &'a str,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Dataset> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut data = Dataset::default();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;

            let kind = match row.kind.as_str() {
                "income" | "I" | "i" => TxKind::Income,
                "expense" | "E" | "e" => TxKind::Expense,
                other => return Err(HubError::Parse(format!("unknown kind: {other}"))),
            };

            data.transactions.push(Transaction {
                id: row.id.filter(|s| !s.is_empty()).unwrap_or_else(new_id),
                description: row.description,
                amount: row
                    .amount
                    .parse::<Decimal>()
                    .map_err(|e| HubError::Parse(format!("amount: {e}")))?,
                kind,
                category: row.category,
                date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                    .map_err(|e| HubError::Parse(format!("date: {e}")))?,
            });
        }

        Ok(data)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, data: &Dataset) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for t in &data.transactions {
            let out = CsvOutRow {
                id: &t.id,
                date: t.date.format("%Y-%m-%d").to_string(),
                description: &t.description,
                amount: t.amount.to_string(),
                kind: match t.kind {
                    TxKind::Income => "income",
                    TxKind::Expense => "expense",
                },
                category: &t.category,
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
