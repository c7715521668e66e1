//! Transaction totals and budget upkeep.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::model::{Budget, Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Income/expense totals over the transactions booked in one calendar month.
pub fn monthly_totals(transactions: &[Transaction], year: i32, month: u32) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        if t.date.year() != year || t.date.month() != month {
            continue;
        }
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expenses += t.amount,
        }
    }
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Replaces the limit of the matching category; other budgets pass through.
pub fn update_budget(budgets: &[Budget], category: &str, limit: Decimal) -> Vec<Budget> {
    budgets
        .iter()
        .map(|b| {
            if b.category == category {
                Budget {
                    category: b.category.clone(),
                    limit,
                }
            } else {
                b.clone()
            }
        })
        .collect()
}
