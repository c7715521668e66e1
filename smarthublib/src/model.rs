//! Domain records — the normalized dataset shared by the ledger, store, formats and sync.
//!
//! Field names serialize in camelCase so a stored dataset is interchangeable with
//! the browser-era JSON exports.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::HubError;

/// Built-in spending categories; the default budget set carries one zero-limit
/// budget per entry.
pub const CATEGORIES: [&str; 9] = [
    "Food",
    "Transport",
    "Work",
    "Entertainment",
    "Health",
    "Shopping",
    "Bills",
    "Debt",
    "Other",
];

/// Opaque record identifier, assigned once at creation.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Calendar month, labelled as in the stored data (Indonesian month names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    Januari,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Januari,
        Month::Februari,
        Month::Maret,
        Month::April,
        Month::Mei,
        Month::Juni,
        Month::Juli,
        Month::Agustus,
        Month::September,
        Month::Oktober,
        Month::November,
        Month::Desember,
    ];

    /// Calendar position, 0-based (Januari = 0).
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Month at a 0-based calendar position; wraps past Desember.
    pub fn from_index(idx: u32) -> Month {
        Month::ALL[(idx % 12) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::Januari => "Januari",
            Month::Februari => "Februari",
            Month::Maret => "Maret",
            Month::April => "April",
            Month::Mei => "Mei",
            Month::Juni => "Juni",
            Month::Juli => "Juli",
            Month::Agustus => "Agustus",
            Month::September => "September",
            Month::Oktober => "Oktober",
            Month::November => "November",
            Month::Desember => "Desember",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HubError::Parse(format!("unknown month: {s}")))
    }
}

/// One installment obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub platform: String,
    pub borrower_name: String,
    pub start_month: Month,
    pub start_year: i32,
    /// Total number of scheduled monthly installments.
    pub tenor_months: u32,
    /// Day of month the payment is due, 1–31, unchecked against the real calendar.
    pub due_day: u32,
    pub total_amount: Decimal,
    pub monthly_payment: Decimal,
    /// Installments paid so far; only `ledger::advance_payment` moves it forward.
    pub paid_months: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: String,
    pub limit: Decimal,
}

/// The default budget allocation: every built-in category with a zero limit.
pub fn default_budgets() -> Vec<Budget> {
    CATEGORIES
        .iter()
        .map(|c| Budget {
            category: (*c).to_string(),
            limit: Decimal::ZERO,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Shoot,
    Editing,
    #[serde(rename = "Finish Editing")]
    FinishEditing,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BusinessUnit {
    #[serde(rename = "Capital Properties")]
    CapitalProperties,
    Ngubahrumah,
    Platinum,
}

impl BusinessUnit {
    pub const ALL: [BusinessUnit; 3] = [
        BusinessUnit::CapitalProperties,
        BusinessUnit::Ngubahrumah,
        BusinessUnit::Platinum,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskWeek {
    #[serde(rename = "Week 1")]
    Week1,
    #[serde(rename = "Week 2")]
    Week2,
    #[serde(rename = "Week 3")]
    Week3,
    #[serde(rename = "Week 4")]
    Week4,
}

impl TaskWeek {
    pub const ALL: [TaskWeek; 4] = [
        TaskWeek::Week1,
        TaskWeek::Week2,
        TaskWeek::Week3,
        TaskWeek::Week4,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub status: TaskStatus,
    pub business_unit: BusinessUnit,
    pub week: TaskWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Heading,
    Subheading,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: NoteType,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignPlatform {
    Canva,
    Corel,
    Figma,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignAsset {
    pub id: String,
    pub name: String,
    pub unit: BusinessUnit,
    pub platform: DesignPlatform,
    pub link: String,
    pub created_at: NaiveDate,
}

/// Per-unit ecosystem links; empty string means not configured.
pub fn default_unit_links() -> BTreeMap<BusinessUnit, String> {
    BusinessUnit::ALL
        .into_iter()
        .map(|u| (u, String::new()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    pub script_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}
