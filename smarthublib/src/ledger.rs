//! Loan ledger — pure arithmetic over the loan collection.
//!
//! Every function here is total and side-effect free; persistence of the
//! returned collections is the caller's job (see `store`).

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{HubError, Result};
use crate::model::{new_id, Loan, Month};

/// Human-readable start/end labels spanned by a loan's tenor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: String,
    pub end: String,
}

/// Start/end month labels for `tenor_months` installments beginning in
/// `start_month start_year`. A one-month tenor starts and ends in the same
/// month. A zero tenor is not a domain input; it is normalized to 1 here.
pub fn period_range(start_month: Month, start_year: i32, tenor_months: u32) -> PeriodRange {
    let tenor = tenor_months.max(1);
    let total = start_month.index() + (tenor - 1);
    let end_month = Month::from_index(total % 12);
    let end_year = start_year + (total / 12) as i32;
    PeriodRange {
        start: format!("{start_month} {start_year}"),
        end: format!("{end_month} {end_year}"),
    }
}

impl Loan {
    /// `max(0, total - monthly * paid)`. Never negative, but deliberately not
    /// reconciled against `is_paid_off`: if the nominal installment undershoots
    /// the real payoff, a paid-off loan can still show a nonzero figure.
    pub fn remaining_balance(&self) -> Decimal {
        let due = self.total_amount - self.monthly_payment * Decimal::from(self.paid_months);
        due.max(Decimal::ZERO)
    }

    pub fn is_paid_off(&self) -> bool {
        self.paid_months >= self.tenor_months
    }

    /// Rounded share of installments paid, 0 for a zero tenor.
    pub fn progress_percent(&self) -> u32 {
        if self.tenor_months == 0 {
            return 0;
        }
        (f64::from(self.paid_months) * 100.0 / f64::from(self.tenor_months)).round() as u32
    }

    pub fn period_range(&self) -> PeriodRange {
        period_range(self.start_month, self.start_year, self.tenor_months)
    }
}

/// Records one installment payment on the matching loan. Silent no-op when the
/// loan is unknown or already paid off; all other loans pass through unchanged.
pub fn advance_payment(loans: &[Loan], loan_id: &str) -> Vec<Loan> {
    loans
        .iter()
        .map(|l| {
            if l.id == loan_id && l.paid_months < l.tenor_months {
                let mut paid = l.clone();
                paid.paid_months += 1;
                paid
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Drops the matching loan; unknown ids leave the collection unchanged.
pub fn remove_loan(loans: &[Loan], loan_id: &str) -> Vec<Loan> {
    loans.iter().filter(|l| l.id != loan_id).cloned().collect()
}

/// One alert per active loan whose due day falls within two days of `today`,
/// in input order.
///
/// The comparison is day-of-month only: a loan due on day 30 is never flagged
/// on day 1 of the following month. Upcoming dues only, never past-due.
pub fn due_soon_alerts(loans: &[Loan], today: NaiveDate) -> Vec<String> {
    let day = i64::from(today.day());
    let mut alerts = Vec::new();
    for l in loans {
        if l.is_paid_off() {
            continue;
        }
        let days = i64::from(l.due_day) - day;
        if (0..=2).contains(&days) {
            alerts.push(format!(
                "Pinjaman {} jatuh tempo dalam {} hari.",
                l.platform, days
            ));
        }
    }
    alerts
}

/// Un-validated loan form payload. The ledger functions never validate; all
/// checks happen here, at the boundary.
#[derive(Debug, Clone)]
pub struct LoanDraft {
    pub platform: String,
    pub borrower_name: String,
    pub start_month: Month,
    pub start_year: i32,
    pub tenor_months: u32,
    pub due_day: u32,
    pub total_amount: Decimal,
    pub monthly_payment: Decimal,
    pub paid_months: u32,
}

impl LoanDraft {
    fn check(&self) -> Result<()> {
        if self.platform.trim().is_empty() {
            return Err(HubError::Validation("platform must not be empty".into()));
        }
        if self.tenor_months == 0 {
            return Err(HubError::Validation("tenor must be at least 1 month".into()));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(HubError::Validation(format!(
                "due day must be 1..=31, got {}",
                self.due_day
            )));
        }
        if self.total_amount < Decimal::ZERO {
            return Err(HubError::Validation("total amount must not be negative".into()));
        }
        if self.monthly_payment < Decimal::ZERO {
            return Err(HubError::Validation(
                "monthly payment must not be negative".into(),
            ));
        }
        // paid_months above the tenor is allowed: the edit form always could
        // create a loan directly in the paid-off state.
        Ok(())
    }

    /// New loan with a fresh id and creation timestamp.
    pub fn create(self) -> Result<Loan> {
        self.check()?;
        Ok(Loan {
            id: new_id(),
            platform: self.platform,
            borrower_name: self.borrower_name,
            start_month: self.start_month,
            start_year: self.start_year,
            tenor_months: self.tenor_months,
            due_day: self.due_day,
            total_amount: self.total_amount,
            monthly_payment: self.monthly_payment,
            paid_months: self.paid_months,
            created_at: Utc::now(),
        })
    }

    /// Edit-and-resave: full field replace, keeping id and creation timestamp.
    pub fn apply_to(self, loan: &Loan) -> Result<Loan> {
        self.check()?;
        Ok(Loan {
            id: loan.id.clone(),
            platform: self.platform,
            borrower_name: self.borrower_name,
            start_month: self.start_month,
            start_year: self.start_year,
            tenor_months: self.tenor_months,
            due_day: self.due_day,
            total_amount: self.total_amount,
            monthly_payment: self.monthly_payment,
            paid_months: self.paid_months,
            created_at: loan.created_at,
        })
    }
}
