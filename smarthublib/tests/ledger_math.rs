use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use smarthublib::{
    ledger::{advance_payment, due_soon_alerts, period_range, remove_loan, LoanDraft},
    model::{Loan, Month},
};

fn loan(tenor: u32, monthly: i64, total: i64, paid: u32) -> Loan {
    Loan {
        id: "loan-1".into(),
        platform: "Bank XYZ".into(),
        borrower_name: "Andi".into(),
        start_month: Month::Januari,
        start_year: 2026,
        tenor_months: tenor,
        due_day: 5,
        total_amount: Decimal::from(total),
        monthly_payment: Decimal::from(monthly),
        paid_months: paid,
        created_at: Utc::now(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).expect("valid date")
}

#[test]
fn one_month_tenor_starts_and_ends_together() {
    for (m, y) in [(Month::Januari, 2026), (Month::Desember, 2030), (Month::Juli, 1999)] {
        let r = period_range(m, y, 1);
        assert_eq!(r.start, r.end);
        assert_eq!(r.start, format!("{m} {y}"));
    }
}

#[test]
fn period_range_within_one_year() {
    let r = period_range(Month::Oktober, 2026, 3);
    assert_eq!(r.start, "Oktober 2026");
    assert_eq!(r.end, "Desember 2026");
}

#[test]
fn period_range_wraps_the_year() {
    let r = period_range(Month::November, 2026, 3);
    assert_eq!(r.start, "November 2026");
    assert_eq!(r.end, "Januari 2027");

    let r = period_range(Month::November, 2025, 4);
    assert_eq!(r.end, "Februari 2026");
}

#[test]
fn period_range_spans_multiple_years() {
    let r = period_range(Month::Maret, 2026, 25);
    assert_eq!(r.end, "Maret 2028");
}

#[test]
fn repayment_scenario_twelve_installments() {
    let mut loans = vec![loan(12, 100_000, 1_200_000, 0)];
    assert_eq!(loans[0].remaining_balance(), Decimal::from(1_200_000));

    for _ in 0..5 {
        loans = advance_payment(&loans, "loan-1");
    }
    assert_eq!(loans[0].paid_months, 5);
    assert_eq!(loans[0].remaining_balance(), Decimal::from(700_000));
    assert_eq!(loans[0].progress_percent(), 42);
    assert!(!loans[0].is_paid_off());
}

#[test]
fn advance_payment_is_a_no_op_once_paid_off() {
    let mut loans = vec![loan(2, 50, 100, 1)];
    loans = advance_payment(&loans, "loan-1");
    assert!(loans[0].is_paid_off());

    let before = loans.clone();
    for _ in 0..3 {
        loans = advance_payment(&loans, "loan-1");
    }
    assert_eq!(loans, before);
    assert_eq!(loans[0].paid_months, 2);
}

#[test]
fn advance_payment_ignores_unknown_ids() {
    let loans = vec![loan(12, 100, 1200, 3)];
    let after = advance_payment(&loans, "no-such-loan");
    assert_eq!(after, loans);
}

#[test]
fn remaining_balance_is_never_negative() {
    // nominal installments overshoot the principal
    let l = loan(10, 200, 1000, 9);
    assert_eq!(l.remaining_balance(), Decimal::ZERO);
}

#[test]
fn progress_is_zero_for_a_zero_tenor() {
    let l = loan(0, 100, 1000, 0);
    assert_eq!(l.progress_percent(), 0);
    assert!(l.is_paid_off());
}

#[test]
fn remove_loan_drops_only_the_match() {
    let mut other = loan(12, 100, 1200, 0);
    other.id = "loan-2".into();
    let loans = vec![loan(12, 100, 1200, 0), other];

    let after = remove_loan(&loans, "loan-1");
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, "loan-2");

    assert_eq!(remove_loan(&loans, "nope"), loans);
}

#[test]
fn alert_fires_inside_the_two_day_window() {
    let loans = vec![loan(12, 100, 1200, 0)]; // due day 5

    let alerts = due_soon_alerts(&loans, day(4));
    assert_eq!(alerts, vec!["Pinjaman Bank XYZ jatuh tempo dalam 1 hari.".to_string()]);

    assert_eq!(due_soon_alerts(&loans, day(5)).len(), 1);
    assert_eq!(due_soon_alerts(&loans, day(3)).len(), 1);
}

#[test]
fn alert_is_silent_outside_the_window() {
    let loans = vec![loan(12, 100, 1200, 0)]; // due day 5
    assert!(due_soon_alerts(&loans, day(8)).is_empty()); // already past
    assert!(due_soon_alerts(&loans, day(2)).is_empty()); // too early
}

#[test]
fn paid_off_loans_never_alert() {
    let loans = vec![loan(12, 100, 1200, 12)];
    assert!(due_soon_alerts(&loans, day(5)).is_empty());
}

#[test]
fn alerts_follow_input_order() {
    let mut second = loan(12, 100, 1200, 0);
    second.id = "loan-2".into();
    second.platform = "Koperasi".into();
    second.due_day = 6;
    let loans = vec![loan(12, 100, 1200, 0), second];

    let alerts = due_soon_alerts(&loans, day(5));
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].contains("Bank XYZ"));
    assert!(alerts[1].contains("Koperasi"));
}

fn draft() -> LoanDraft {
    LoanDraft {
        platform: "Bank XYZ".into(),
        borrower_name: "Andi".into(),
        start_month: Month::Oktober,
        start_year: 2026,
        tenor_months: 12,
        due_day: 5,
        total_amount: Decimal::from(1_200_000),
        monthly_payment: Decimal::from(100_000),
        paid_months: 0,
    }
}

#[test]
fn draft_creates_an_active_loan() {
    let l = draft().create().expect("valid draft");
    assert!(!l.id.is_empty());
    assert!(!l.is_paid_off());
    assert_eq!(l.period_range().end, "September 2027");
}

#[test]
fn draft_rejects_bad_fields() {
    let mut d = draft();
    d.tenor_months = 0;
    assert!(d.create().is_err());

    let mut d = draft();
    d.due_day = 0;
    assert!(d.clone().create().is_err());
    d.due_day = 32;
    assert!(d.create().is_err());

    let mut d = draft();
    d.platform = "   ".into();
    assert!(d.create().is_err());

    let mut d = draft();
    d.total_amount = Decimal::from(-1);
    assert!(d.create().is_err());

    let mut d = draft();
    d.monthly_payment = Decimal::from(-1);
    assert!(d.create().is_err());
}

#[test]
fn draft_may_start_directly_paid_off() {
    let mut d = draft();
    d.paid_months = 12;
    let l = d.create().expect("paid-off creation is permitted");
    assert!(l.is_paid_off());
}

#[test]
fn edit_keeps_id_and_creation_time() {
    let original = draft().create().expect("valid draft");

    let mut edit = draft();
    edit.platform = "Koperasi".into();
    edit.tenor_months = 6;
    let updated = edit.apply_to(&original).expect("valid edit");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.platform, "Koperasi");
    assert_eq!(updated.tenor_months, 6);
}
