use chrono::Utc;
use rust_decimal::Decimal;
use smarthublib::{
    formats::json::Json,
    model::{new_id, Loan, Month},
    store::Dataset,
    traits::{ReadFormat, WriteFormat},
};
use std::io::Cursor;

#[test]
fn json_snapshot_roundtrip() {
    let mut data = Dataset::default();
    data.loans.push(Loan {
        id: new_id(),
        platform: "Bank XYZ".into(),
        borrower_name: "Andi".into(),
        start_month: Month::Oktober,
        start_year: 2026,
        tenor_months: 3,
        due_day: 5,
        total_amount: Decimal::from(300_000),
        monthly_payment: Decimal::from(100_000),
        paid_months: 0,
        created_at: Utc::now(),
    });

    let mut out = Vec::new();
    Json::write(&mut out, &data).expect("write json");

    let text = String::from_utf8(out.clone()).expect("utf8");
    assert!(text.contains("\"borrowerName\""));
    assert!(text.contains("\"startMonth\": \"Oktober\""));

    let reread = Json::read(Cursor::new(&out)).expect("read json");
    assert_eq!(reread, data);
}

#[test]
fn empty_dataset_roundtrips_with_defaults() {
    let data = Dataset::default();
    let mut out = Vec::new();
    Json::write(&mut out, &data).expect("write json");
    let reread = Json::read(Cursor::new(&out)).expect("read json");
    assert_eq!(reread.budgets.len(), 9);
    assert_eq!(reread, data);
}
