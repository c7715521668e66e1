use chrono::Local;
use rust_decimal::Decimal;
use smarthublib::{
    ledger::{due_soon_alerts, LoanDraft},
    model::Month,
    store::{Dataset, MemStore},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Register one loan, persist it, and print its nota figures.
    let mut store = MemStore::new();
    let mut data = Dataset::default();

    let loan = LoanDraft {
        platform: "Bank XYZ".into(),
        borrower_name: "Andi".into(),
        start_month: Month::November,
        start_year: 2026,
        tenor_months: 4,
        due_day: 5,
        total_amount: Decimal::from(400_000),
        monthly_payment: Decimal::from(100_000),
        paid_months: 1,
    }
    .create()?;
    data.loans.insert(0, loan);
    data.save(&mut store)?;

    let data = Dataset::load(&store)?;
    for l in &data.loans {
        let range = l.period_range();
        println!(
            "{}: {} -> {}, {}% paid, sisa Rp {}",
            l.platform,
            range.start,
            range.end,
            l.progress_percent(),
            l.remaining_balance()
        );
    }
    for alert in due_soon_alerts(&data.loans, Local::now().date_naive()) {
        println!("{alert}");
    }
    Ok(())
}
