use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use smarthublib::{
    model::{new_id, Loan, Month, SyncConfig, Transaction, TxKind},
    store::{
        load_sync_config, save_sync_config, Dataset, JsonFileStore, KvStore, MemStore,
    },
};

fn sample_dataset() -> Dataset {
    let mut data = Dataset::default();
    data.loans.push(Loan {
        id: new_id(),
        platform: "Bank XYZ".into(),
        borrower_name: "Andi".into(),
        start_month: Month::November,
        start_year: 2026,
        tenor_months: 3,
        due_day: 15,
        total_amount: Decimal::from(300_000),
        monthly_payment: Decimal::from(100_000),
        paid_months: 1,
        created_at: Utc::now(),
    });
    data.transactions.push(Transaction {
        id: new_id(),
        description: "Groceries".into(),
        amount: Decimal::from(75_000),
        kind: TxKind::Expense,
        category: "Food".into(),
        date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date"),
    });
    data
}

#[test]
fn empty_store_loads_the_defaults() {
    let store = MemStore::new();
    let data = Dataset::load(&store).expect("load");

    assert!(data.loans.is_empty());
    assert!(data.transactions.is_empty());
    assert_eq!(data.budgets.len(), 9);
    assert!(data.budgets.iter().all(|b| b.limit == Decimal::ZERO));
    assert_eq!(data.unit_links.len(), 3);
    assert!(data.unit_links.values().all(|l| l.is_empty()));
}

#[test]
fn mem_store_roundtrip() {
    let mut store = MemStore::new();
    let data = sample_dataset();
    data.save(&mut store).expect("save");

    let loaded = Dataset::load(&store).expect("load");
    assert_eq!(loaded, data);
}

#[test]
fn file_store_roundtrip_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("smarthub.json");

    let mut store = JsonFileStore::open(&path).expect("open fresh");
    let data = sample_dataset();
    data.save(&mut store).expect("save");
    drop(store);

    let store = JsonFileStore::open(&path).expect("reopen");
    let loaded = Dataset::load(&store).expect("load");
    assert_eq!(loaded, data);
}

#[test]
fn missing_file_reads_as_empty_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::open(dir.path().join("nope.json")).expect("open");
    assert!(store.get("anything").expect("get").is_none());
}

#[test]
fn sync_config_roundtrip() {
    let mut store = MemStore::new();
    assert!(load_sync_config(&store).expect("load").is_none());

    let config = SyncConfig {
        script_url: "https://example.com/backup".into(),
        last_sync: None,
    };
    save_sync_config(&mut store, &config).expect("save");
    assert_eq!(load_sync_config(&store).expect("load"), Some(config));
}

#[test]
fn collections_live_under_their_own_keys() {
    let mut store = MemStore::new();
    sample_dataset().save(&mut store).expect("save");

    let loans = store
        .get("productivity_2026_loans_simple")
        .expect("get")
        .expect("key written");
    assert_eq!(loans.as_array().map(|a| a.len()), Some(1));
    // camelCase on the wire
    assert!(loans[0].get("borrowerName").is_some());
    assert!(loans[0].get("tenorMonths").is_some());
}
