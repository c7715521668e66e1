//! Persistence provider — a localStorage-style key/value JSON store.
//!
//! The full collection behind each key is rewritten after every mutation; there
//! are no transactions, no deltas and no schema migration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{
    default_budgets, default_unit_links, Budget, BusinessUnit, DesignAsset, Holiday, Loan, Note,
    SavingsGoal, SyncConfig, Task, Transaction,
};

pub const TRANSACTIONS_KEY: &str = "productivity_2026_finance_simple";
pub const LOANS_KEY: &str = "productivity_2026_loans_simple";
pub const GOALS_KEY: &str = "productivity_2026_goals";
pub const BUDGETS_KEY: &str = "productivity_2026_budgets";
pub const TASKS_KEY: &str = "smarthub_tasks_v2_2026";
pub const NOTES_KEY: &str = "smarthub_notes_v2_2026";
pub const HOLIDAYS_KEY: &str = "smarthub_holidays_v2_2026";
pub const ASSETS_KEY: &str = "smarthub_assets_v2_2026";
pub const UNIT_LINKS_KEY: &str = "smarthub_unit_links_v2_2026";
pub const SYNC_KEY: &str = "smarthub_sync_v2_2026";

/// String keys to JSON values, `get`-with-default / `set` semantics.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

fn get_or<T: DeserializeOwned>(store: &dyn KvStore, key: &str, default: T) -> Result<T> {
    match store.get(key)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(default),
    }
}

fn set_json<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<()> {
    store.set(key, serde_json::to_value(value)?)
}

/// In-memory store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<String, Value>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// One JSON object file holding the whole key space. The file is rewritten on
/// every `set`; a missing file reads as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

/// The whole application state, one field per storage key. Sync configuration
/// lives beside it under its own key (`load_sync_config`/`save_sync_config`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    pub loans: Vec<Loan>,
    pub goals: Vec<SavingsGoal>,
    pub budgets: Vec<Budget>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub holidays: Vec<Holiday>,
    pub assets: Vec<DesignAsset>,
    pub unit_links: BTreeMap<BusinessUnit, String>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            loans: Vec::new(),
            goals: Vec::new(),
            budgets: default_budgets(),
            tasks: Vec::new(),
            notes: Vec::new(),
            holidays: Vec::new(),
            assets: Vec::new(),
            unit_links: default_unit_links(),
        }
    }
}

impl Dataset {
    /// Reads every collection; missing keys load as the collection default.
    pub fn load(store: &dyn KvStore) -> Result<Dataset> {
        Ok(Dataset {
            transactions: get_or(store, TRANSACTIONS_KEY, Vec::new())?,
            loans: get_or(store, LOANS_KEY, Vec::new())?,
            goals: get_or(store, GOALS_KEY, Vec::new())?,
            budgets: get_or(store, BUDGETS_KEY, default_budgets())?,
            tasks: get_or(store, TASKS_KEY, Vec::new())?,
            notes: get_or(store, NOTES_KEY, Vec::new())?,
            holidays: get_or(store, HOLIDAYS_KEY, Vec::new())?,
            assets: get_or(store, ASSETS_KEY, Vec::new())?,
            unit_links: get_or(store, UNIT_LINKS_KEY, default_unit_links())?,
        })
    }

    /// Writes every collection back under its key.
    pub fn save(&self, store: &mut dyn KvStore) -> Result<()> {
        set_json(store, TRANSACTIONS_KEY, &self.transactions)?;
        set_json(store, LOANS_KEY, &self.loans)?;
        set_json(store, GOALS_KEY, &self.goals)?;
        set_json(store, BUDGETS_KEY, &self.budgets)?;
        set_json(store, TASKS_KEY, &self.tasks)?;
        set_json(store, NOTES_KEY, &self.notes)?;
        set_json(store, HOLIDAYS_KEY, &self.holidays)?;
        set_json(store, ASSETS_KEY, &self.assets)?;
        set_json(store, UNIT_LINKS_KEY, &self.unit_links)?;
        Ok(())
    }
}

pub fn load_sync_config(store: &dyn KvStore) -> Result<Option<SyncConfig>> {
    get_or(store, SYNC_KEY, None)
}

pub fn save_sync_config(store: &mut dyn KvStore, config: &SyncConfig) -> Result<()> {
    set_json(store, SYNC_KEY, config)
}
