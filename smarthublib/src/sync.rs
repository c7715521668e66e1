//! Transport provider — whole-dataset push/pull against a user-configured endpoint.
//!
//! Last-writer-wins: a push overwrites the remote snapshot, a pull overwrites
//! the local dataset. No retry, no timeout, no conflict resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::store::Dataset;

pub trait Transport {
    /// Fire-and-forget POST; the response body is ignored.
    fn push(&self, url: &str, payload: &Value) -> Result<()>;
    /// GET followed by a JSON parse.
    fn pull(&self, url: &str) -> Result<Value>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn push(&self, url: &str, payload: &Value) -> Result<()> {
        self.client.post(url).json(payload).send()?;
        Ok(())
    }

    fn pull(&self, url: &str) -> Result<Value> {
        Ok(self.client.get(url).send()?.json()?)
    }
}

/// The dataset as shipped over the wire, stamped with the export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: Dataset,
}

/// Ships the dataset to the endpoint; returns the export timestamp for the
/// caller to record as `last_sync`.
pub fn push_backup(
    transport: &dyn Transport,
    url: &str,
    data: &Dataset,
) -> Result<DateTime<Utc>> {
    let snapshot = Snapshot {
        exported_at: Utc::now(),
        data: data.clone(),
    };
    transport.push(url, &serde_json::to_value(&snapshot)?)?;
    Ok(snapshot.exported_at)
}

/// Fetches the remote snapshot; the caller replaces the local dataset with it.
pub fn pull_restore(transport: &dyn Transport, url: &str) -> Result<Dataset> {
    let snapshot: Snapshot = serde_json::from_value(transport.pull(url)?)?;
    Ok(snapshot.data)
}
