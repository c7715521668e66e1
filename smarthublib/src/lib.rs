//! smarthublib — dataset, loan ledger, persistence and sync for the smarthub productivity tracker.

pub mod error;
pub mod model;
pub mod ledger;
pub mod finance;
pub mod planner;
pub mod store;
pub mod sync;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
}
