//! Data layer: results provider trait, CSV-backed results store, and the
//! WCIF roster client.

pub mod csv_store;
pub mod provider;
pub mod wcif;

pub use csv_store::CsvResultsStore;
pub use provider::{DataError, ResultsProvider};
pub use wcif::RosterClient;
