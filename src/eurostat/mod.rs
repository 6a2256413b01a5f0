//! Eurostat `nrg_bal_c` access: query parameters, request, decoding.

pub mod catalog;
pub mod client;
pub mod dataset;
pub mod loader;
pub mod query;
pub mod tracker;

pub use client::FetchError;
pub use dataset::RawDataset;
pub use loader::{LoadState, use_energy_graph};
pub use query::QueryConfig;
