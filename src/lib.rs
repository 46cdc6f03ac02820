//! Static catalog of Ethereum method selectors.
//!
//! The crate exposes the catalog as compile-time data (`catalog`), a fixed
//! text/JSON renderer (`report`), and the command-line plumbing used by the
//! `eth-method-catalog` binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod telemetry;

pub use catalog::{CATALOG, CatalogMatch, Category, MethodEntry};
pub use flow::FlowType;
pub use report::{OutputFormat, Report, render_catalog};
