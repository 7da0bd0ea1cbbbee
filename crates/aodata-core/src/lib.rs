//! # aodata-core
//!
//! Fetch and export library for Albion Online market price snapshots.
//!
//! ## Overview
//!
//! This crate polls the Albion Online Data Project price API for the
//! cartesian product of item/city/quality lists and turns the answers into
//! tabular records ready for CSV export:
//!
//! - **Validated domain types** for item ids, qualities, and price records
//! - **HTTP client abstraction** so tests can run against scripted stubs
//! - **Sequential fetcher** with fixed pacing and a single bounded
//!   rate-limit retry
//! - **CSV exporter** writing timestamped files with a fixed column order
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (ItemId, Quality, PriceRecord) |
//! | [`error`] | Validation and export error types |
//! | [`export`] | Timestamped CSV output |
//! | [`fetcher`] | Sequential fetch loop and its configuration |
//! | [`http_client`] | HTTP transport abstraction |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aodata_core::{CsvExporter, FetchPlan, FetcherConfig, ItemId, PriceFetcher, Quality};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = FetchPlan::new(
//!     vec![ItemId::parse("T4_MAIN_CURSEDSTAFF")?],
//!     vec![String::from("Thetford")],
//!     vec![Quality::new(0)?],
//! );
//!
//! let fetcher = PriceFetcher::new(FetcherConfig::from_env());
//! let batch = fetcher.fetch(&plan).await;
//!
//! let exporter = CsvExporter::new("output");
//! let path = exporter.export(&batch.records, "cursed_staff")?;
//! println!("saved to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The fetch loop never fails as a whole: rate limiting is retried once,
//! transport and decode failures become per-tuple sentinel records, and
//! other non-success statuses are logged and counted as skips. Only
//! validation (at construction time) and export (at write time) return
//! `Result`.

pub mod domain;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod http_client;

// Re-export commonly used types at crate root for convenience

pub use domain::{ItemId, PriceCell, PriceEntry, PriceRecord, Quality};
pub use error::{ExportError, ValidationError};
pub use export::{CsvExporter, COLUMNS};
pub use fetcher::{
    FetchPlan, FetcherConfig, PriceBatch, PriceFetcher, API_HOST_ENV, DEFAULT_BASE_URL,
};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
