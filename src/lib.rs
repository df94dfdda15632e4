//! Flow - terminal-based personal expense tracker
//!
//! This library provides the core functionality for the Flow expense
//! tracker: recording expenses against categories, derived spending
//! summaries, USD/NGN display conversion, and CSV/JSON import/export.
//! All state lives in local JSON files; there is no server.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, currency table)
//! - `storage`: Tolerant JSON file storage layer
//! - `store`: Reactive state cells, derived aggregates, and the tracker
//! - `import`: Payload validation, sanitation, and merge strategies
//! - `export`: CSV and JSON export
//! - `display`: Formatting helpers for terminal output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use flow::config::paths::FlowPaths;
//! use flow::store::Tracker;
//!
//! let tracker = Tracker::open(FlowPaths::new()?)?;
//! println!("total spent: {}", tracker.summary().total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod storage;
pub mod store;

pub use error::{FlowError, FlowResult};
