//! Reactive domain state for Flow
//!
//! The store layer owns the live collections and recomputes derived
//! aggregates on every mutation. State lives in copy-on-write cells;
//! persistence and the summary view are wired as subscribers.

pub mod cell;
pub mod summary;
pub mod tracker;

pub use cell::StateCell;
pub use summary::{summarize, ExpenseSummary};
pub use tracker::Tracker;
