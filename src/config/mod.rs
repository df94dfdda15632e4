//! Configuration and path management for Flow

pub mod paths;

pub use paths::FlowPaths;
