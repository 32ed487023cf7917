//! # roadmap-core
//!
//! Core types for the roadmap generator.
//!
//! A roadmap is a tree of phases, epics, stories and tasks. This crate holds the
//! pieces every layer shares:
//!
//! - Sizing, priority and risk enumerations, each carrying a weight and a label
//! - A validated weekly [`Capacity`] used to turn hours into weeks
//! - Unified error type and configuration loading

mod config;
mod error;
mod types;

pub use config::{EstimationConfig, OutputConfig, OutputFormat, RoadmapConfig};
pub use error::{Result, RoadmapError};
pub use types::*;
