//! Roadmap Planning - structured roadmaps with effort estimates
//!
//! This crate provides the roadmap tree (phases, epics, stories, tasks, risks
//! and exit gates), bottom-up hour aggregation, a velocity-based duration
//! estimator, and Markdown/JSON renderers.

pub mod document;
pub mod generator;
pub mod markdown;
pub mod model;
pub mod summary;
pub mod templates;

pub use document::RoadmapDocument;
pub use generator::{RoadmapGenerator, DEFAULT_BUFFER_PERCENTAGE, DEFAULT_VELOCITY_PER_PERSON};
pub use model::{Epic, ExitCriteria, Phase, Risk, Roadmap, Story, Task, TeamAllocation};
pub use summary::RoadmapSummary;
pub use templates::{minimal_roadmap, notification_system_roadmap};
