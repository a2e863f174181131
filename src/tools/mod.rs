//! Tool Adapters for the Research Stage
//!
//! This module provides the tool infrastructure that lets the researcher
//! agent see beyond the model's training data. Every adapter implements
//! the [`Tool`](crate::tools::registry::Tool) trait; the
//! [`registry`](crate::tools::registry) collects the enabled adapters in a
//! fixed order and runs them all against the incoming query before the
//! research prompt is assembled.
//!
//! # Module Structure
//!
//! - [`registry`](crate::tools::registry) - Trait, typed errors, ordered registry
//! - [`scrape`](crate::tools::scrape) - Web scraping via a FireCrawl-style API
//! - [`knowledge`](crate::tools::knowledge) - Deterministic knowledge-base stub
//!
//! # Failure Model
//!
//! Tool failures never abort a pipeline run. Each invocation produces a
//! [`ToolReport`](crate::tools::registry::ToolReport) whose error rendering
//! lands in the research transcript, so the model knows what was
//! unavailable and answers from what remains.

/// Knowledge-base lookup adapter (deterministic stub).
pub mod knowledge;
/// Tool trait, errors, and the ordered registry.
pub mod registry;
/// Web scrape adapter.
pub mod scrape;

pub use knowledge::KnowledgeBaseTool;
pub use registry::{Tool, ToolError, ToolRegistry, ToolReport};
pub use scrape::WebScrapeTool;
