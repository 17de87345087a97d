//! Scaffold Core - Shared library for PRP project scaffolding
//!
//! This library provides the core functionality for generating PRP-driven
//! context-engineering starter projects from a template tree. It is designed
//! to be used by CLI binaries (e.g., `prp-tools`) that share the same
//! underlying scaffolding logic but have different product configurations.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template staging, language discovery,
//!   asset copying, placeholder substitution, git initialization
//! - **Layer 2: Pipeline Orchestration** - `ProductConfig` trait and the
//!   ordered [`scaffold::execute`] pipeline
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based progress
//!   reporting (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{ProductConfig, templates, ProjectRequest};
//!
//! // Define your product config
//! #[derive(Clone)]
//! struct MyConfig;
//! impl ProductConfig for MyConfig {
//!     fn name(&self) -> &'static str { "myapp" }
//!     // ... implement other methods
//! }
//!
//! // Use the low-level APIs
//! let fetcher = templates::TemplateFetcher::from_config(&MyConfig)?;
//! let staged = fetcher.stage().await?;
//! let languages = templates::discover_languages(staged.root())?;
//! ```

pub mod error;
pub mod product;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use project::{Llm, ProjectRequest};
pub use scaffold::{execute, ScaffoldReport};
pub use templates::{
    discover_languages, StagedTemplate, TemplateFetcher, TemplateSource,
};

#[cfg(feature = "tui")]
pub use tui::run;
