//! Template staging, discovery, and copying
//!
//! This module provides:
//! - Template staging from remote archive URLs or local directories
//! - Language discovery from the template's rules directory
//! - Fixed-asset copying with required/optional semantics
//! - The fixed template-tree layout and placeholder substitution

pub mod copier;
pub mod fetcher;
pub mod layout;
pub mod rules;

pub use copier::{copy_fixed_assets, copy_tree};
pub use fetcher::{StagedTemplate, TemplateFetcher, TemplateSource};
pub use rules::{discover_languages, rules_document};
