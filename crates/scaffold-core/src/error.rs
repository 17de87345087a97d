//! Error taxonomy for the scaffolding pipeline
//!
//! Validation and template-integrity failures get their own variants so
//! callers (and tests) can tell them apart from plain I/O errors. The
//! orchestration layers wrap these in `anyhow` with extra context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("project name must not be empty")]
    EmptyName,

    #[error("unknown language '{given}'; available: {}", .available.join(", "))]
    UnknownLanguage {
        given: String,
        available: Vec<String>,
    },

    #[error("unknown LLM '{0}' (expected GEMINI or CLAUDE)")]
    UnknownLlm(String),

    #[error("template source not found: {0}")]
    SourceMissing(PathBuf),

    #[error("rules directory not found in template source: {0}")]
    RulesDirMissing(PathBuf),

    #[error("no language rules found in {0}")]
    NoLanguages(PathBuf),

    #[error("required template asset missing: {0}")]
    MissingAsset(String),

    #[error("git is not installed or not on PATH")]
    GitUnavailable,

    #[error("git init failed in {dir}: {detail}")]
    GitInit { dir: PathBuf, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
