//! Project request validation
//!
//! A [`ProjectRequest`] is the validated, immutable triple of project name,
//! rules language, and target LLM. It is constructed once from CLI input
//! after language discovery and never mutated afterwards.

use crate::error::ScaffoldError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported LLM assistants a generated project can be branded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Llm {
    Gemini,
    Claude,
}

impl Llm {
    /// Uppercase identifier, also the placeholder substitution value
    pub fn as_str(&self) -> &'static str {
        match self {
            Llm::Gemini => "GEMINI",
            Llm::Claude => "CLAUDE",
        }
    }

    /// Name of the branding document at the template root
    pub fn branding_file(&self) -> &'static str {
        match self {
            Llm::Gemini => "GEMINI.md",
            Llm::Claude => "CLAUDE.md",
        }
    }
}

impl fmt::Display for Llm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Llm {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GEMINI" => Ok(Llm::Gemini),
            "CLAUDE" => Ok(Llm::Claude),
            _ => Err(ScaffoldError::UnknownLlm(s.to_string())),
        }
    }
}

/// Validated scaffolding request: {name, language, llm}
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub name: String,
    pub language: String,
    pub llm: Llm,
}

impl ProjectRequest {
    /// Validate the raw CLI inputs against the discovered language set.
    ///
    /// `available` is the set of languages discovered from the template
    /// source's rules directory; membership is case-sensitive because the
    /// language name feeds directly into filename lookups.
    pub fn new(
        name: &str,
        language: &str,
        llm: Llm,
        available: &[String],
    ) -> Result<Self, ScaffoldError> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::EmptyName);
        }
        if !available.iter().any(|l| l == language) {
            return Err(ScaffoldError::UnknownLanguage {
                given: language.to_string(),
                available: available.to_vec(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            language: language.to_string(),
            llm,
        })
    }

    /// Resolve the destination directory under `base` (normally the cwd)
    pub fn destination_in(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }
}

/// Fail fast if anything already exists at the destination path.
///
/// The tool never overwrites or merges into an existing directory.
pub fn ensure_destination_free(path: &Path) -> Result<(), ScaffoldError> {
    if path.exists() {
        return Err(ScaffoldError::DestinationExists(path.to_path_buf()));
    }
    Ok(())
}
