//! Language discovery from the template's rules directory
//!
//! The set of supported languages is not hard-coded: it is derived at
//! runtime from the `.md` files sitting in the `Rules/` directory of the
//! template source, one file per language.

use crate::error::ScaffoldError;
use crate::templates::layout;
use std::path::{Path, PathBuf};

/// List the languages available in the template source.
///
/// Returns the sorted file stems of `Rules/*.md`. A missing rules directory
/// or an empty set is a template-integrity error, never a silent fallback.
pub fn discover_languages(template_root: &Path) -> Result<Vec<String>, ScaffoldError> {
    let rules_dir = template_root.join(layout::RULES_DIR);
    if !rules_dir.is_dir() {
        return Err(ScaffoldError::RulesDirMissing(rules_dir));
    }

    let mut languages = Vec::new();
    for entry in std::fs::read_dir(&rules_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            languages.push(stem.to_string());
        }
    }

    if languages.is_empty() {
        return Err(ScaffoldError::NoLanguages(rules_dir));
    }
    languages.sort();
    Ok(languages)
}

/// Path of a language's rules document, if the template source has one
pub fn rules_document(template_root: &Path, language: &str) -> Option<PathBuf> {
    let path = template_root.join(layout::rules_doc(language));
    path.is_file().then_some(path)
}
