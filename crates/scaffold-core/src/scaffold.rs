//! The ordered scaffolding pipeline
//!
//! Every step is a fallible function; [`execute`] runs them strictly in
//! sequence. There is no retry logic and no rollback of a partially
//! populated destination: a failed step fails the whole run.

use crate::error::ScaffoldError;
use crate::project::{Llm, ProjectRequest};
use crate::runtime;
use crate::templates::{copier, layout, rules};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a completed run produced
#[derive(Debug)]
pub struct ScaffoldReport {
    /// The created destination directory
    pub destination: PathBuf,
    /// Template assets copied into the destination, in copy order
    pub copied: Vec<String>,
    /// Whether a per-language PRP template variant was found and resolved
    pub prp_configured: bool,
    /// Whether a per-language rules document replaced the branding file
    pub rules_applied: bool,
    /// The inner source directory holding the initialized repository
    pub source_dir: PathBuf,
}

/// Create the destination directory, failing if anything is already there
pub async fn create_destination(dest: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(dest).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            ScaffoldError::DestinationExists(dest.to_path_buf())
        } else {
            ScaffoldError::Io(e)
        }
    })
}

/// Copy the selected LLM's branding document into the destination root
pub async fn write_branding(
    template_root: &Path,
    dest: &Path,
    llm: Llm,
) -> Result<(), ScaffoldError> {
    let src = template_root.join(llm.branding_file());
    if !src.is_file() {
        return Err(ScaffoldError::MissingAsset(llm.branding_file().to_string()));
    }
    fs::copy(&src, dest.join(llm.branding_file())).await?;
    Ok(())
}

/// Resolve the per-language PRP template variant, when the template has one.
///
/// Reads `PRPs/templates/prp_template_<lang>.md` from the copied tree,
/// replaces every placeholder occurrence with the uppercase LLM name, and
/// writes the result over the language-agnostic template path. A missing
/// variant means the language has no specialized template; skip silently.
pub async fn configure_prp_template(
    dest: &Path,
    language: &str,
    llm: Llm,
) -> Result<bool, ScaffoldError> {
    let variant = dest.join(layout::prp_variant(language));
    if !variant.is_file() {
        return Ok(false);
    }
    let content = fs::read_to_string(&variant).await?;
    let resolved = layout::resolve_placeholder(&content, llm);
    fs::write(dest.join(layout::PRP_BASE), resolved).await?;
    Ok(true)
}

/// Write the language's rules document over the branding file.
///
/// The rules *content* goes into the LLM-named destination file. When the
/// template source has no rules document for the language, the branding
/// file from the previous step is left untouched.
pub async fn write_language_rules(
    template_root: &Path,
    dest: &Path,
    language: &str,
    llm: Llm,
) -> Result<bool, ScaffoldError> {
    let Some(rules_doc) = rules::rules_document(template_root, language) else {
        return Ok(false);
    };
    let content = fs::read(&rules_doc).await?;
    fs::write(dest.join(llm.branding_file()), content).await?;
    Ok(true)
}

/// Produce the inner source directory named after the project.
///
/// Renames the staged skeleton when the template provided one, otherwise
/// creates the directory fresh.
pub async fn stage_source_dir(dest: &Path, name: &str) -> Result<PathBuf, ScaffoldError> {
    let staged = dest.join(layout::STAGED_PROJECT_DIR);
    let inner = dest.join(name);

    if staged.is_dir() && staged != inner {
        fs::rename(&staged, &inner).await?;
    } else if !inner.exists() {
        fs::create_dir(&inner).await?;
    }
    Ok(inner)
}

/// Run the full pipeline against a staged template tree.
///
/// Steps, in order: create destination, copy fixed assets, write branding,
/// configure the PRP template, write language rules, stage the inner source
/// directory, initialize the git repository inside it.
pub async fn execute(
    template_root: &Path,
    dest: &Path,
    request: &ProjectRequest,
) -> Result<ScaffoldReport> {
    create_destination(dest).await?;
    let copied = copier::copy_fixed_assets(template_root, dest).await?;
    write_branding(template_root, dest, request.llm).await?;
    let prp_configured = configure_prp_template(dest, &request.language, request.llm).await?;
    let rules_applied =
        write_language_rules(template_root, dest, &request.language, request.llm).await?;
    let source_dir = stage_source_dir(dest, &request.name).await?;
    runtime::git::init_repository(&source_dir).await?;

    Ok(ScaffoldReport {
        destination: dest.to_path_buf(),
        copied,
        prp_configured,
        rules_applied,
        source_dir,
    })
}
