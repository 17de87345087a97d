//! Template staging from remote (archive URL) or local directory
//!
//! Remote sources are zip archives fetched over HTTP and extracted into a
//! scoped temporary directory under the system temp location. The staging
//! directory is removed when the [`StagedTemplate`] guard drops, on both
//! success and failure paths. Local sources are used in place, read-only.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;
use zip::ZipArchive;

/// Template source - either remote archive URL or local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Remote(Url),
    Local(PathBuf),
}

impl TemplateSource {
    /// Create a remote template source from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.template_url_env())
            .unwrap_or_else(|_| config.default_template_url().to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid template URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// A staged, readable template tree.
///
/// Holds the temporary staging directory alive for remote sources; dropping
/// the value removes it. Local sources carry no staging directory.
#[derive(Debug)]
pub struct StagedTemplate {
    root: PathBuf,
    staging: Option<TempDir>,
}

impl StagedTemplate {
    /// Root of the staged template tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the tree lives in a temporary staging directory
    pub fn is_temporary(&self) -> bool {
        self.staging.is_some()
    }
}

/// Template fetcher - stages templates from remote or local sources
pub struct TemplateFetcher {
    source: TemplateSource,
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: TemplateSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let source = TemplateSource::from_config(config)?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Create a fetcher for local templates
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(TemplateSource::local(path), user_agent)
    }

    /// Get the template source
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Stage the template tree for reading.
    ///
    /// Fetch or extraction failure of a remote archive is fatal; a missing
    /// local directory is fatal.
    pub async fn stage(&self) -> Result<StagedTemplate> {
        match &self.source {
            TemplateSource::Local(path) => {
                if !path.is_dir() {
                    return Err(ScaffoldError::SourceMissing(path.clone()).into());
                }
                Ok(StagedTemplate {
                    root: path.clone(),
                    staging: None,
                })
            }
            TemplateSource::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch template archive from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch template archive from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                let bytes = response.bytes().await?.to_vec();

                let staging = tempfile::Builder::new()
                    .prefix("prp-template-")
                    .tempdir()
                    .context("Failed to create staging directory")?;
                Self::extract_archive(&bytes, staging.path())?;
                let root = Self::strip_single_root(staging.path())?;

                Ok(StagedTemplate {
                    root,
                    staging: Some(staging),
                })
            }
        }
    }

    /// Extract a zip archive onto disk under `dest`
    fn extract_archive(zip_bytes: &[u8], dest: &Path) -> Result<()> {
        let cursor = Cursor::new(zip_bytes);
        let mut archive =
            ZipArchive::new(cursor).context("Failed to read template archive")?;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            // Reject entries that would escape the staging directory
            let Some(relative) = file.enclosed_name() else {
                continue;
            };
            let target = dest.join(relative);

            if file.is_dir() {
                std::fs::create_dir_all(&target)?;
                continue;
            }
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            std::fs::write(&target, &contents)
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }

        Ok(())
    }

    /// Archives exported from hosting providers wrap the tree in a single
    /// `<repo>-<ref>/` directory; descend into it when that is the case.
    fn strip_single_root(dir: &Path) -> Result<PathBuf> {
        let entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
        if entries.len() == 1 && entries[0].path().is_dir() {
            Ok(entries[0].path())
        } else {
            Ok(dir.to_path_buf())
        }
    }
}
