//! Copying the fixed template assets into the destination
//!
//! The copy is non-destructive to the source and preserves subtree
//! structure byte-for-byte. Required assets that are missing abort the
//! run; optional assets are skipped silently.

use crate::error::ScaffoldError;
use crate::templates::layout;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Recursively copy `src` into `dst`, preserving structure
pub async fn copy_tree(src: &Path, dst: &Path) -> Result<(), ScaffoldError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).await?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::copy(entry.path(), &target).await?;
        }
    }
    Ok(())
}

/// Copy the fixed set of template directories and root documents.
///
/// Returns the names of the assets that were copied, in copy order.
pub async fn copy_fixed_assets(
    template_root: &Path,
    dest: &Path,
) -> Result<Vec<String>, ScaffoldError> {
    let mut copied = Vec::new();

    for dir in layout::REQUIRED_DIRS {
        let src = template_root.join(dir);
        if !src.is_dir() {
            return Err(ScaffoldError::MissingAsset(dir.to_string()));
        }
        copy_tree(&src, &dest.join(dir)).await?;
        copied.push(dir.to_string());
    }

    for dir in layout::OPTIONAL_DIRS {
        let src = template_root.join(dir);
        if src.is_dir() {
            copy_tree(&src, &dest.join(dir)).await?;
            copied.push(dir.to_string());
        }
    }

    for file in layout::REQUIRED_FILES {
        let src = template_root.join(file);
        if !src.is_file() {
            return Err(ScaffoldError::MissingAsset(file.to_string()));
        }
        fs::copy(&src, dest.join(file)).await?;
        copied.push(file.to_string());
    }

    for file in layout::OPTIONAL_FILES {
        let src = template_root.join(file);
        if src.is_file() {
            fs::copy(&src, dest.join(file)).await?;
            copied.push(file.to_string());
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn minimal_template() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("Rules/python.md"), "# python rules\n");
        write(&root.join("PRPs/templates/prp_base.md"), "base\n");
        write(&root.join("examples/feature.md"), "example\n");
        write(&root.join("GETTING_STARTED.md"), "start\n");
        write(&root.join("INITIAL_EXAMPLE.md"), "initial\n");
        write(&root.join("README.md"), "readme\n");
        dir
    }

    #[tokio::test]
    async fn copy_tree_preserves_structure_and_bytes() {
        let src = TempDir::new().unwrap();
        write(&src.path().join("a/b/c.md"), "deep content");
        write(&src.path().join("top.md"), "top content");

        let dst = TempDir::new().unwrap();
        copy_tree(src.path(), dst.path()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dst.path().join("a/b/c.md")).unwrap(),
            "deep content"
        );
        assert_eq!(
            std::fs::read_to_string(dst.path().join("top.md")).unwrap(),
            "top content"
        );
    }

    #[tokio::test]
    async fn copies_required_and_skips_absent_optional_assets() {
        let template = minimal_template();
        let dest = TempDir::new().unwrap();

        let copied = copy_fixed_assets(template.path(), dest.path())
            .await
            .unwrap();

        assert!(copied.contains(&"Rules".to_string()));
        assert!(copied.contains(&"README.md".to_string()));
        // No staged project dir or .gitignore in this template
        assert!(!copied.contains(&"project".to_string()));
        assert!(!copied.contains(&".gitignore".to_string()));
        assert!(dest.path().join("PRPs/templates/prp_base.md").is_file());
    }

    #[tokio::test]
    async fn optional_assets_are_copied_when_present() {
        let template = minimal_template();
        write(&template.path().join("project/README.md"), "inner\n");
        write(&template.path().join(".gitignore"), "target/\n");
        let dest = TempDir::new().unwrap();

        let copied = copy_fixed_assets(template.path(), dest.path())
            .await
            .unwrap();

        assert!(copied.contains(&"project".to_string()));
        assert!(copied.contains(&".gitignore".to_string()));
        assert!(dest.path().join("project/README.md").is_file());
    }

    #[tokio::test]
    async fn missing_required_asset_aborts() {
        let template = minimal_template();
        std::fs::remove_file(template.path().join("README.md")).unwrap();
        let dest = TempDir::new().unwrap();

        let err = copy_fixed_assets(template.path(), dest.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingAsset(name) if name == "README.md"));
    }
}
