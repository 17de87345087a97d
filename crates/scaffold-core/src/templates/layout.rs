//! Fixed layout of the template tree
//!
//! The template source is an opaque copy source: no manifest is parsed and
//! no structure is interpreted beyond the filename matching defined here.

use crate::project::Llm;

/// Directory of per-language rules documents (`<language>.md`)
pub const RULES_DIR: &str = "Rules";

/// Directories that must exist in the template source and are copied whole
pub const REQUIRED_DIRS: &[&str] = &["Rules", "PRPs", "examples"];

/// Staged inner source skeleton; renamed to the project name when present
pub const STAGED_PROJECT_DIR: &str = "project";

/// Directories copied only when the template source provides them
pub const OPTIONAL_DIRS: &[&str] = &[STAGED_PROJECT_DIR];

/// Root documents that must exist in the template source
pub const REQUIRED_FILES: &[&str] = &["GETTING_STARTED.md", "INITIAL_EXAMPLE.md", "README.md"];

/// Root documents copied only when present
pub const OPTIONAL_FILES: &[&str] = &[".gitignore"];

/// Path of the language-agnostic PRP template within a generated project
pub const PRP_BASE: &str = "PRPs/templates/prp_base.md";

/// Marker replaced wholesale with the uppercase LLM identifier
pub const LLM_PLACEHOLDER: &str = "{{LLM}}";

/// Relative path of the per-language PRP template variant
pub fn prp_variant(language: &str) -> String {
    format!("PRPs/templates/prp_template_{language}.md")
}

/// Relative path of a language's rules document
pub fn rules_doc(language: &str) -> String {
    format!("{RULES_DIR}/{language}.md")
}

/// Replace every occurrence of the placeholder with the LLM identifier
pub fn resolve_placeholder(content: &str, llm: Llm) -> String {
    content.replace(LLM_PLACEHOLDER, llm.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_and_rules_paths_follow_language_name() {
        assert_eq!(
            prp_variant("python"),
            "PRPs/templates/prp_template_python.md"
        );
        assert_eq!(rules_doc("typescript"), "Rules/typescript.md");
    }

    #[test]
    fn placeholder_replaced_at_every_occurrence() {
        let content = "Use {{LLM}} here.\n{{LLM}} again, and once more: {{LLM}}.";
        let resolved = resolve_placeholder(content, Llm::Claude);
        assert_eq!(resolved.matches("CLAUDE").count(), 3);
        assert!(!resolved.contains(LLM_PLACEHOLDER));
    }

    #[test]
    fn content_without_placeholder_is_unchanged() {
        let content = "no markers in here";
        assert_eq!(resolve_placeholder(content, Llm::Gemini), content);
    }
}
