//! prp CLI - Scaffolding for PRP-driven context-engineering projects

use anyhow::Result;
use clap::Parser;
use scaffold_core::tui::CreateArgs;
use scaffold_core::{Llm, ProductConfig, ProjectRequest};
use std::path::{Path, PathBuf};

/// prp product configuration
#[derive(Clone)]
pub struct PrpConfig;

impl ProductConfig for PrpConfig {
    fn name(&self) -> &'static str {
        "prp"
    }

    fn display_name(&self) -> &'static str {
        "prp"
    }

    fn default_template_url(&self) -> &'static str {
        "https://codeload.github.com/prp-dev/prp-template/zip/refs/heads/main"
    }

    fn template_url_env(&self) -> &'static str {
        "PRP_TEMPLATE_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/prp-dev/prp-template"
    }

    fn next_steps(&self, dir: &Path, request: &ProjectRequest) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_ref() != Some(&dir.to_path_buf()) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Learn the workflow
        steps.push("Open GETTING_STARTED.md to learn the PRP workflow".to_string());

        // Step 3: First feature
        steps.push(format!(
            "Describe your first feature the way INITIAL_EXAMPLE.md does, \
             then hand it to {} with the configured PRP template",
            request.llm
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "prp-tools")]
#[command(about = "CLI for scaffolding PRP context-engineering projects")]
#[command(version)]
pub struct Args {
    /// Project name; the destination directory is created under the current directory
    #[arg(short, long)]
    pub name: String,

    /// Rules language for the generated project (discovered from the template source)
    #[arg(short, long)]
    pub lang: String,

    /// Target LLM assistant: gemini or claude (case-insensitive)
    #[arg(short = 'm', long, value_parser = parse_llm)]
    pub llm: Llm,

    /// Local directory to use for templates instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

fn parse_llm(s: &str) -> Result<Llm, String> {
    s.parse().map_err(|e: scaffold_core::ScaffoldError| e.to_string())
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            language: args.lang,
            llm: args.llm,
            template_dir: args.template_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = PrpConfig;

    let result = scaffold_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
