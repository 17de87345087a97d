//! The CLI run loop: stage, discover, validate, scaffold, report

use crate::product::ProductConfig;
use crate::project::{self, Llm, ProjectRequest};
use crate::runtime;
use crate::scaffold;
use crate::templates::{discover_languages, StagedTemplate, TemplateFetcher};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for a scaffolding run
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Project name; the destination is `<cwd>/<name>`
    pub name: String,

    /// Rules language for the generated project
    pub language: String,

    /// Target LLM assistant
    pub llm: Llm,

    /// Local directory to use for templates instead of fetching from remote
    pub template_dir: Option<PathBuf>,
}

/// Run the scaffolding pipeline with step-by-step progress output
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Stage the template source (staging dir is removed when
    // `staged` drops, on success and failure paths alike)
    let staged = stage_source(config, &args).await?;

    // Step 2: Discover languages from the rules directory
    let languages = discover_languages(staged.root())?;
    cliclack::log::info(format!("Available languages: {}", languages.join(", ")))?;

    // Step 3: Validate the request before any destination mutation
    let request = ProjectRequest::new(&args.name, &args.language, args.llm, &languages)?;
    let base = std::env::current_dir().context("Failed to resolve current directory")?;
    let dest = request.destination_in(&base);
    project::ensure_destination_free(&dest)?;

    let git = runtime::git::ensure_git()?;
    cliclack::log::success(format!(
        "git available ({})",
        git.version.as_deref().unwrap_or("unknown")
    ))?;

    // Step 4: Execute the pipeline
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let report = match scaffold::execute(staged.root(), &dest, &request).await {
        Ok(report) => {
            spinner.stop(format!(
                "Copied {} template assets into {}",
                report.copied.len(),
                report.destination.display()
            ));
            report
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    };

    if report.prp_configured {
        cliclack::log::success(format!(
            "Configured PRP template for {} ({})",
            request.language, request.llm
        ))?;
    } else {
        cliclack::log::info(format!(
            "No PRP template variant for {} (using the generic template)",
            request.language
        ))?;
    }

    if report.rules_applied {
        cliclack::log::success(format!(
            "Wrote {} rules into {}",
            request.language,
            request.llm.branding_file()
        ))?;
    } else {
        cliclack::log::info(format!(
            "No rules document for {} (keeping the generic {})",
            request.language,
            request.llm.branding_file()
        ))?;
    }

    cliclack::log::success(format!(
        "Initialized git repository in {}",
        report.source_dir.display()
    ))?;

    // Step 5: Show next steps
    print_next_steps(config, &report.destination, &request)?;

    Ok(())
}

async fn stage_source<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
) -> Result<StagedTemplate> {
    let fetcher = match &args.template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            TemplateFetcher::from_local(path.clone(), config.user_agent())
        }
        None => {
            cliclack::log::info("Using remote templates")?;
            TemplateFetcher::from_config(config)?
        }
    };

    let spinner = cliclack::spinner();
    spinner.start("Staging template source...");
    match fetcher.stage().await {
        Ok(staged) => {
            spinner.stop("Template source ready");
            Ok(staged)
        }
        Err(e) => {
            spinner.stop("Failed to stage template source");
            Err(e)
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    dest: &std::path::Path,
    request: &ProjectRequest,
) -> Result<()> {
    let steps = config.next_steps(dest, request);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  {}", format!("Docs: {}", config.docs_url()).dimmed());

    cliclack::outro("Happy prompting!")?;

    Ok(())
}
