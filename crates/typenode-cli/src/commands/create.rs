//! The one command this binary has: scaffold a project.
//!
//! Responsibility: translate CLI arguments into a `TargetLocation`, wire the
//! concrete adapters into the core scaffold service, and display results.
//! No business logic lives here.

use tracing::{debug, info, instrument};

use typenode_adapters::{LocalFilesystem, NpmInstaller, resolve_template_dir};
use typenode_core::application::{
    ScaffoldOptions, ScaffoldOutcome, ScaffoldReport, ScaffoldService, ScaffoldWarning,
    ports::Prompt as _,
};
use typenode_core::domain::TargetLocation;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::StdinPrompt,
};

/// Execute a scaffold run.
///
/// Sequence:
/// 1. Resolve the raw name (argument, or interactive prompt)
/// 2. Resolve the target location against the working directory
/// 3. Resolve the template directory and per-run options
/// 4. Run the core scaffold service with real adapters
/// 5. Report the outcome, surfaced warnings included
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header(&format!(
        "create-typenode v{}",
        typenode_core::VERSION
    ))?;

    // 1. Raw name: positional argument, or ask.
    let prompt = StdinPrompt::new();
    let raw_name = match cli.name {
        Some(name) => name,
        None => prompt
            .input(
                "Project name, or '.' for the current directory",
                &config.defaults.project_name,
            )
            .map_err(|_| CliError::Cancelled)?,
    };

    // 2. Target location.
    let working_dir = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "could not determine the current directory".into(),
        source: e,
    })?;
    let target = TargetLocation::resolve(&raw_name, &working_dir).map_err(|e| {
        CliError::Core(e.into())
    })?;

    debug!(
        target = %target,
        project = target.project_name(),
        "Target resolved"
    );

    // 3. Per-run options.
    let options = ScaffoldOptions {
        template_root: resolve_template_dir(config.template.dir.clone()),
        assume_yes: cli.yes,
        skip_install: cli.skip_install || config.install.skip,
    };

    // 4. Scaffold with real adapters.
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(prompt),
        Box::new(NpmInstaller::new()),
    );

    output.print(&format!("Creating '{}'...", target.project_name()))?;
    info!(project = target.project_name(), "Scaffold started");

    let outcome = service.scaffold(&target, &options)?;

    // 5. Report.
    let report = match outcome {
        ScaffoldOutcome::Cancelled => return Err(CliError::Cancelled),
        ScaffoldOutcome::Created(report) => report,
    };

    info!(project = %report.project_name, "Scaffold completed");
    output.success(&format!("Project '{}' created!", report.project_name))?;

    for warning in &report.warnings {
        output.warning(&warning.to_string())?;
        if let Some(remedy) = warning.remedy() {
            output.info(&remedy)?;
        }
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&report, options.skip_install) {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}

/// The commands the user should run next, in order.
///
/// `npm install` appears when this run did not install dependencies itself,
/// either by request or because the installer failed.
fn next_steps(report: &ScaffoldReport, skipped_install: bool) -> Vec<String> {
    let mut steps = Vec::new();

    if !report.is_current_dir {
        if let Some(dir) = report.target_path.file_name() {
            steps.push(format!("cd {}", dir.to_string_lossy()));
        }
    }

    let install_failed = report
        .warnings
        .iter()
        .any(|w| matches!(w, ScaffoldWarning::Install { .. }));
    if skipped_install || install_failed {
        steps.push("npm install".into());
    }

    steps.push("npm run dev".into());
    steps.push("npm run build".into());
    steps.push("npm run start".into());
    steps
}

// ── tests ─────────────────────────────────────────────────────────────────────
