use crate::build::{self, BuildRequest, BuildResult, FeedbackAnalyzer, Ledger};
use crate::config::Config;
use crate::error::{BuildError, Result};
use colored::*;
use std::path::PathBuf;

fn relay(result: &BuildResult) {
    if !result.stdout.is_empty() {
        println!("{}", result.stdout.trim_end());
    }
    if !result.stderr.is_empty() {
        println!("{}", result.stderr.trim_end());
    }
}

fn failure_text(result: &BuildResult) -> String {
    if result.timed_out {
        format!("{}\n(timed out)", result.stderr).trim_start().to_string()
    } else {
        result.stderr.clone()
    }
}

/// Build `request`, record the artifact in the ledger and optionally run it.
pub fn handle_build(
    request: &BuildRequest,
    config: &Config,
    search_path: &[PathBuf],
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!("{}", build::plan(request, config)?);
        return Ok(());
    }

    let result = build::build(request, config, search_path)?;
    relay(&result);

    let Some(artifact) = result.artifact.clone() else {
        println!("{} Build failed", "x".red());
        if let Some(hint) = FeedbackAnalyzer::analyze(&result.stderr) {
            println!("\n{} {}", "💡".yellow(), hint);
        }
        let plan = build::plan(request, config)?;
        return Err(BuildError::BuildFailed {
            input: plan.input,
            stderr: failure_text(&result),
        });
    };

    Ledger::new(&config.paths.ledger).record(&artifact)?;
    println!("{} Built {}", "✓".green(), artifact.display());

    if request.run_after_build {
        let run = build::run(&artifact, config.build.timeout())?;
        relay(&run);
        if !run.success {
            return Err(BuildError::RunFailed {
                binary: artifact,
                stderr: failure_text(&run),
            });
        }
    }

    println!("Done.");
    Ok(())
}
