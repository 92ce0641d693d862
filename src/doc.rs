use crate::build::{run_captured, which};
use crate::config::DocsConfig;
use crate::error::{BuildError, Result};
use colored::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn run_doxygen(generator: &Path, doxyfile: &Path, timeout: Duration) -> Result<()> {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner())
            .tick_chars("◜◠◝◞◡◟"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Running Doxygen...");

    let output = run_captured(
        generator,
        &[doxyfile.to_string_lossy().into_owned()],
        timeout,
    );
    pb.finish_and_clear();
    let output = output?;
    if output.timed_out {
        return Err(BuildError::ToolTimedOut(generator.display().to_string()));
    }

    // Doxygen reports undocumented members on stderr; that is not fatal.
    if !output.stderr.is_empty() {
        println!("{} Doxygen warnings:", "!".yellow());
        println!("{}", output.stderr.trim_end());
    }
    Ok(())
}

/// Replace whatever is at `link` with a symlink to `target`.
pub fn relink(target: &Path, link: &Path) -> Result<()> {
    match fs::symlink_metadata(link) {
        Ok(_) => fs::remove_file(link)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link)?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target, link)?;

    Ok(())
}

/// Run the documentation generator and link its entry page at `docs.link`.
pub fn generate_docs(
    docs: &DocsConfig,
    search_path: &[PathBuf],
    timeout: Duration,
) -> Result<()> {
    println!("{} Creating doxygen documentation...", "📚".magenta());

    let generator = which(&docs.generator, search_path)
        .ok_or_else(|| BuildError::ToolNotFound(docs.generator.clone()))?;
    tracing::debug!(generator = %generator.display(), "running documentation generator");
    run_doxygen(&generator, &docs.doxyfile, timeout)?;

    println!("{} Creating symbolic link to documentation...", "🔗".cyan());
    relink(&docs.entry_page, &docs.link)?;
    println!(
        "{} Documentation linked at {}",
        "✓".green(),
        docs.link.display()
    );
    Ok(())
}
