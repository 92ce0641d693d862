//! Compiler invocation: flag table, dependency check, execution and result.
//!
//! ## Flow
//!
//! 1. Resolve the category flags and link arguments
//! 2. Resolve the input under the category's source root
//! 3. Default the output to `<bin>/<input stem>`
//! 4. Look the compiler up on the search path
//! 5. Run it and capture everything it prints
//! 6. Fail on any stderr output

use super::category::{BuildCategory, CompilerChoice};
use super::process::{CapturedOutput, run_captured};
use super::which::which;
use crate::config::Config;
use crate::error::{BuildError, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest {
    pub category: BuildCategory,
    /// File name relative to the category's source root.
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub compiler: CompilerChoice,
    pub run_after_build: bool,
}

impl BuildRequest {
    pub fn new(category: BuildCategory, input: impl Into<PathBuf>) -> Self {
        Self {
            category,
            input: input.into(),
            output: None,
            compiler: CompilerChoice::default(),
            run_after_build: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_compiler(mut self, compiler: CompilerChoice) -> Self {
        self.compiler = compiler;
        self
    }
}

/// A fully resolved compiler command line.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPlan {
    pub program: String,
    pub args: Vec<String>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
    /// Path to append to the ledger; only set for a successful build.
    pub artifact: Option<PathBuf>,
}

impl BuildResult {
    fn from_output(output: CapturedOutput, artifact: Option<PathBuf>) -> Self {
        let success = output.succeeded();
        Self {
            success,
            artifact: artifact.filter(|_| success),
            stdout: output.stdout,
            stderr: output.stderr,
            timed_out: output.timed_out,
        }
    }
}

/// `<bin_dir>/<input file stem>`
pub fn default_output(input: &Path, bin_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    bin_dir.join(stem)
}

/// Resolve the command line for `request` without touching the filesystem.
///
/// An input with no file name (`""`, `..`) cannot name an output and is
/// rejected as a missing `--file`.
pub fn plan(request: &BuildRequest, config: &Config) -> Result<BuildPlan> {
    if request.input.file_stem().is_none() {
        return Err(BuildError::MissingArgument("--file, -f"));
    }

    let input = request.category.source_root(config).join(&request.input);
    let output = match &request.output {
        Some(out) if !out.as_os_str().is_empty() => out.clone(),
        _ => default_output(&request.input, &config.paths.bin),
    };

    let mut args = request.category.flags(request.compiler, &config.build.std);
    args.extend(request.category.link_args(&config.build.benchmark_lib));
    args.push("-o".to_string());
    args.push(output.to_string_lossy().into_owned());
    args.push(input.to_string_lossy().into_owned());

    Ok(BuildPlan {
        program: request.compiler.executable().to_string(),
        args,
        input,
        output,
    })
}

/// Dependency check: resolve `program` or fail before anything is spawned.
pub fn check_dependency(program: &str, search_path: &[PathBuf]) -> Result<PathBuf> {
    print!(" {} Checking for {}...", ">".cyan(), program);
    match which(program, search_path) {
        Some(path) => {
            println!(" Found -> {}", path.display());
            Ok(path)
        }
        None => {
            println!(" {}", "Not found.".red());
            Err(BuildError::CompilerNotFound(program.to_string()))
        }
    }
}

fn run_with_spinner(
    program: &Path,
    args: &[String],
    timeout: Duration,
    message: String,
) -> Result<CapturedOutput> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);

    let output = run_captured(program, args, timeout);
    pb.finish_and_clear();
    Ok(output?)
}

/// Build one file. `search_path` is the list of directories the compiler is
/// looked up in.
///
/// Returns `Err` when the build cannot start (missing source root or
/// compiler). A build that ran but wrote to stderr comes back as `Ok` with
/// `success == false`.
pub fn build(
    request: &BuildRequest,
    config: &Config,
    search_path: &[PathBuf],
) -> Result<BuildResult> {
    let plan = plan(request, config)?;
    let root = request.category.source_root(config);
    if !root.is_dir() {
        return Err(BuildError::DirectoryNotFound(root.to_path_buf()));
    }

    println!("{} Checking dependencies...", "🔧".cyan());
    let compiler = check_dependency(&plan.program, search_path)?;

    if let Some(parent) = plan.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    println!("{} Running {} ...", "🔨".cyan(), plan);
    tracing::debug!(compiler = %compiler.display(), "invoking compiler");
    let output = run_with_spinner(
        &compiler,
        &plan.args,
        config.build.timeout(),
        format!("Compiling {}", plan.input.display()),
    )?;

    Ok(BuildResult::from_output(output, Some(plan.output)))
}

/// Run an already built binary with no arguments. Fails like a build does:
/// any stderr output means failure.
pub fn run(binary: &Path, timeout: Duration) -> Result<BuildResult> {
    // A bare name would be searched on PATH; anchor it to the working directory.
    let binary = if binary.is_relative() && binary.components().count() == 1 {
        Path::new(".").join(binary)
    } else {
        binary.to_path_buf()
    };
    println!("{} Running {}...", "▶".green(), binary.display());
    let output = run_captured(&binary, &[], timeout)?;
    Ok(BuildResult::from_output(output, None))
}
