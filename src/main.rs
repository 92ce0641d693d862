//! # symbuild CLI Entry Point
//!
//! Parses the flags with clap and routes to one mode, in this order:
//! `--list`, `--clean`, `--doxy`, then a build of `--type`/`--file`.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use symbuild::build::{BuildCategory, BuildRequest, CompilerChoice, search_path_from};
use symbuild::commands;
use symbuild::config::{CONFIG_FILE, Config};
use symbuild::doc;
use symbuild::error::BuildError;

/// Build benchmarks, tests and examples for the SymmetricMatrix project
#[derive(Parser, Debug)]
#[command(name = "symbuild")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// The type of executable you want to build
    #[arg(short = 't', long = "type", value_enum)]
    category: Option<BuildCategory>,

    /// The file you want to build, relative to its type's directory
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// The name of the executable you want to build [default: bin/<file stem>]
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Choose the C++ compiler
    #[arg(short = 's', long = "setcc", value_enum, default_value_t = CompilerChoice::GNU)]
    compiler: CompilerChoice,

    /// Run the executable after a successful build
    #[arg(short, long)]
    run: bool,

    /// Print the compiler command without running it
    #[arg(long)]
    dry_run: bool,

    /// List all files and their build types and exit
    #[arg(short, long)]
    list: bool,

    /// Clean all built binaries and documentation and exit
    #[arg(short, long)]
    clean: bool,

    /// Build the Doxygen documentation, link it at the top level and exit
    #[arg(short, long)]
    doxy: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let search_path = search_path_from(std::env::var_os("PATH").as_deref());
    tracing::debug!("search path has {} entries", search_path.len());

    if cli.list {
        commands::handle_list(&config);
        return Ok(());
    }

    if cli.clean {
        commands::handle_clean(&config)?;
        return Ok(());
    }

    if cli.doxy {
        doc::generate_docs(&config.docs, &search_path, config.build.timeout())?;
        return Ok(());
    }

    let category = cli.category.ok_or(BuildError::MissingArgument("--type, -t"))?;
    let file = cli.file.ok_or(BuildError::MissingArgument("--file, -f"))?;

    let request = BuildRequest {
        category,
        input: file,
        output: cli.out,
        compiler: cli.compiler,
        run_after_build: cli.run,
    };
    commands::handle_build(&request, &config, &search_path, cli.dry_run)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}
