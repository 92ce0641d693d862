//! Build categories, compiler choices and the fixed flag table.

use crate::config::Config;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// What kind of program is being built. Decides the source root, the
/// compiler flags and whether the benchmark library gets linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildCategory {
    Test,
    Example,
    Benchmark,
    /// Programs using the Google benchmark harness.
    #[value(name = "googlebenchmark")]
    BenchmarkHarness,
}

impl BuildCategory {
    pub const ALL: [BuildCategory; 4] = [
        BuildCategory::Test,
        BuildCategory::Example,
        BuildCategory::Benchmark,
        BuildCategory::BenchmarkHarness,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildCategory::Test => "test",
            BuildCategory::Example => "example",
            BuildCategory::Benchmark => "benchmark",
            BuildCategory::BenchmarkHarness => "googlebenchmark",
        }
    }

    pub fn source_root(self, config: &Config) -> &Path {
        match self {
            BuildCategory::Test => &config.paths.test,
            BuildCategory::Example => &config.paths.example,
            BuildCategory::Benchmark => &config.paths.benchmark,
            BuildCategory::BenchmarkHarness => &config.paths.googlebenchmark,
        }
    }

    /// Ordered compiler flags for this category.
    pub fn flags(self, compiler: CompilerChoice, std: &str) -> Vec<String> {
        let mut flags = vec![format!("-std={}", std)];
        match self {
            BuildCategory::Test => {
                flags.extend(["-Wall", "-Werror", "-Wpedantic"].map(String::from));
            }
            BuildCategory::Example => flags.push("-O3".to_string()),
            BuildCategory::Benchmark | BuildCategory::BenchmarkHarness => {
                flags.push(compiler.optimization_flag().to_string());
            }
        }
        flags
    }

    pub fn link_args(self, benchmark_lib: &str) -> Vec<String> {
        match self {
            BuildCategory::BenchmarkHarness => vec![format!("-l{}", benchmark_lib)],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for BuildCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported compiler front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum CompilerChoice {
    /// GNU g++
    #[default]
    #[value(name = "gcc")]
    GNU,
    /// LLVM clang++
    #[value(name = "clang")]
    LLVM,
    /// Intel icpc
    #[value(name = "icc")]
    Intel,
}

impl CompilerChoice {
    pub fn executable(self) -> &'static str {
        match self {
            CompilerChoice::GNU => "g++",
            CompilerChoice::LLVM => "clang++",
            CompilerChoice::Intel => "icpc",
        }
    }

    /// Benchmark optimization flag: Intel's `-fast`, `-O3` everywhere else.
    pub fn optimization_flag(self) -> &'static str {
        match self {
            CompilerChoice::Intel => "-fast",
            _ => "-O3",
        }
    }
}
