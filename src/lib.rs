//! # symbuild - build helper for the SymmetricMatrix C++ project
//!
//! Compiles single-file tests, examples and benchmarks with a fixed flag set
//! per category, optionally runs the result, lists the available sources,
//! cleans what it built and generates the Doxygen documentation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Build test/exception.cc into bin/exception with g++ and run it
//! symbuild -t test -f exception.cc -r
//!
//! # Benchmark with the Intel compiler
//! symbuild -t benchmark -f add_fixed.cc -s icc
//!
//! # What can be built?
//! symbuild -l
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Flag table, compiler lookup and invocation, ledger, cleanup
//! - [`commands`] - Status-trail handlers for each CLI mode
//! - [`config`] - Optional `symbuild.toml`
//! - [`doc`] - Doxygen generation and entry-page link

/// Compiler invocation, source discovery and artifact bookkeeping.
pub mod build;

/// CLI command handlers.
pub mod commands;

/// Configuration file parsing (`symbuild.toml`).
pub mod config;

/// Documentation generation (Doxygen).
pub mod doc;

/// Error kinds.
pub mod error;

/// Terminal UI utilities (tables).
pub mod ui;

pub use error::{BuildError, Result};
