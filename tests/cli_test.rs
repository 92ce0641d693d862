//! End-to-end tests for the `symbuild` binary.
//!
//! Each test lays out a small project in a temp dir and puts a fake compiler
//! script first (and only) on `PATH`, so no real toolchain is needed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp project");
        let root = dir.path();
        for sub in ["test", "examples", "benchmark", "googlebenchmark", "tools"] {
            fs::create_dir_all(root.join(sub)).expect("Failed to create project dirs");
        }
        fs::write(root.join("test").join("foo.cc"), "int main() { return 0; }\n").unwrap();
        fs::write(root.join("examples").join("example1.cc"), "int main() {}\n").unwrap();
        fs::write(root.join("benchmark").join("add_fixed.cc"), "int main() {}\n").unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn tools(&self) -> PathBuf {
        self.root().join("tools")
    }

    /// Install a fake compiler. Only shell builtins are usable: PATH holds nothing else.
    fn compiler(&self, name: &str, body: &str) {
        let path = self.tools().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_symbuild"))
            .args(args)
            .current_dir(self.root())
            .env("PATH", self.tools())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute symbuild")
    }

    /// Fake tools first, then the usual system directories.
    fn run_with_system_path(&self, args: &[&str]) -> Output {
        let path = format!("{}:/usr/bin:/bin", self.tools().display());
        Command::new(env!("CARGO_BIN_EXE_symbuild"))
            .args(args)
            .current_dir(self.root())
            .env("PATH", path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute symbuild")
    }

    fn ledger(&self) -> String {
        fs::read_to_string(self.root().join("config").join("built.txt")).unwrap_or_default()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// Logs its arguments and creates the -o file, like a quiet successful compile.
const RECORDING_COMPILER: &str = r#"echo "$@" > args.log
while [ $# -gt 0 ]; do
  if [ "$1" = -o ]; then : > "$2"; fi
  shift
done"#;

#[test]
fn test_build_test_file_with_defaults() {
    let project = Project::new();
    project.compiler("g++", RECORDING_COMPILER);

    let output = project.run(&["-t", "test", "-f", "foo.cc"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let args = fs::read_to_string(project.root().join("args.log")).unwrap();
    assert_eq!(
        args.trim_end(),
        "-std=c++11 -Wall -Werror -Wpedantic -o bin/foo test/foo.cc"
    );
    assert!(project.root().join("bin").join("foo").exists());
    assert_eq!(project.ledger(), "bin/foo\n");
    assert!(
        stdout(&output).contains("g++ -std=c++11 -Wall -Werror -Wpedantic -o bin/foo test/foo.cc")
    );
}

#[test]
fn test_googlebenchmark_with_clang_and_explicit_output() {
    let project = Project::new();
    fs::write(project.root().join("googlebenchmark").join("access.cc"), "").unwrap();
    project.compiler("clang++", RECORDING_COMPILER);

    let output = project.run(&[
        "-t",
        "googlebenchmark",
        "-f",
        "access.cc",
        "-s",
        "clang",
        "-o",
        "bin/gb_access",
    ]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let args = fs::read_to_string(project.root().join("args.log")).unwrap();
    assert_eq!(
        args.trim_end(),
        "-std=c++11 -O3 -lbenchmark -o bin/gb_access googlebenchmark/access.cc"
    );
    assert_eq!(project.ledger(), "bin/gb_access\n");
}

#[test]
fn test_missing_type() {
    let project = Project::new();
    let output = project.run(&["-f", "foo.cc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing option --type"));
}

#[test]
fn test_missing_file() {
    let project = Project::new();
    let output = project.run(&["-t", "example"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing option --file"));
}

#[test]
fn test_file_without_a_name() {
    let project = Project::new();
    project.compiler("g++", RECORDING_COMPILER);
    let output = project.run(&["-t", "test", "-f", ".."]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing option --file"));
    assert!(!project.root().join("args.log").exists());
    assert!(!project.root().join("bin").exists());
}

#[test]
fn test_compiler_not_found() {
    let project = Project::new();
    project.compiler("g++", RECORDING_COMPILER);

    let output = project.run(&["-t", "benchmark", "-f", "add_fixed.cc", "-s", "icc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Checking for icpc... Not found."));
    assert!(stderr(&output).contains("icpc"));
    assert!(!project.root().join("args.log").exists());
    assert!(!project.root().join("bin").exists());
    assert!(project.ledger().is_empty());
}

#[test]
fn test_stderr_output_fails_build() {
    let project = Project::new();
    project.compiler("g++", "echo 'test/foo.cc:1: warning: something' >&2\nexit 0");

    let output = project.run(&["-t", "test", "-f", "foo.cc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("warning: something"));
    assert!(project.ledger().is_empty());
}

// Writes a shell program running `program_body` at the -o path. Needs chmod, so the
// test PATH must include the system directories.
fn emitting_compiler(program_body: &str) -> String {
    format!(
        r#"while [ $# -gt 0 ]; do
  if [ "$1" = -o ]; then printf '#!/bin/sh\n{}\n' > "$2"; chmod +x "$2"; fi
  shift
done"#,
        program_body
    )
}

#[test]
fn test_run_after_build() {
    let project = Project::new();
    project.compiler("g++", &emitting_compiler("echo ran"));

    let output = project.run_with_system_path(&["-t", "example", "-f", "example1.cc", "-r"]);
    assert!(output.status.success(), "run failed: {}", stderr(&output));
    assert!(stdout(&output).lines().any(|line| line == "ran"));
    assert_eq!(project.ledger(), "bin/example1\n");
}

#[test]
fn test_run_after_build_failure() {
    let project = Project::new();
    project.compiler("g++", &emitting_compiler("echo bad >&2"));

    let output = project.run_with_system_path(&["-t", "example", "-f", "example1.cc", "-r"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).lines().any(|line| line == "bad"));
    assert!(stderr(&output).contains("Running bin/example1 failed"));
    // The build itself succeeded, so it stays recorded.
    assert_eq!(project.ledger(), "bin/example1\n");
}

#[test]
fn test_dry_run() {
    let project = Project::new();
    let output = project.run(&["-t", "benchmark", "-f", "add_fixed.cc", "-s", "icc", "--dry-run"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "icpc -std=c++11 -fast -o bin/add_fixed benchmark/add_fixed.cc"
    );
}

#[test]
fn test_list() {
    let project = Project::new();
    let output = project.run(&["-l"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("foo.cc"));
    assert!(out.contains("example1.cc"));
    assert!(out.contains("add_fixed.cc"));
    assert!(!project.root().join("bin").exists());
}

#[test]
fn test_clean_twice() {
    let project = Project::new();
    project.compiler("g++", RECORDING_COMPILER);
    assert!(project.run(&["-t", "test", "-f", "foo.cc"]).status.success());
    assert!(project.run(&["-t", "example", "-f", "example1.cc"]).status.success());
    fs::write(project.root().join("SymmetricMatrix.html"), "").unwrap();

    let first = project.run(&["-c"]);
    assert!(first.status.success());
    let out = stdout(&first);
    assert!(out.contains("Removed bin/foo"));
    assert!(out.contains("Removed bin/example1"));
    assert!(out.contains("Removed SymmetricMatrix.html"));
    assert!(!project.root().join("bin").join("foo").exists());

    let second = project.run(&["-c"]);
    assert!(second.status.success());
    let out = stdout(&second);
    assert!(out.contains("Nothing to clean"));
    assert!(!out.contains("Removed"));
}
