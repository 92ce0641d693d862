use colored::*;

pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    /// Turn known compiler diagnostics into a hint for the user.
    pub fn analyze(output: &str) -> Option<String> {
        // Benchmark harness linked without the library installed
        if output.contains("cannot find -lbenchmark")
            || output.contains("library not found for -lbenchmark")
            || output.contains("benchmark/benchmark.h")
        {
            return Some(format!(
                "The {} library is missing.\nInstall Google Benchmark or point {} at the library you want to link.",
                "benchmark".bold().yellow(),
                "build.benchmark_lib".bold().green()
            ));
        }

        if output.contains("undefined reference to `main'")
            || output.contains("undefined reference to 'main'")
        {
            return Some(format!(
                "The file has no {} function.\nOnly complete programs can be built.",
                "main()".bold().yellow()
            ));
        }

        if output.contains("fatal error: ") && output.contains("No such file or directory") {
            return Some(format!(
                "It looks like a {} error.\nCheck that the header exists under {}.",
                "Missing Header".bold().red(),
                "include/".bold().yellow()
            ));
        }

        if output.contains("unrecognized command line option")
            || output.contains("unknown argument")
        {
            return Some(format!(
                "The compiler rejected a flag.\nTry another compiler with {}.",
                "--setcc".bold().green()
            ));
        }

        None
    }
}
