mod category;
mod clean;
mod feedback;
mod invoke;
mod ledger;
mod locate;
mod process;
mod which;

pub use category::{BuildCategory, CompilerChoice};
pub use clean::{CleanReport, clean, clean_artifacts, clean_docs};
pub use feedback::FeedbackAnalyzer;
pub use invoke::{
    BuildPlan, BuildRequest, BuildResult, build, check_dependency, default_output, plan, run,
};
pub use ledger::Ledger;
pub use locate::{SOURCE_SUFFIXES, is_source_file, locate};
pub use process::{CapturedOutput, run_captured};
pub use which::{search_path_from, which};
