//! CLI command handlers
//!
//! Each handler prints the status trail for one mode of the tool and turns
//! failures into a `BuildError` for `main` to report.

mod build;
mod clean;
mod list;

pub use build::handle_build;
pub use clean::handle_clean;
pub use list::{handle_list, listing_table};
