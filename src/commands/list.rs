use crate::build::{BuildCategory, locate};
use crate::config::Config;
use crate::error::BuildError;
use crate::ui::Table;
use colored::*;

/// One row per source file, grouped by category; the category name only
/// appears on the first row of its group. Missing roots are returned
/// separately.
pub fn listing_table(config: &Config) -> (Table, Vec<BuildError>) {
    let mut table = Table::new(&["Build type", "Filename (*.cc, *.cpp)"]);
    let mut missing = Vec::new();

    for category in BuildCategory::ALL {
        let files = match locate(category.source_root(config)) {
            Ok(files) => files,
            Err(e) => {
                missing.push(e);
                continue;
            }
        };
        for (i, file) in files.iter().enumerate() {
            let label = if i == 0 { category.name() } else { "" };
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            table.add_row(vec![label.to_string(), name]);
        }
    }

    (table, missing)
}

pub fn handle_list(config: &Config) {
    let (table, missing) = listing_table(config);
    if table.is_empty() {
        println!("{} No source files found.", "!".yellow());
    } else {
        table.print();
    }
    for e in missing {
        println!("{} {}", "!".yellow(), e);
    }
}
