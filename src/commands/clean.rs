use crate::build::{self, Ledger};
use crate::config::Config;
use crate::error::Result;
use colored::*;

pub fn handle_clean(config: &Config) -> Result<()> {
    println!("Cleaning...");
    let ledger = Ledger::new(&config.paths.ledger);
    let report = build::clean(&ledger, &config.docs)?;

    for path in &report.removed {
        println!(" {} Removed {}", "🗑️".red(), path.display());
    }
    for path in &report.missing {
        println!(" {} Already gone: {}", "!".yellow(), path.display());
    }
    for e in &report.failed {
        println!(" {} {}", "x".red(), e);
    }

    if report.is_empty() {
        println!("{} Nothing to clean", "!".yellow());
    } else {
        println!("{} Clean complete.", "✓".green());
    }
    Ok(())
}
