pub mod batch;
pub mod config;
pub mod report;

pub use batch::{execute_batch, BatchOptions, BatchProgressCallback};
pub use config::{default_dynasties, filter_dynasties, DynastyEntry};
pub use report::generate_batch_report;

use colored::Colorize;

/// Print the startup banner.
pub fn print_banner() {
    println!();
    println!("{}", "  天子 TIANZI".bright_white().bold());
    println!(
        "{}",
        format!("  wiki portrait scraper v{}", env!("CARGO_PKG_VERSION")).bright_blue()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
}
