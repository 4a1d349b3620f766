use colored::Colorize;
use commands::command_argument_builder;
use std::path::PathBuf;
use std::sync::Arc;
use tianzi_core::batch::{execute_batch, BatchOptions, BatchProgressCallback};
use tianzi_core::config::{default_dynasties, filter_dynasties};
use tianzi_core::{generate_batch_report, print_banner};
use tianzi_scraper::normalize;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");

    tracing_subscriber::fmt::init();

    if !quiet {
        print_banner();
    }

    let output_root = matches.get_one::<PathBuf>("output").unwrap().clone();
    let wanted: Vec<String> = matches
        .get_many::<String>("dynasty")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let as_json = matches.get_flag("json");

    let dynasties = filter_dynasties(default_dynasties(), &wanted);
    if dynasties.is_empty() {
        eprintln!("No configured dynasty matches {:?}", wanted);
        std::process::exit(1);
    }

    if !quiet {
        println!(
            "Saving portraits under {}\n",
            output_root.display().to_string().bright_white()
        );
    }

    let progress_callback = if quiet {
        None
    } else {
        let callback: BatchProgressCallback = Arc::new(|line: String| {
            println!("{}", line.bright_cyan());
        });
        Some(callback)
    };

    let options = BatchOptions {
        dynasties,
        output_root,
        show_progress_bars: !quiet,
    };

    let summaries = execute_batch(options, normalize::simplified_chinese(), progress_callback).await;

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).expect("summaries serialize")
        );
    } else {
        print!("{}", generate_batch_report(&summaries));
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
