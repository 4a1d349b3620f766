use crate::CLAP_STYLING;
use clap::{arg, ArgAction};
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("tianzi")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("tianzi")
        .styles(CLAP_STYLING)
        .about("Download portraits of historical Chinese rulers from wiki list pages")
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Directory to store downloaded portraits")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("./chinese_emperors_hd"),
        )
        .arg(
            arg!(-d --"dynasty" <LABEL>)
                .required(false)
                .help("Limit the run to the named dynasties (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--"json" "Print the run summary as JSON instead of the text report")
                .required(false)
                .action(ArgAction::SetTrue),
        )
}
