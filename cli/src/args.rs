//! Parsing command-line arguments.

use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

/// A struct to store the parse results.
pub(crate) struct Args {
    /// The initial snapshot to load.
    pub(crate) input: PathBuf,
    /// Directory receiving the per-generation snapshots.
    pub(crate) output: PathBuf,
    /// Number of generations to run.
    pub(crate) max_iter: u32,
    /// Dump every Nth generation; 0 dumps every generation.
    pub(crate) dump_freq: u32,
}

impl Args {
    /// Parses the command-line arguments.
    ///
    /// Returns `None` when a required argument is missing or the dump
    /// frequency is negative; the usage text has been printed and the
    /// caller should exit cleanly.
    pub(crate) fn parse() -> Option<Self> {
        let mut cmd = build_command();
        let matches = cmd.clone().get_matches();

        let input = matches.get_one::<PathBuf>("INPUT").cloned();
        let output = matches.get_one::<PathBuf>("OUTPUT").cloned();
        let max_iter = *matches.get_one::<u32>("MAX_ITER").unwrap();
        let dump_freq = *matches.get_one::<i64>("DUMP_FREQ").unwrap();

        match (input, output) {
            (Some(input), Some(output)) if dump_freq >= 0 => Some(Self {
                input,
                output,
                max_iter,
                dump_freq: dump_freq as u32,
            }),
            _ => {
                let _ = cmd.print_help();
                None
            }
        }
    }
}

fn build_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("INPUT")
                .help("Initial pattern, as a 1-bit BMP snapshot")
                .long("input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Directory to write per-generation snapshots into")
                .long("output")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("MAX_ITER")
                .help("Number of generations to run")
                .long("max_iter")
                .value_name("N")
                .default_value("10")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("DUMP_FREQ")
                .help("Dump every Nth generation (0 means every generation)")
                .long("dump_freq")
                .value_name("N")
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = build_command()
            .get_matches_from(["sparselife", "--input", "in.bmp", "--output", "out"]);
        assert_eq!(*matches.get_one::<u32>("MAX_ITER").unwrap(), 10);
        assert_eq!(*matches.get_one::<i64>("DUMP_FREQ").unwrap(), 0);
    }

    #[test]
    fn negative_dump_freq_parses_as_negative() {
        let matches = build_command().get_matches_from([
            "sparselife",
            "--input",
            "in.bmp",
            "--output",
            "out",
            "--dump_freq",
            "-3",
        ]);
        assert_eq!(*matches.get_one::<i64>("DUMP_FREQ").unwrap(), -3);
    }
}
