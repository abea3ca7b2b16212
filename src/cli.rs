//! Command-line interface shared by the wordlist tools
//!
//! Every tool takes a single positional argument, the wordlist to read. The
//! command name and help text come from the [`Tool`] being run.

use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use crate::processor::{Processor, ProcessorConfig, Tool};
use crate::report::print_error;

/// Arguments of a wordlist tool
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    after_help = "Output goes to stdout, the summary and errors go to stderr."
)]
pub struct Args {
    /// Wordlist file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

impl Args {
    /// Command definition for `tool`
    pub fn command_for(tool: Tool) -> clap::Command {
        Self::command()
            .name(tool.bin_name())
            .about(tool.about())
            .long_about(tool.long_about())
    }

    /// Parse the process arguments for `tool`
    pub fn try_parse_for(tool: Tool) -> Result<Self, clap::Error> {
        let matches = Self::command_for(tool).try_get_matches()?;
        Self::from_arg_matches(&matches)
    }

    /// Parse an explicit argument list for `tool`
    pub fn try_parse_from_for<I, T>(tool: Tool, itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_for(tool).try_get_matches_from(itr)?;
        Self::from_arg_matches(&matches)
    }
}

/// Entry point of a tool binary
///
/// Exits with status 1 on any fatal error, including argument errors.
pub fn main(tool: Tool) {
    let args = match Args::try_parse_for(tool) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    env_logger::init();

    if let Err(e) = run(tool, &args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(tool: Tool, args: &Args) -> anyhow::Result<()> {
    let processor = Processor::new(ProcessorConfig::new(tool))?;
    processor.process(&args.input)?;
    Ok(())
}
