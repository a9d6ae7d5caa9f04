//! the args for running hazel-tokengen

use clap::{value_parser, ArgAction};
use hazel_tokengen::{Artifact, DEFAULT_GRAMMAR, DEFAULT_HEADER_INCLUDE};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Which artifacts to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    All,
    Single(Artifact),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Target::All);
        }
        Artifact::from_str(s).map(Target::Single).map_err(|_| {
            format!("unknown artifact {s:?}, expected one of header, dispatch, module or all")
        })
    }
}

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Generates the token tables from the token grammar")]
pub struct Args {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose")]
    quiet: u8,

    /// The artifact to generate: header, dispatch, module or all
    #[clap(value_name = "artifact")]
    pub target: Target,
    /// The token grammar to generate from
    #[clap(default_value = DEFAULT_GRAMMAR, value_hint=clap::ValueHint::FilePath)]
    pub grammar: PathBuf,
    /// Where to write the artifact. Defaults to the artifact's conventional location.
    #[clap(value_hint=clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// The path the dispatch source uses to include the constants header
    #[clap(long = "include", default_value = DEFAULT_HEADER_INCLUDE)]
    pub header_include: String,
}

impl Args {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used.
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            -2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            2 => LevelFilter::Trace,
            _ => unreachable!(),
        }
    }
}
