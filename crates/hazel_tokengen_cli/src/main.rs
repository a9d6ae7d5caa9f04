#![doc = include_str!("../README.md")]

use crate::args::{Args, Target};
use chrono::Utc;
use clap::Parser;
use fern::Dispatch;
use hazel_tokengen::{Generated, TokenGen};
use log::{debug, trace, Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{stderr, stdout};
use std::path::Path;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting hazel-tokengen with args: {args:?}");
    debug!("hazel-tokengen version: {}", env!("CARGO_PKG_VERSION"));

    let token_gen = TokenGen::builder()
        .grammar(&args.grammar)
        .header_include(&args.header_include)
        .build()?;

    let generated = match args.target {
        Target::Single(artifact) => vec![token_gen.generate(artifact, args.output.as_deref())?],
        Target::All => {
            let root = args.output.as_deref().unwrap_or(Path::new("."));
            token_gen.generate_all(root)?
        }
    };

    for Generated { path, changed, .. } in &generated {
        if *changed {
            println!(
                "{} regenerated from {}",
                path.display(),
                token_gen.grammar_path().display()
            );
        } else {
            debug!("{} is up to date", path.display());
        }
    }

    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}]: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level().if_supports_color(Stdout, |text| match text {
                    Level::Error => text.bright_red().to_string(),
                    Level::Warn => text.bright_yellow().to_string(),
                    Level::Info => text.green().to_string(),
                    Level::Debug => text.blue().to_string(),
                    Level::Trace => text.purple().to_string(),
                }),
                message
            ))
        })
        .level(level_filter)
        .chain(
            Dispatch::new()
                .filter(|l| l.level() > Level::Error)
                .chain(stdout()),
        )
        .chain(
            Dispatch::new()
                .filter(|l| l.level() == Level::Error)
                .chain(stderr()),
        )
        .apply()?;
    Ok(())
}
