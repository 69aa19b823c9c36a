use clap::Parser;
use linked_list::{OutputFormat, RunConfig, run};
use log::LevelFilter;
use std::{io, num::NonZeroUsize};

/// Build a two-node linked list and print its values in order.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Refuse the Nth node allocation
    #[arg(long, hide = true, value_name = "N")]
    fail_allocation: Option<NonZeroUsize>,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            format: args.format,
            verbosity: args.verbose,
            fail_allocation: args.fail_allocation.map(NonZeroUsize::get),
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let config = RunConfig::from(Args::parse());
    init_logging(config.verbosity);

    if let Err(err) = run(&config, io::stdout().lock()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
