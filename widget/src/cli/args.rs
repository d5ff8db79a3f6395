//! CLI argument definitions
//!
//! Contains the main CLI struct and Commands enum for clap parsing.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::timeline::WidgetKind;

#[derive(Parser)]
#[command(name = "memwidget")]
#[command(about = "Memory statistics widget for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: nearest .memwidget.toml, then the global config dir)
    #[arg(long, env = "MEMWIDGET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text (overrides [output] format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Take a single memory sample and print it
    Sample {
        /// Sample a fixed demo machine instead of the host kernel
        #[arg(long)]
        demo_data: bool,
    },
    /// Print total installed physical memory
    Total,
    /// Run a widget timeline until interrupted
    Watch {
        /// Widget to run
        #[arg(long, value_enum, default_value_t = WidgetKind::Memory)]
        widget: WidgetKind,
        /// Refresh interval in seconds (default: from .memwidget.toml, 5 for memory, 60 for demo)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(long, short = 'n', value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        count: Option<usize>,
        /// Sample a fixed demo machine instead of the host kernel
        #[arg(long)]
        demo_data: bool,
    },
}
