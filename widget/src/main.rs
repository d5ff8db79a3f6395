//! memwidget
//!
//! Terminal memory-statistics widget.
//!
//! # Usage
//!
//! ```text
//! memwidget sample            # one sample
//! memwidget total             # installed RAM
//! memwidget watch             # memory widget, refresh every 5s
//! memwidget watch --widget demo --count 3
//! ```

use anyhow::Result;
use clap::Parser;

use memwidget::cli::{Cli, Commands};
use memwidget::config::WidgetFileConfig;
use memwidget::handlers::{self, CommandContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    memwidget_common::init_tracing("memwidget", cli.verbose)?;

    let file_config = WidgetFileConfig::load(cli.config.as_deref())?;
    let ctx = CommandContext::new(cli.json, file_config);

    match cli.command {
        Commands::Sample { demo_data } => handlers::run_sample(&ctx, demo_data)?,
        Commands::Total => handlers::run_total(&ctx)?,
        Commands::Watch {
            widget,
            interval,
            count,
            demo_data,
        } => handlers::run_watch(&ctx, widget, interval, count, demo_data).await?,
    }

    Ok(())
}
