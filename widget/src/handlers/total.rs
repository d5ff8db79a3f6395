//! Total command handler

use anyhow::Result;

use super::CommandContext;
use crate::output::{format_megabytes, OutputFormat};

/// Handle the `total` command
pub fn run_total(ctx: &CommandContext) -> Result<()> {
    let total = vmstat_sampler::total_physical_memory();

    match ctx.output_format() {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "total_physical_bytes": total })
        ),
        OutputFormat::Text => println!("Total: {} ({} bytes)", format_megabytes(total), total),
    }
    Ok(())
}
