use std::io;

use anyhow::{Context, Result};

use particle_forge::forge;

use crate::cli::LookupArgs;
use crate::config::build_forge_config;
use crate::display::{Context as DisplayContext, Progress, print_lookup_results};

use super::read_records;

const TOTAL_STEPS: u8 = 2;

/// Prints symbol, code and name per PDG code. Codes missing from the index
/// are reported but do not fail the run.
pub fn run_lookup(args: LookupArgs, ctx: DisplayContext) -> Result<()> {
    let forge_config = build_forge_config(&args.tables)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading particle data");
    let (records, read_substeps) = read_records(&args.input)?;
    progress.complete_step("Reading particle data", &read_substeps);

    progress.step("Forging tables");
    let tables = forge(&records, &forge_config).context("Table generation failed")?;
    progress.complete_step(
        "Forging tables",
        &[format!("{} entries indexed", tables.database.len())],
    );

    progress.finish("Lookup complete");

    let mut stdout = io::stdout().lock();
    print_lookup_results(&mut stdout, &tables, &args.pdg)
        .context("Failed to write lookup results")?;

    Ok(())
}
