mod generate;
mod lookup;
mod symbol;

use generate::run_generate;
use lookup::run_lookup;
use symbol::run_symbol;

use anyhow::{Context, Result};

use particle_forge::io::{read_nuclei, read_overrides, read_particles};
use particle_forge::{RecordSet, SymbolOverrides};

use crate::cli::{Command, InputOptions};
use crate::display::Context as DisplayContext;
use crate::io::open_input;
use crate::util::path::display_name;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Generate(args) => run_generate(args, ctx),
        Command::Lookup(args) => run_lookup(args, ctx),
        Command::Symbol(args) => run_symbol(args),
    }
}

/// Reads all three record sources, returning the records and one progress
/// line per source.
fn read_records(opts: &InputOptions) -> Result<(RecordSet, Vec<String>)> {
    let particles = read_particles(open_input(&opts.particles)?).with_context(|| {
        format!("Failed to read particle data: {}", opts.particles.display())
    })?;
    let nuclei = read_nuclei(open_input(&opts.nuclei)?)
        .with_context(|| format!("Failed to read nuclear data: {}", opts.nuclei.display()))?;
    let overrides = match &opts.symbols {
        Some(path) => read_overrides(open_input(path)?)
            .with_context(|| format!("Failed to read symbol overrides: {}", path.display()))?,
        None => SymbolOverrides::new(),
    };

    let mut substeps = vec![
        format!(
            "Parse particle XML: {} records ({})",
            particles.len(),
            display_name(Some(opts.particles.as_path()))
        ),
        format!(
            "Parse nucleus XML: {} records ({})",
            nuclei.len(),
            display_name(Some(opts.nuclei.as_path()))
        ),
    ];
    if let Some(path) = &opts.symbols {
        substeps.push(format!(
            "Parse class-name XML: {} overrides ({})",
            overrides.len(),
            display_name(Some(path.as_path()))
        ));
    }

    let records = RecordSet {
        particles,
        nuclei,
        overrides,
    };
    Ok((records, substeps))
}
