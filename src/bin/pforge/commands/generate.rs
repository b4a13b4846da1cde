use anyhow::{Context, Result, bail};

use particle_forge::io::{render, write_database};
use particle_forge::{ForgedTables, forge};

use crate::cli::GenerateArgs;
use crate::config::build_forge_config;
use crate::display::{Context as DisplayContext, Progress, print_database_summary, print_input_summary};
use crate::io::{stdout_is_tty, write_outputs};
use crate::util::path::display_name;

use super::read_records;

const TOTAL_STEPS: u8 = 3;

pub fn run_generate(args: GenerateArgs, ctx: DisplayContext) -> Result<()> {
    if args.output.is_none() && stdout_is_tty() {
        bail!(
            "No output file specified and stdout is a terminal.\n\nUsage: pforge generate -p <FILE> -n <FILE> -o <OUTPUT> or pipe output."
        );
    }

    let forge_config = build_forge_config(&args.tables)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading particle data");
    let (records, read_substeps) = read_records(&args.input)?;
    progress.complete_step("Reading particle data", &read_substeps);

    if ctx.interactive {
        print_input_summary(&records);
    }

    progress.step("Forging tables");
    let tables = forge(&records, &forge_config).context("Table generation failed")?;
    progress.complete_step("Forging tables", &forge_substeps(&args, &tables));

    if ctx.interactive {
        print_database_summary(&tables);
    }

    progress.step("Writing output");
    let source = render(&tables).context("Failed to render particle module")?;
    let dump = match &args.database {
        Some(_) => {
            let mut buffer = Vec::new();
            write_database(&mut buffer, &tables.database)
                .context("Failed to serialize particle database")?;
            Some(buffer)
        }
        None => None,
    };

    let mut outputs = vec![(args.output.as_deref(), source.as_bytes())];
    let mut write_substeps = vec![format!(
        "Write Rust module → {}",
        display_name(args.output.as_deref())
    )];
    if let (Some(path), Some(dump)) = (&args.database, &dump) {
        outputs.push((Some(path.as_path()), dump.as_slice()));
        write_substeps.push(format!(
            "Write TOML database → {}",
            display_name(Some(path.as_path()))
        ));
    }
    write_outputs(&outputs)?;
    progress.complete_step("Writing output", &write_substeps);

    progress.finish("Generation complete");

    Ok(())
}

fn forge_substeps(args: &GenerateArgs, tables: &ForgedTables) -> Vec<String> {
    let db = &tables.database;
    let policy = if args.tables.policy.is_some() {
        "custom policy"
    } else {
        "default policy"
    };

    vec![
        format!(
            "Assign codes 1..{} ({} particles, {} nuclei)",
            db.last_code(),
            db.particle_count(),
            db.nucleus_count()
        ),
        format!("Derive lifetimes ({policy})"),
        format!(
            "Index PDG codes (dense |pdg| < {}, {} sparse)",
            tables.index.p_max(),
            tables.index.sparse().len()
        ),
    ]
}
