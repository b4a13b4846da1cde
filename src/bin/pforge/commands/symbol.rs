use std::io::{self, Write};

use anyhow::{Context, Result};

use particle_forge::synthesize;

use crate::cli::SymbolArgs;

pub fn run_symbol(args: SymbolArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for name in &args.names {
        let symbol =
            synthesize(name).with_context(|| format!("Failed to synthesize '{name}'"))?;
        writeln!(stdout, "{name}\t{symbol}")?;
    }

    stdout.flush()?;
    Ok(())
}
