use std::fs;

use anyhow::{Context, Result};

use particle_forge::ForgeConfig;

use crate::cli::TableOptions;

pub fn build_forge_config(opts: &TableOptions) -> Result<ForgeConfig> {
    let policy = opts
        .policy
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read lifetime policy: {}", path.display()))
        })
        .transpose()?;

    Ok(ForgeConfig {
        policy,
        p_max: opts.p_max,
    })
}
