mod builder;
mod config;
mod error;
mod index;
mod lifetime;
mod policy;
mod synth;

pub use builder::{DatabaseBuilder, build};
pub use config::{DEFAULT_P_MAX, ForgeConfig};
pub use error::{Error, Partition};
pub use index::{ConversionIndex, MAX_P_MAX, generate};
pub use lifetime::derive as derive_lifetime;
pub use policy::{
    LifetimeLists, LifetimePolicy, PhysicalConstants, get_default_policy, load_policy,
};
pub use synth::synthesize;

use crate::model::database::ParticleDatabase;
use crate::model::record::RecordSet;
use tracing::info;

/// Frozen output of a generation run.
#[derive(Debug, Clone)]
pub struct ForgedTables {
    pub database: ParticleDatabase,
    pub index: ConversionIndex,
}

pub fn forge(records: &RecordSet, config: &ForgeConfig) -> Result<ForgedTables, Error> {
    let policy = load_policy(config.policy.as_deref())?;

    let database = build(records, &policy)?;

    check_code_range(&database)?;

    let index = generate(&database, config.p_max)?;

    info!(
        particles = database.particle_count(),
        nuclei = database.nucleus_count(),
        "forged particle tables"
    );

    Ok(ForgedTables { database, index })
}

/// Ensures the one-past-last code `N + 1` fits the generated `i16` enum.
pub fn check_code_range(db: &ParticleDatabase) -> Result<(), Error> {
    let max = i16::MAX as usize - 1;
    if db.len() > max {
        return Err(Error::CodeOverflow {
            count: db.len(),
            max,
        });
    }
    Ok(())
}
