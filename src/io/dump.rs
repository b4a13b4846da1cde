use super::error::Error;
use crate::model::database::ParticleDatabase;
use crate::model::entry::ParticleEntry;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct DatabaseDump<'a> {
    particles: Vec<&'a ParticleEntry>,
}

/// Writes the database as TOML, one `[[particles]]` table per entry in code
/// order. Stable lifetimes are written as `inf`.
pub fn write_database<W: Write>(mut writer: W, db: &ParticleDatabase) -> Result<(), Error> {
    let dump = DatabaseDump {
        particles: db.iter().collect(),
    };
    let text = toml::to_string(&dump)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
