use super::float_literal;
use crate::io::error::Error;
use crate::model::database::ParticleDatabase;
use crate::model::entry::ParticleEntry;
use crate::model::symbol::Symbol;
use std::fmt::Write;

const PARTICLE_TRAIT: &str = "\
/// Compile-time properties of one particle species.
pub trait Particle {
    const CODE: Code;
    const PDG: PdgCode;
    /// Mass in GeV.
    const MASS: f64;
    /// Electric charge in units of e/3.
    const ELECTRIC_CHARGE: i16;
    const NAME: &'static str;
    const ANTI_PARTICLE: Code;
    const IS_NUCLEUS: bool;
    const NUCLEUS_A: u16 = 0;
    const NUCLEUS_Z: u16 = 0;
}
";

/// Emits the `Particle` trait and one unit struct implementing it per entry.
///
/// The anti-particle is the first entry, in code order, whose display name
/// equals the entry's anti-particle name; without a match it is `Code::Unknown`.
pub fn emit_declarations(db: &ParticleDatabase) -> Result<String, Error> {
    let mut out = String::from(PARTICLE_TRAIT);

    for entry in db.iter() {
        let anti = db
            .anti_particle(entry)
            .map_or(Symbol::UNKNOWN, |anti| anti.symbol.as_str());
        writeln!(out)?;
        write_declaration(&mut out, entry, anti)?;
    }

    Ok(out)
}

fn write_declaration(out: &mut String, entry: &ParticleEntry, anti: &str) -> std::fmt::Result {
    let symbol = &entry.symbol;

    writeln!(out, "/// `{}`", entry.name)?;
    writeln!(out, "///")?;
    writeln!(out, "/// - PDG code: {}", entry.pdg)?;
    writeln!(out, "/// - mass: {} GeV", entry.mass)?;
    writeln!(out, "/// - charge: {} e", f64::from(entry.charge) / 3.0)?;
    writeln!(out, "/// - anti-particle: `{anti}`")?;
    if let Some(nucleus) = entry.nucleus {
        writeln!(out, "/// - nucleus: A = {}, Z = {}", nucleus.a, nucleus.z)?;
    }
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]")?;
    if !is_upper_camel_case(symbol.as_str()) {
        writeln!(out, "#[allow(non_camel_case_types)]")?;
    }
    writeln!(out, "pub struct {symbol};")?;
    writeln!(out)?;

    writeln!(out, "impl Particle for {symbol} {{")?;
    writeln!(out, "    const CODE: Code = Code::{symbol};")?;
    writeln!(out, "    const PDG: PdgCode = PdgCode::{symbol};")?;
    writeln!(out, "    const MASS: f64 = {};", float_literal(entry.mass))?;
    writeln!(out, "    const ELECTRIC_CHARGE: i16 = {};", entry.charge)?;
    writeln!(out, "    const NAME: &'static str = {:?};", entry.name)?;
    writeln!(out, "    const ANTI_PARTICLE: Code = Code::{anti};")?;
    writeln!(out, "    const IS_NUCLEUS: bool = {};", entry.is_nucleus)?;
    if entry.is_nucleus {
        writeln!(out, "    const NUCLEUS_A: u16 = {};", entry.nucleus_a())?;
        writeln!(out, "    const NUCLEUS_Z: u16 = {};", entry.nucleus_z())?;
    }
    writeln!(out, "}}")
}

/// Mirrors the compiler's camel-case lint: no leading lowercase letter and no
/// underscore next to a cased character.
fn is_upper_camel_case(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let has_case = |c: char| c.is_uppercase() || c.is_lowercase();
    let starts_lower = chars.first().is_some_and(|c| c.is_lowercase());
    let bad_underscore = chars.windows(2).any(|pair| {
        (pair[1] == '_' && has_case(pair[0])) || (pair[0] == '_' && has_case(pair[1]))
    });
    !starts_lower && !name.contains("__") && !bad_underscore
}
