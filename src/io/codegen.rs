//! Rendering of the generated particle module.
//!
//! The output is a self-contained Rust source file. Sections appear in a
//! fixed order: header, the `Code` and `PdgCode` enums, the `detail` tables,
//! the `Code` accessors, the `Particle` trait, and one declaration per entry.

mod declarations;
mod enums;
mod tables;

pub use declarations::emit_declarations;
pub use enums::{emit_accessors, emit_enums};
pub use tables::emit_tables;

use super::{Format, error::Error};
use crate::forge::ForgedTables;
use crate::model::database::ParticleDatabase;
use crate::model::symbol::Symbol;
use std::io::Write;

const HEADER: &str = "\
// @generated by pforge from particle data tables.
// Manual edits will be overwritten on the next generation run.

";

/// Names the generated module defines or refers to unqualified.
const RESERVED_NAMES: &[&str] = &[
    "Code", "PdgCode", "Particle", "detail", "FIRST_PARTICLE", "LAST_PARTICLE", "core",
    "Option", "Some", "None", "bool", "f64", "i16", "i32", "str", "u16", "usize",
];

const RUST_KEYWORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
];

pub fn write<W: Write>(mut writer: W, tables: &ForgedTables) -> Result<(), Error> {
    let source = render(tables)?;
    writer.write_all(source.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders the complete generated module into memory.
pub fn render(tables: &ForgedTables) -> Result<String, Error> {
    check_symbols(&tables.database)?;

    let mut out = String::from(HEADER);
    out.push_str(&emit_enums(&tables.database)?);
    out.push('\n');
    out.push_str(&emit_tables(tables)?);
    out.push('\n');
    out.push_str(&emit_accessors(&tables.database)?);
    out.push('\n');
    out.push_str(&emit_declarations(&tables.database)?);
    Ok(out)
}

/// Rejects symbols that are valid identifiers but not usable as Rust item names.
fn check_symbols(db: &ParticleDatabase) -> Result<(), Error> {
    if db.is_empty() {
        return Err(Error::EmptyDatabase);
    }
    for symbol in db.symbols() {
        let name = symbol.as_str();
        if RUST_KEYWORDS.contains(&name) || RESERVED_NAMES.contains(&name) {
            return Err(Error::ReservedSymbol {
                format: Format::RustSource,
                symbol: symbol.clone(),
            });
        }
    }
    Ok(())
}

/// Formats a float as a Rust `f64` expression.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "f64::NAN".to_string()
    } else if value == f64::INFINITY {
        "f64::INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "f64::NEG_INFINITY".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Whether the `Code` enum needs a reserved `Unknown = 0` variant.
fn needs_unknown_sentinel(db: &ParticleDatabase) -> bool {
    !db.contains_symbol(Symbol::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{ForgeConfig, forge};
    use crate::model::record::{LifetimeSource, NuclearNumbers, ParticleRecord, RecordSet};

    pub(super) fn sample_tables() -> ForgedTables {
        let electron = ParticleRecord::new(11, "e-", 0.000511, -3).with_anti("e+");
        let positron = electron.conjugate().unwrap();
        let mu = ParticleRecord::new(13, "mu-", 0.10566, -3)
            .with_anti("mu+")
            .with_lifetime(LifetimeSource::Tau0(658_654.0));
        let anti_mu = mu.conjugate().unwrap();
        let records = RecordSet {
            particles: vec![
                electron,
                positron,
                mu,
                anti_mu,
                ParticleRecord::new(22, "gamma", 0.0, 0),
                ParticleRecord::new(9_000_221, "f0(500)", 0.5, 0)
                    .with_anti("nonexistent")
                    .with_lifetime(LifetimeSource::Width(0.5)),
            ],
            nuclei: vec![ParticleRecord::nucleus(
                1000020040,
                "helium",
                NuclearNumbers::new(4, 2),
                3.7273794066,
            )],
            overrides: [
                (11, "Electron".parse::<Symbol>().unwrap()),
                (-11, "Positron".parse::<Symbol>().unwrap()),
            ]
            .into_iter()
            .collect(),
        };
        forge(&records, &ForgeConfig::default()).unwrap()
    }

    #[test]
    fn render_orders_sections() {
        let source = render(&sample_tables()).unwrap();
        assert!(source.starts_with("// @generated"));

        let positions: Vec<usize> = [
            "pub enum Code {",
            "pub enum PdgCode {",
            "pub mod detail {",
            "impl Code {\n    const fn index",
            "pub trait Particle {",
            "pub struct Electron;",
        ]
        .iter()
        .map(|needle| source.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn unknown_anti_particle_resolves_to_a_table_row() {
        let source = render(&sample_tables()).unwrap();
        assert!(source.contains("const ANTI_PARTICLE: Code = Code::Unknown;"));
        assert!(source.contains("pub enum Code {\n    Unknown = 0,\n"));

        let offset = source.find("pub const OFFSET: usize = 0;").unwrap();
        let names = source.find("pub const NAMES: [&str; ROWS] = [\n        \"Unknown\",\n").unwrap();
        assert!(offset < names);
        assert!(source.contains("self as usize - detail::OFFSET"));
    }

    #[test]
    fn write_matches_render() {
        let tables = sample_tables();
        let mut buffer = Vec::new();
        write(&mut buffer, &tables).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), render(&tables).unwrap());
    }

    #[test]
    fn keyword_symbols_are_rejected() {
        let records = RecordSet {
            particles: vec![ParticleRecord::new(22, "gamma", 0.0, 0)],
            overrides: [(22, "Self".parse::<Symbol>().unwrap())].into_iter().collect(),
            ..RecordSet::default()
        };
        let tables = forge(&records, &ForgeConfig::default()).unwrap();
        let err = render(&tables).unwrap_err();
        assert!(matches!(err, Error::ReservedSymbol { .. }));
    }

    #[test]
    fn generated_item_names_are_rejected() {
        let records = RecordSet {
            particles: vec![ParticleRecord::new(22, "code", 0.0, 0)],
            ..RecordSet::default()
        };
        let tables = forge(&records, &ForgeConfig::default()).unwrap();
        let err = render(&tables).unwrap_err();
        assert_eq!(
            err.to_string(),
            "symbol 'Code' cannot be used as a Rust source identifier"
        );
    }

    #[test]
    fn empty_database_is_rejected() {
        let tables = forge(&RecordSet::default(), &ForgeConfig::default()).unwrap();
        assert!(matches!(render(&tables), Err(Error::EmptyDatabase)));
    }

    #[test]
    fn float_literals() {
        assert_eq!(float_literal(0.000511), "0.000511");
        assert_eq!(float_literal(0.0), "0.0");
        assert_eq!(float_literal(1e-24), "1e-24");
        assert_eq!(float_literal(f64::INFINITY), "f64::INFINITY");
        assert_eq!(float_literal(-2.5), "-2.5");
    }
}
