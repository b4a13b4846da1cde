use std::fmt;

pub mod codegen;
pub mod dump;
pub mod error;
pub mod util;
pub mod xml;

pub use codegen::{emit_declarations, emit_enums, emit_tables, render};
pub use dump::write_database;
pub use xml::{read_nuclei, read_overrides, read_particles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    ParticleXml,
    NucleusXml,
    SymbolXml,
    RustSource,
    Toml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::ParticleXml => write!(f, "particle XML"),
            Format::NucleusXml => write!(f, "nucleus XML"),
            Format::SymbolXml => write!(f, "class-name XML"),
            Format::RustSource => write!(f, "Rust source"),
            Format::Toml => write!(f, "TOML"),
        }
    }
}
