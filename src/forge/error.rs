//! Error types for particle table generation.
//!
//! Every variant is fatal: the generator is an offline, deterministic build
//! step, and any inconsistency in the input data must stop the build rather
//! than produce a silently wrong table. Variants are grouped as input shape,
//! synthesis, consistency, capacity, and configuration errors.

use crate::model::record::InvalidNucleus;
use crate::model::symbol::Symbol;
use std::fmt;
use thiserror::Error;

/// The half of the conversion index an entry was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Fixed-size array for PDG codes with `|pdg| < p_max`.
    Dense,
    /// Sorted map for all other PDG codes.
    Sparse,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Dense => write!(f, "dense array"),
            Partition::Sparse => write!(f, "sparse map"),
        }
    }
}

/// Errors that can occur while building the particle database and its tables.
#[derive(Debug, Error)]
pub enum Error {
    /// No lifetime derivation rule applies to a record.
    #[error("missing lifetime for particle {pdg} ('{name}'): no derivation rule applies")]
    MissingLifetime {
        /// PDG code of the offending record.
        pdg: i32,
        /// Display name of the offending record.
        name: String,
    },

    /// A record in the nucleus pass carries no mass and charge numbers.
    #[error("nucleus record {pdg} ('{name}') has no A/Z numbers")]
    MissingNuclearNumbers { pdg: i32, name: String },

    /// A record in the nucleus pass has unphysical or unencodable A/Z numbers.
    #[error("nucleus record {pdg} ('{name}') has {reason}")]
    InvalidNuclearNumbers {
        pdg: i32,
        name: String,
        reason: InvalidNucleus,
    },

    /// A display name could not be turned into a valid identifier.
    #[error("could not generate an identifier for '{name}': result '{candidate}'")]
    Synthesis {
        /// Display name that was being converted.
        name: String,
        /// The malformed result.
        candidate: String,
    },

    /// Two records claim the same PDG code.
    #[error("duplicate PDG code {pdg}: already assigned to {existing}, requested by {incoming}")]
    DuplicatePdg {
        pdg: i32,
        existing: Symbol,
        incoming: Symbol,
    },

    /// Two records resolve to the same symbol.
    #[error("duplicate symbol {symbol} for PDG code {pdg}: already defined by PDG code {existing_pdg}")]
    DuplicateSymbol {
        symbol: Symbol,
        pdg: i32,
        existing_pdg: i32,
    },

    /// A conversion index slot was written twice.
    #[error("{partition} entry for PDG code {pdg} already occupied by {existing}, requested by {incoming}")]
    IndexCollision {
        pdg: i32,
        partition: Partition,
        existing: Symbol,
        incoming: Symbol,
    },

    /// The internal code range does not fit the generated integer type.
    #[error("{count} particles do not fit the internal code range (at most {max})")]
    CodeOverflow {
        /// Number of database entries.
        count: usize,
        /// Largest representable entry count.
        max: usize,
    },

    /// Failed to parse a lifetime policy TOML document.
    #[error("failed to parse lifetime policy: {0}")]
    PolicyParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a [`MissingLifetime`](Error::MissingLifetime) error.
    pub fn missing_lifetime(pdg: i32, name: impl Into<String>) -> Self {
        Self::MissingLifetime {
            pdg,
            name: name.into(),
        }
    }

    /// Creates a [`Synthesis`](Error::Synthesis) error.
    ///
    /// # Arguments
    ///
    /// * `name`: the display name being converted
    /// * `candidate`: the malformed identifier produced from it
    pub fn synthesis(name: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self::Synthesis {
            name: name.into(),
            candidate: candidate.into(),
        }
    }

    /// Creates an [`IndexCollision`](Error::IndexCollision) error.
    pub fn index_collision(
        pdg: i32,
        partition: Partition,
        existing: &Symbol,
        incoming: &Symbol,
    ) -> Self {
        Self::IndexCollision {
            pdg,
            partition,
            existing: existing.clone(),
            incoming: incoming.clone(),
        }
    }
}
