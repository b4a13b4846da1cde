//! Generation of compile-time particle property tables from particle-physics
//! reference data. Particle records are given identifier-safe symbols and dense
//! internal codes, indexed by PDG code, and rendered into a Rust source module
//! that downstream crates compile in directly.
//!
//! # Features
//!
//! - **Symbol synthesis**: display names such as `"Sigma*_cbar-"` become
//!   identifiers such as `SigmaStarCMinusBar`
//! - **Lifetime derivation**: proper decay lengths and decay widths are
//!   converted to mean lifetimes under a configurable stable/short-lived policy
//! - **Dense internal codes**: particles first, nuclei after, starting at 1
//! - **Two-tier PDG index**: a dense array for small PDG codes and a sorted
//!   map for the rest
//! - **I/O**: PYTHIA8-style particle XML, nuclear data and symbol-override XML
//!   in; a generated Rust module and a TOML database dump out
//!
//! # Quick Start
//!
//! The main entry point is the [`forge`] function, which takes a [`RecordSet`]
//! and a [`ForgeConfig`] and produces the frozen [`ForgedTables`]:
//!
//! ```
//! use particle_forge::{LifetimeSource, ParticleRecord, RecordSet};
//! use particle_forge::{ForgeConfig, forge};
//!
//! let electron = ParticleRecord::new(11, "e-", 0.000511, -3).with_anti("e+");
//! let positron = electron.conjugate().expect("e- has an anti-particle");
//!
//! let muon = ParticleRecord::new(13, "mu-", 0.10566, -3)
//!     .with_anti("mu+")
//!     .with_lifetime(LifetimeSource::Tau0(658_654.0)); // c·τ in mm
//! let anti_muon = muon.conjugate().expect("mu- has an anti-particle");
//!
//! let records = RecordSet {
//!     particles: vec![electron, positron, muon, anti_muon],
//!     ..RecordSet::default()
//! };
//!
//! let tables = forge(&records, &ForgeConfig::default())?;
//!
//! // Codes are dense and follow input order
//! let mu_minus = tables.database.get("MuMinus").unwrap();
//! assert_eq!(mu_minus.code, 3);
//! assert!((mu_minus.lifetime - 2.197e-6).abs() < 1e-9);
//!
//! // Electrons are on the stable list
//! assert!(tables.database.get("EMinus").unwrap().is_stable());
//!
//! // PDG codes resolve to symbols
//! assert_eq!(tables.index.lookup(-13).map(|s| s.as_str()), Some("MuPlus"));
//!
//! // Render the generated module
//! let source = particle_forge::io::render(&tables)?;
//! assert!(source.contains("pub struct MuPlus;"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: XML record readers, the code generator and the database dump
//! - [`forge`]: the generation pipeline
//! - [`ForgeConfig`]: lifetime policy and conversion-index configuration
//!
//! # Data Types
//!
//! ## Input
//!
//! - [`ParticleRecord`]: one particle or nucleus definition
//! - [`LifetimeSource`]: raw lifetime information of a record
//! - [`NuclearNumbers`]: mass and charge numbers of a nucleus
//! - [`SymbolOverrides`]: externally assigned symbols by PDG code
//! - [`RecordSet`]: the complete input of one run
//!
//! ## Output
//!
//! - [`ForgedTables`]: database plus conversion index
//! - [`ParticleDatabase`]: entries in internal-code order
//! - [`ParticleEntry`]: one particle with its symbol, code and properties
//! - [`ConversionIndex`]: PDG code to symbol lookup
//! - [`Symbol`]: validated identifier

mod forge;
mod model;

pub mod io;

pub use model::database::ParticleDatabase;
pub use model::entry::ParticleEntry;
pub use model::record::{
    InvalidNucleus, LifetimeSource, NEUTRON_MASS, NuclearNumbers, PROTON_MASS, ParticleRecord,
    RecordSet, SymbolOverrides,
};
pub use model::symbol::{ParseSymbolError, Symbol, is_identifier};

pub use forge::{
    ConversionIndex, DEFAULT_P_MAX, DatabaseBuilder, ForgeConfig, ForgedTables, LifetimeLists,
    LifetimePolicy, MAX_P_MAX, Partition, PhysicalConstants, build, check_code_range,
    derive_lifetime, forge, generate, get_default_policy, load_policy, synthesize,
};

pub use forge::Error as ForgeError;
