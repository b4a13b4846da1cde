use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use particle_forge::DEFAULT_P_MAX;

#[derive(Parser)]
#[command(
    name = "pforge",
    about = "Particle property table and PDG code-conversion generator",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the particle property module from particle data tables
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Resolve PDG codes against the generated conversion index
    #[command(visible_alias = "l")]
    Lookup(LookupArgs),

    /// Print the identifier synthesized for particle display names
    #[command(visible_alias = "s")]
    Symbol(SymbolArgs),
}

/// Particle data sources shared by generate and lookup.
#[derive(Args)]
#[command(next_help_heading = "Particle Data")]
pub struct InputOptions {
    /// Particle data XML (PYTHIA8 ParticleData.xml layout)
    #[arg(short = 'p', long = "particles", value_name = "FILE")]
    pub particles: PathBuf,

    /// Nuclear data XML (<particle> elements with A and Z)
    #[arg(short = 'n', long = "nuclei", value_name = "FILE")]
    pub nuclei: PathBuf,

    /// Symbol override XML (<particle pdgID=".." classname=".."/>)
    #[arg(short = 's', long = "symbols", value_name = "FILE")]
    pub symbols: Option<PathBuf>,
}

/// Table generation options shared by generate and lookup.
#[derive(Args)]
#[command(next_help_heading = "Table Generation")]
pub struct TableOptions {
    /// Custom lifetime policy (TOML file)
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// PDG codes with |pdg| below this bound use the dense conversion array
    #[arg(long = "p-max", value_name = "N", default_value_t = DEFAULT_P_MAX)]
    pub p_max: u32,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub tables: TableOptions,

    /// Output Rust module (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also dump the particle database as TOML
    #[arg(long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub tables: TableOptions,

    /// PDG codes to resolve
    #[arg(value_name = "PDG", required = true, allow_negative_numbers = true)]
    pub pdg: Vec<i32>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct SymbolArgs {
    /// Particle display names, e.g. "Sigma*_cbar-"
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
