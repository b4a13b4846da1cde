use super::record::NuclearNumbers;
use super::symbol::Symbol;
use serde::Serialize;

/// A particle as stored in the database, with its assigned internal code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleEntry {
    pub symbol: Symbol,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_name: Option<String>,
    pub pdg: i32,
    /// Mass in GeV.
    pub mass: f64,
    /// Electric charge in units of e/3.
    pub charge: i16,
    /// Mean lifetime in seconds; `f64::INFINITY` for stable particles.
    pub lifetime: f64,
    /// Dense internal code, starting at 1.
    pub code: u32,
    pub is_nucleus: bool,
    pub is_hadron: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nucleus: Option<NuclearNumbers>,
}

impl ParticleEntry {
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.lifetime.is_infinite()
    }

    #[inline]
    pub fn nucleus_a(&self) -> u16 {
        self.nucleus.map_or(0, |n| n.a)
    }

    #[inline]
    pub fn nucleus_z(&self) -> u16 {
        self.nucleus.map_or(0, |n| n.z)
    }
}
