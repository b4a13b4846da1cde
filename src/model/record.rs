use super::symbol::Symbol;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Neutron mass in GeV, used for nuclei without an explicit mass.
pub const NEUTRON_MASS: f64 = 0.9395654133;
/// Proton mass in GeV, used for nuclei without an explicit mass.
pub const PROTON_MASS: f64 = 0.9382720813;

/// Raw lifetime information carried by an input record.
///
/// The lifetime in seconds is derived from this by the database builder,
/// which applies the configured stable and short-lived id lists first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LifetimeSource {
    /// Known to be stable (used for nuclei).
    Stable,
    /// Proper decay length `c·τ` in millimetres.
    Tau0(f64),
    /// Total decay width `Γ` in GeV.
    Width(f64),
    #[default]
    Unspecified,
}

/// Mass number `A` and charge number `Z` of a nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NuclearNumbers {
    pub a: u16,
    pub z: u16,
}

/// Reason a pair of nuclear numbers cannot describe a nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidNucleus {
    #[error("mass number A = 0")]
    ZeroMassNumber,
    #[error("Z = {z} greater than A = {a}")]
    ChargeAboveMass { a: u16, z: u16 },
    #[error("Z = {z} exceeds the largest encodable charge number {}", NuclearNumbers::MAX_Z)]
    ChargeOutOfRange { z: u16 },
}

impl NuclearNumbers {
    /// Largest `Z` whose charge in units of e/3 fits an `i16`.
    pub const MAX_Z: u16 = (i16::MAX / 3) as u16;

    pub fn new(a: u16, z: u16) -> Self {
        Self { a, z }
    }

    /// Checks that the numbers describe a physical, encodable nucleus.
    pub fn validate(&self) -> Result<(), InvalidNucleus> {
        if self.a == 0 {
            return Err(InvalidNucleus::ZeroMassNumber);
        }
        if self.z > self.a {
            return Err(InvalidNucleus::ChargeAboveMass {
                a: self.a,
                z: self.z,
            });
        }
        if self.z > Self::MAX_Z {
            return Err(InvalidNucleus::ChargeOutOfRange { z: self.z });
        }
        Ok(())
    }

    /// Sum of free nucleon masses, in GeV.
    pub fn nominal_mass(&self) -> f64 {
        let neutrons = f64::from(self.a.saturating_sub(self.z));
        neutrons * NEUTRON_MASS + f64::from(self.z) * PROTON_MASS
    }

    /// Electric charge in units of e/3, `None` above [`Self::MAX_Z`].
    pub fn charge(&self) -> Option<i16> {
        i16::try_from(self.z).ok()?.checked_mul(3)
    }
}

/// One particle or nucleus definition as supplied by a record source.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRecord {
    /// PDG code.
    pub pdg: i32,
    /// Display name, e.g. `"pi+"`.
    pub name: String,
    /// Display name of the anti-particle, `None` if self-conjugate or unknown.
    pub anti_name: Option<String>,
    /// Mass in GeV.
    pub mass: f64,
    /// Electric charge in units of e/3.
    pub charge: i16,
    pub lifetime: LifetimeSource,
    /// Present for nuclei only.
    pub nucleus: Option<NuclearNumbers>,
}

impl ParticleRecord {
    pub fn new(pdg: i32, name: impl Into<String>, mass: f64, charge: i16) -> Self {
        Self {
            pdg,
            name: name.into(),
            anti_name: None,
            mass,
            charge,
            lifetime: LifetimeSource::Unspecified,
            nucleus: None,
        }
    }

    pub fn with_anti(mut self, anti_name: impl Into<String>) -> Self {
        self.anti_name = Some(anti_name.into());
        self
    }

    pub fn with_lifetime(mut self, lifetime: LifetimeSource) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Builds a nucleus record; charge and lifetime follow from `Z`.
    ///
    /// The charge is left at 0 when `Z` is out of range; the database
    /// builder rejects such records via [`NuclearNumbers::validate`].
    pub fn nucleus(pdg: i32, name: impl Into<String>, nucleus: NuclearNumbers, mass: f64) -> Self {
        Self {
            pdg,
            name: name.into(),
            anti_name: None,
            mass,
            charge: nucleus.charge().unwrap_or(0),
            lifetime: LifetimeSource::Stable,
            nucleus: Some(nucleus),
        }
    }

    /// The record describing this particle's anti-particle, if it has one.
    pub fn conjugate(&self) -> Option<Self> {
        let anti_name = self.anti_name.as_ref()?;
        Some(Self {
            pdg: -self.pdg,
            name: anti_name.clone(),
            anti_name: Some(self.name.clone()),
            mass: self.mass,
            charge: -self.charge,
            lifetime: self.lifetime,
            nucleus: self.nucleus,
        })
    }
}

/// Externally supplied PDG code to symbol assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolOverrides {
    map: HashMap<i32, Symbol>,
}

impl SymbolOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pdg: i32, symbol: Symbol) -> Option<Symbol> {
        self.map.insert(pdg, symbol)
    }

    pub fn get(&self, pdg: i32) -> Option<&Symbol> {
        self.map.get(&pdg)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(i32, Symbol)> for SymbolOverrides {
    fn from_iter<I: IntoIterator<Item = (i32, Symbol)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Complete input of one generation run.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub particles: Vec<ParticleRecord>,
    pub nuclei: Vec<ParticleRecord>,
    pub overrides: SymbolOverrides,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_count(&self) -> usize {
        self.particles.len() + self.nuclei.len()
    }
}
