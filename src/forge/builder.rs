use super::error::Error;
use super::lifetime;
use super::policy::LifetimePolicy;
use super::synth::synthesize;
use crate::model::database::ParticleDatabase;
use crate::model::entry::ParticleEntry;
use crate::model::record::{ParticleRecord, RecordSet, SymbolOverrides};
use crate::model::symbol::Symbol;
use tracing::{debug, info};

/// Entries with `|pdg|` above this are classified as hadrons.
const HADRON_PDG_THRESHOLD: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Particles,
    Nuclei,
}

/// Accumulates particle entries and assigns dense internal codes.
///
/// The next-code counter is explicit builder state shared by the particle
/// pass and the nucleus pass, so nuclei always receive higher codes than
/// every particle inserted before them. Consuming the builder with
/// [`finish`](Self::finish) freezes the database.
#[derive(Debug)]
pub struct DatabaseBuilder<'a> {
    overrides: &'a SymbolOverrides,
    policy: &'a LifetimePolicy,
    database: ParticleDatabase,
    next_code: u32,
}

impl<'a> DatabaseBuilder<'a> {
    pub fn new(overrides: &'a SymbolOverrides, policy: &'a LifetimePolicy) -> Self {
        Self {
            overrides,
            policy,
            database: ParticleDatabase::new(),
            next_code: 1,
        }
    }

    /// Internal code the next inserted entry will receive.
    #[inline]
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    pub fn insert_particles(&mut self, records: &[ParticleRecord]) -> Result<(), Error> {
        self.insert_pass(records, Pass::Particles)
    }

    pub fn insert_nuclei(&mut self, records: &[ParticleRecord]) -> Result<(), Error> {
        self.insert_pass(records, Pass::Nuclei)
    }

    pub fn finish(self) -> ParticleDatabase {
        self.database
    }

    fn insert_pass(&mut self, records: &[ParticleRecord], pass: Pass) -> Result<(), Error> {
        let first_code = self.next_code;
        for record in records {
            self.insert(record, pass)?;
        }
        info!(
            pass = ?pass,
            entries = records.len(),
            first_code,
            next_code = self.next_code,
            "inserted records"
        );
        Ok(())
    }

    fn insert(&mut self, record: &ParticleRecord, pass: Pass) -> Result<(), Error> {
        let symbol = self.resolve_symbol(record)?;

        if let Some(existing) = self.database.by_pdg(record.pdg) {
            return Err(Error::DuplicatePdg {
                pdg: record.pdg,
                existing: existing.symbol.clone(),
                incoming: symbol,
            });
        }
        if let Some(existing) = self.database.get(symbol.as_str()) {
            return Err(Error::DuplicateSymbol {
                pdg: record.pdg,
                existing_pdg: existing.pdg,
                symbol,
            });
        }

        let is_nucleus = pass == Pass::Nuclei;
        let nucleus = match (pass, record.nucleus) {
            (Pass::Nuclei, None) => {
                return Err(Error::MissingNuclearNumbers {
                    pdg: record.pdg,
                    name: record.name.clone(),
                });
            }
            (Pass::Nuclei, Some(numbers)) => {
                numbers
                    .validate()
                    .map_err(|reason| Error::InvalidNuclearNumbers {
                        pdg: record.pdg,
                        name: record.name.clone(),
                        reason,
                    })?;
                Some(numbers)
            }
            (Pass::Particles, _) => None,
        };

        let lifetime = lifetime::derive(record, self.policy)?;
        let code = self.next_code;
        let next_code = code.checked_add(1).ok_or(Error::CodeOverflow {
            count: self.database.len() + 1,
            max: self.database.len(),
        })?;

        self.database.push(ParticleEntry {
            symbol,
            name: record.name.clone(),
            anti_name: record.anti_name.clone(),
            pdg: record.pdg,
            mass: record.mass,
            charge: record.charge,
            lifetime,
            code,
            is_nucleus,
            is_hadron: is_nucleus || record.pdg.saturating_abs() > HADRON_PDG_THRESHOLD,
            nucleus,
        });
        self.next_code = next_code;

        Ok(())
    }

    fn resolve_symbol(&self, record: &ParticleRecord) -> Result<Symbol, Error> {
        if let Some(symbol) = self.overrides.get(record.pdg) {
            debug!(pdg = record.pdg, %symbol, "using symbol override");
            return Ok(symbol.clone());
        }
        let symbol = synthesize(&record.name)?;
        debug!(pdg = record.pdg, name = %record.name, %symbol, "synthesized symbol");
        Ok(symbol)
    }
}

/// Builds the particle database from both record passes.
///
/// Particles are inserted first, then nuclei, sharing one code counter.
pub fn build(records: &RecordSet, policy: &LifetimePolicy) -> Result<ParticleDatabase, Error> {
    let mut builder = DatabaseBuilder::new(&records.overrides, policy);
    builder.insert_particles(&records.particles)?;
    builder.insert_nuclei(&records.nuclei)?;
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::policy::get_default_policy;
    use crate::model::record::{InvalidNucleus, LifetimeSource, NuclearNumbers};
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn particle(pdg: i32, name: &str) -> ParticleRecord {
        ParticleRecord::new(pdg, name, 0.1, 0).with_lifetime(LifetimeSource::Tau0(1.0))
    }

    fn nucleus(pdg: i32, name: &str, a: u16, z: u16) -> ParticleRecord {
        let numbers = NuclearNumbers::new(a, z);
        ParticleRecord::nucleus(pdg, name, numbers, numbers.nominal_mass())
    }

    fn sample_records() -> RecordSet {
        let electron = ParticleRecord::new(11, "e-", 0.000511, -3).with_anti("e+");
        let positron = electron.conjugate().unwrap();
        RecordSet {
            particles: vec![
                electron,
                positron,
                ParticleRecord::new(22, "gamma", 0.0, 0),
                particle(211, "pi+").with_anti("pi-"),
                particle(-211, "pi-").with_anti("pi+"),
            ],
            nuclei: vec![
                nucleus(1000010010, "hydrogen", 1, 1),
                nucleus(1000020040, "helium", 4, 2),
            ],
            overrides: [
                (11, Symbol::from_str("Electron").unwrap()),
                (-11, Symbol::from_str("Positron").unwrap()),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn codes_are_dense_and_follow_insertion_order() {
        let db = build(&sample_records(), get_default_policy()).unwrap();
        let symbols: Vec<&str> = db.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(
            symbols,
            vec!["Electron", "Positron", "Gamma", "PiPlus", "PiMinus", "Hydrogen", "Helium"]
        );
        let codes: Vec<u32> = db.iter().map(|e| e.code).collect();
        assert_eq!(codes, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn nuclei_continue_the_particle_counter() {
        let records = sample_records();
        let policy = get_default_policy();
        let mut builder = DatabaseBuilder::new(&records.overrides, policy);
        assert_eq!(builder.next_code(), 1);
        builder.insert_particles(&records.particles).unwrap();
        assert_eq!(builder.next_code(), 6);
        builder.insert_nuclei(&records.nuclei).unwrap();
        assert_eq!(builder.next_code(), 8);

        let db = builder.finish();
        let max_particle = db.iter().filter(|e| !e.is_nucleus).map(|e| e.code).max();
        let min_nucleus = db.iter().filter(|e| e.is_nucleus).map(|e| e.code).min();
        assert!(max_particle < min_nucleus);
    }

    #[test]
    fn classification_flags() {
        let db = build(&sample_records(), get_default_policy()).unwrap();
        let electron = db.get("Electron").unwrap();
        assert!(!electron.is_hadron);
        assert!(!electron.is_nucleus);
        assert!(electron.is_stable());

        let pion = db.get("PiPlus").unwrap();
        assert!(pion.is_hadron);
        assert!(!pion.is_nucleus);

        let helium = db.get("Helium").unwrap();
        assert!(helium.is_hadron);
        assert!(helium.is_nucleus);
        assert_eq!(helium.nucleus_a(), 4);
        assert_eq!(helium.nucleus_z(), 2);
        assert_eq!(helium.charge, 6);
        assert!(helium.is_stable());
    }

    #[test]
    fn overrides_take_precedence_over_synthesis() {
        let db = build(&sample_records(), get_default_policy()).unwrap();
        assert!(db.get("EMinus").is_none());
        assert_eq!(db.get("Electron").map(|e| e.pdg), Some(11));
    }

    #[test]
    fn duplicate_pdg_across_passes_is_fatal() {
        let mut records = sample_records();
        let mut clash = nucleus(11, "not-an-electron", 1, 0);
        clash.name = "ghost".into();
        records.nuclei.push(clash);

        let err = build(&records, get_default_policy()).unwrap_err();
        match err {
            Error::DuplicatePdg {
                pdg,
                existing,
                incoming,
            } => {
                assert_eq!(pdg, 11);
                assert_eq!(existing.as_str(), "Electron");
                assert_eq!(incoming.as_str(), "Electron");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_symbol_is_fatal() {
        let mut records = sample_records();
        records.particles.push(particle(213, "pi+"));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateSymbol { pdg: 213, existing_pdg: 211, .. }
        ));
    }

    #[test]
    fn missing_lifetime_names_the_record() {
        let mut records = sample_records();
        records.particles.push(ParticleRecord::new(4122, "Lambda_c+", 2.286, 3));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(err, Error::MissingLifetime { pdg: 4122, .. }));
    }

    #[test]
    fn nucleus_pass_requires_numbers() {
        let mut records = sample_records();
        records
            .nuclei
            .push(ParticleRecord::new(1000030070, "lithium", 6.5, 9));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(err, Error::MissingNuclearNumbers { pdg: 1000030070, .. }));
    }

    #[test]
    fn nucleus_pass_rejects_zero_mass_number() {
        let mut records = sample_records();
        records.nuclei.push(nucleus(1000000000, "nothing", 0, 0));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNuclearNumbers {
                pdg: 1000000000,
                reason: InvalidNucleus::ZeroMassNumber,
                ..
            }
        ));
    }

    #[test]
    fn nucleus_pass_rejects_charge_above_mass_number() {
        let mut records = sample_records();
        records.nuclei.push(nucleus(1000030020, "bogus", 2, 3));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNuclearNumbers {
                reason: InvalidNucleus::ChargeAboveMass { a: 2, z: 3 },
                ..
            }
        ));
    }

    #[test]
    fn nucleus_pass_rejects_unencodable_charge() {
        let mut records = sample_records();
        records.nuclei.push(nucleus(1000000000, "huge", 30000, 10923));

        let err = build(&records, get_default_policy()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNuclearNumbers {
                reason: InvalidNucleus::ChargeOutOfRange { z: 10923 },
                ..
            }
        ));
    }

    #[test]
    fn failed_insert_does_not_advance_counter() {
        let records = sample_records();
        let policy = get_default_policy();
        let mut builder = DatabaseBuilder::new(&records.overrides, policy);
        builder.insert_particles(&records.particles).unwrap();
        let before = builder.next_code();

        let err = builder.insert_particles(&[particle(211, "pi+ again")]);
        assert!(err.is_err());
        assert_eq!(builder.next_code(), before);
    }

    proptest! {
        #[test]
        fn build_is_injective_on_pdg(ids in proptest::collection::vec(-5000i32..5000, 1..40)) {
            let particles: Vec<ParticleRecord> = ids
                .iter()
                .enumerate()
                .map(|(i, &pdg)| particle(pdg, &format!("p{i}")))
                .collect();
            let records = RecordSet { particles, ..RecordSet::default() };

            let distinct: BTreeSet<i32> = ids.iter().copied().collect();
            match build(&records, get_default_policy()) {
                Ok(db) => {
                    prop_assert_eq!(distinct.len(), ids.len());
                    let codes: Vec<u32> = db.iter().map(|e| e.code).collect();
                    let expected: Vec<u32> = (1..=ids.len() as u32).collect();
                    prop_assert_eq!(codes, expected);
                }
                Err(Error::DuplicatePdg { pdg, .. }) => {
                    prop_assert!(distinct.len() < ids.len());
                    prop_assert!(ids.iter().filter(|&&id| id == pdg).count() > 1);
                }
                Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
            }
        }
    }
}
