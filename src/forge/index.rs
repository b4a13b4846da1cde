use super::error::{Error, Partition};
use crate::model::database::ParticleDatabase;
use crate::model::symbol::Symbol;
use std::collections::BTreeMap;
use tracing::info;

/// Largest accepted dense-array bound.
pub const MAX_P_MAX: u32 = 1 << 20;

/// Two-tier PDG code to symbol index.
///
/// Codes with `|pdg| < p_max` live in a dense array at offset `pdg + p_max`;
/// all others live in a sorted map. Empty dense slots stand for "Unknown".
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionIndex {
    p_max: u32,
    dense: Vec<Option<Symbol>>,
    sparse: BTreeMap<i32, Symbol>,
}

impl ConversionIndex {
    fn empty(p_max: u32) -> Self {
        Self {
            p_max,
            dense: vec![None; 2 * p_max as usize + 1],
            sparse: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn p_max(&self) -> u32 {
        self.p_max
    }

    /// Dense slots from `-p_max` to `p_max` inclusive.
    pub fn dense(&self) -> &[Option<Symbol>] {
        &self.dense
    }

    pub fn sparse(&self) -> &BTreeMap<i32, Symbol> {
        &self.sparse
    }

    pub fn lookup(&self, pdg: i32) -> Option<&Symbol> {
        match self.dense_slot(pdg) {
            Some(slot) => self.dense[slot].as_ref(),
            None => self.sparse.get(&pdg),
        }
    }

    fn dense_slot(&self, pdg: i32) -> Option<usize> {
        let p_max = i64::from(self.p_max);
        let pdg = i64::from(pdg);
        if pdg.abs() < p_max {
            usize::try_from(pdg + p_max).ok()
        } else {
            None
        }
    }

    fn insert(&mut self, pdg: i32, symbol: &Symbol) -> Result<(), Error> {
        match self.dense_slot(pdg) {
            Some(slot) => match &self.dense[slot] {
                Some(existing) => Err(Error::index_collision(
                    pdg,
                    Partition::Dense,
                    existing,
                    symbol,
                )),
                None => {
                    self.dense[slot] = Some(symbol.clone());
                    Ok(())
                }
            },
            None => match self.sparse.get(&pdg) {
                Some(existing) => Err(Error::index_collision(
                    pdg,
                    Partition::Sparse,
                    existing,
                    symbol,
                )),
                None => {
                    self.sparse.insert(pdg, symbol.clone());
                    Ok(())
                }
            },
        }
    }
}

/// Builds the conversion index for every entry of the database.
pub fn generate(db: &ParticleDatabase, p_max: u32) -> Result<ConversionIndex, Error> {
    if p_max == 0 || p_max > MAX_P_MAX {
        return Err(Error::InvalidConfig(format!(
            "p_max must be between 1 and {MAX_P_MAX}, got {p_max}"
        )));
    }

    let mut index = ConversionIndex::empty(p_max);
    for entry in db.iter() {
        index.insert(entry.pdg, &entry.symbol)?;
    }

    info!(
        p_max,
        dense = index.dense.iter().filter(|slot| slot.is_some()).count(),
        sparse = index.sparse.len(),
        "generated conversion index"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::builder::build;
    use crate::forge::policy::get_default_policy;
    use crate::model::entry::ParticleEntry;
    use crate::model::record::{LifetimeSource, ParticleRecord, RecordSet};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn database(ids: &[i32]) -> ParticleDatabase {
        let particles = ids
            .iter()
            .enumerate()
            .map(|(i, &pdg)| {
                ParticleRecord::new(pdg, format!("x{i}"), 1.0, 0)
                    .with_lifetime(LifetimeSource::Tau0(1.0))
            })
            .collect();
        let records = RecordSet {
            particles,
            ..RecordSet::default()
        };
        build(&records, get_default_policy()).unwrap()
    }

    #[test]
    fn partition_boundary() {
        let db = database(&[499, -499, 500, -500, 1000020040]);
        let index = generate(&db, 500).unwrap();

        assert_eq!(index.dense().len(), 1001);
        assert_eq!(index.sparse().len(), 3);
        assert!(index.sparse().contains_key(&500));
        assert!(index.sparse().contains_key(&-500));
        assert_eq!(index.dense()[999].as_ref().map(Symbol::as_str), Some("X0"));
        assert_eq!(index.dense()[1].as_ref().map(Symbol::as_str), Some("X1"));
    }

    #[test]
    fn lookup_returns_inserted_symbols() {
        let db = database(&[0, 11, -11, 2212, 500, 1000010010]);
        let index = generate(&db, 500).unwrap();
        for entry in db.iter() {
            assert_eq!(index.lookup(entry.pdg), Some(&entry.symbol));
        }
    }

    #[test]
    fn lookup_misses_are_unknown() {
        let db = database(&[11]);
        let index = generate(&db, 500).unwrap();
        assert_eq!(index.lookup(12), None);
        assert_eq!(index.lookup(999_999), None);
        assert_eq!(index.lookup(i32::MIN), None);
    }

    #[test]
    fn small_p_max_moves_everything_sparse() {
        let db = database(&[11, -11, 22]);
        let index = generate(&db, 1).unwrap();
        assert_eq!(index.dense(), &[None, None, None]);
        assert_eq!(index.sparse().len(), 3);
    }

    #[test]
    fn p_max_out_of_range() {
        let db = database(&[11]);
        assert!(matches!(generate(&db, 0), Err(Error::InvalidConfig(_))));
        assert!(matches!(
            generate(&db, MAX_P_MAX + 1),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn second_write_is_a_collision() {
        let mut index = ConversionIndex::empty(500);
        let a = Symbol::from_str("First").unwrap();
        let b = Symbol::from_str("Second").unwrap();

        index.insert(11, &a).unwrap();
        let err = index.insert(11, &b).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexCollision { pdg: 11, partition: Partition::Dense, .. }
        ));

        index.insert(9_000_111, &a).unwrap();
        let err = index.insert(9_000_111, &b).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexCollision { partition: Partition::Sparse, .. }
        ));
    }

    #[test]
    fn index_preserves_entry_symbols() {
        let db = database(&[211, -211]);
        let index = generate(&db, 500).unwrap();
        let entry: &ParticleEntry = db.by_pdg(-211).unwrap();
        assert_eq!(index.lookup(-211), Some(&entry.symbol));
    }

    proptest! {
        #[test]
        fn every_inserted_id_round_trips(
            ids in proptest::collection::btree_set(-2_000_000i32..2_000_000, 1..50),
            p_max in 1u32..2_000,
        ) {
            let ids: Vec<i32> = ids.into_iter().collect();
            let db = database(&ids);
            let index = generate(&db, p_max).unwrap();
            for entry in db.iter() {
                prop_assert_eq!(index.lookup(entry.pdg), Some(&entry.symbol));
            }
            let placed = index.dense().iter().flatten().count() + index.sparse().len();
            prop_assert_eq!(placed, ids.len());
        }
    }
}
