use super::entry::ParticleEntry;
use super::symbol::Symbol;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Insertion-ordered collection of particle entries keyed by symbol.
///
/// Entries are stored in internal-code order: the entry at position `i`
/// carries code `i + 1`. A database is populated only by
/// [`DatabaseBuilder`](crate::DatabaseBuilder) and is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ParticleDatabase {
    entries: IndexMap<Symbol, ParticleEntry>,
    by_pdg: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
}

impl ParticleDatabase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Callers must have checked symbol and PDG uniqueness.
    pub(crate) fn push(&mut self, entry: ParticleEntry) {
        let position = self.entries.len();
        debug_assert_eq!(entry.code as usize, position + 1);
        self.by_pdg.insert(entry.pdg, position);
        self.by_name.entry(entry.name.clone()).or_insert(position);
        self.entries.insert(entry.symbol.clone(), entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in internal-code order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ParticleEntry> {
        self.entries.values()
    }

    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &Symbol> {
        self.entries.keys()
    }

    pub fn get(&self, symbol: &str) -> Option<&ParticleEntry> {
        self.entries.get(symbol)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn by_code(&self, code: u32) -> Option<&ParticleEntry> {
        let position = usize::try_from(code).ok()?.checked_sub(1)?;
        self.entries.get_index(position).map(|(_, entry)| entry)
    }

    pub fn by_pdg(&self, pdg: i32) -> Option<&ParticleEntry> {
        let position = *self.by_pdg.get(&pdg)?;
        self.entries.get_index(position).map(|(_, entry)| entry)
    }

    /// First entry (in code order) with the given display name.
    pub fn by_name(&self, name: &str) -> Option<&ParticleEntry> {
        let position = *self.by_name.get(name)?;
        self.entries.get_index(position).map(|(_, entry)| entry)
    }

    /// Resolves an entry's anti-particle through its anti-particle display name.
    pub fn anti_particle(&self, entry: &ParticleEntry) -> Option<&ParticleEntry> {
        entry
            .anti_name
            .as_deref()
            .and_then(|name| self.by_name(name))
    }

    /// Highest assigned internal code, `0` when empty.
    pub fn last_code(&self) -> u32 {
        self.entries.last().map_or(0, |(_, entry)| entry.code)
    }

    pub fn particle_count(&self) -> usize {
        self.iter().filter(|e| !e.is_nucleus).count()
    }

    pub fn nucleus_count(&self) -> usize {
        self.iter().filter(|e| e.is_nucleus).count()
    }
}
