use super::needs_unknown_sentinel;
use crate::forge::check_code_range;
use crate::io::error::Error;
use crate::model::database::ParticleDatabase;
use std::fmt::Write;

/// Emits the `Code` and `PdgCode` enums.
pub fn emit_enums(db: &ParticleDatabase) -> Result<String, Error> {
    check_code_range(db)?;
    let mut out = String::new();

    writeln!(out, "/// Internal particle code, dense from `Code::FIRST_PARTICLE`.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]")?;
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(out, "#[repr(i16)]")?;
    writeln!(out, "pub enum Code {{")?;
    if needs_unknown_sentinel(db) {
        writeln!(out, "    Unknown = 0,")?;
    }
    for entry in db.iter() {
        writeln!(out, "    {} = {},", entry.symbol, entry.code)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Code {{")?;
    writeln!(out, "    pub const FIRST_PARTICLE: i16 = 1;")?;
    writeln!(out, "    /// One past the last particle code.")?;
    writeln!(out, "    pub const LAST_PARTICLE: i16 = {};", db.len() + 1)?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Particle code in the PDG numbering scheme.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(out, "#[repr(i32)]")?;
    writeln!(out, "pub enum PdgCode {{")?;
    for entry in db.iter() {
        writeln!(out, "    {} = {},", entry.symbol, entry.pdg)?;
    }
    writeln!(out, "}}")?;

    Ok(out)
}

/// Emits the `impl Code` property accessors and its `Display` impl.
pub fn emit_accessors(db: &ParticleDatabase) -> Result<String, Error> {
    let mut out = String::new();

    out.push_str(ACCESSORS);

    writeln!(out)?;
    writeln!(out, "    /// `None` only for `Code::Unknown`.")?;
    writeln!(out, "    pub const fn pdg(self) -> Option<PdgCode> {{")?;
    writeln!(out, "        match self {{")?;
    if needs_unknown_sentinel(db) {
        writeln!(out, "            Code::Unknown => None,")?;
    }
    for entry in db.iter() {
        writeln!(
            out,
            "            Code::{symbol} => Some(PdgCode::{symbol}),",
            symbol = entry.symbol
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    pub const fn from_pdg(pdg: PdgCode) -> Code {{")?;
    writeln!(out, "        match pdg {{")?;
    for entry in db.iter() {
        writeln!(
            out,
            "            PdgCode::{symbol} => Code::{symbol},",
            symbol = entry.symbol
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    out.push_str(DISPLAY);
    Ok(out)
}

const ACCESSORS: &str = "\
impl Code {
    const fn index(self) -> usize {
        self as usize - detail::OFFSET
    }

    /// Mass in GeV.
    pub const fn mass(self) -> f64 {
        detail::MASSES[self.index()]
    }

    /// Raw PDG code, 0 for `Code::Unknown`.
    pub const fn pdg_id(self) -> i32 {
        detail::PDG_CODES[self.index()]
    }

    pub const fn name(self) -> &'static str {
        detail::NAMES[self.index()]
    }

    /// Electric charge in units of e, truncated towards zero.
    pub const fn charge_number(self) -> i16 {
        detail::ELECTRIC_CHARGES[self.index()] / 3
    }

    /// Electric charge in units of e.
    pub const fn electric_charge(self) -> f64 {
        detail::ELECTRIC_CHARGES[self.index()] as f64 / 3.0
    }

    /// Mean lifetime in seconds, `f64::INFINITY` for stable particles.
    pub const fn lifetime(self) -> f64 {
        detail::LIFETIMES[self.index()]
    }

    pub const fn is_hadron(self) -> bool {
        detail::IS_HADRON[self.index()]
    }

    pub const fn is_nucleus(self) -> bool {
        detail::IS_NUCLEUS[self.index()]
    }

    pub const fn nucleus_a(self) -> u16 {
        detail::NUCLEUS_A[self.index()]
    }

    pub const fn nucleus_z(self) -> u16 {
        detail::NUCLEUS_Z[self.index()]
    }

    pub const fn is_em(self) -> bool {
        matches!(self.pdg_id(), 11 | -11 | 22)
    }

    pub const fn is_muon(self) -> bool {
        matches!(self.pdg_id(), 13 | -13)
    }

    pub const fn is_neutrino(self) -> bool {
        matches!(self.pdg_id(), 12 | -12 | 14 | -14 | 16 | -16)
    }

    /// Looks up the internal code of a raw PDG code.
    pub const fn from_pdg_id(pdg: i32) -> Option<Code> {
        if pdg > -detail::P_MAX && pdg < detail::P_MAX {
            return detail::CONVERSION_ARRAY[(pdg + detail::P_MAX) as usize];
        }
        let map = &detail::CONVERSION_MAP;
        let mut lo = 0;
        let mut hi = map.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (key, code) = map[mid];
            if key == pdg {
                return Some(code);
            } else if key < pdg {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        None
    }
";

const DISPLAY: &str = "\
impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::codegen::tests::sample_tables;

    #[test]
    fn code_enum_lists_entries_in_code_order() {
        let source = emit_enums(&sample_tables().database).unwrap();
        let expected = "\
pub enum Code {
    Unknown = 0,
    Electron = 1,
    Positron = 2,
    MuMinus = 3,
    MuPlus = 4,
    Gamma = 5,
    F0_500 = 6,
    Helium = 7,
}";
        assert!(source.contains(expected), "{source}");
        assert!(source.contains("pub const FIRST_PARTICLE: i16 = 1;"));
        assert!(source.contains("pub const LAST_PARTICLE: i16 = 8;"));
    }

    #[test]
    fn pdg_enum_uses_pdg_discriminants() {
        let source = emit_enums(&sample_tables().database).unwrap();
        assert!(source.contains("#[repr(i32)]\npub enum PdgCode {\n    Electron = 11,\n    Positron = -11,"));
        assert!(source.contains("    Helium = 1000020040,\n}"));
    }

    #[test]
    fn owned_unknown_symbol_suppresses_sentinel() {
        use crate::forge::{ForgeConfig, forge};
        use crate::model::record::{ParticleRecord, RecordSet};

        let records = RecordSet {
            particles: vec![
                ParticleRecord::new(0, "unknown", 0.0, 0),
                ParticleRecord::new(22, "gamma", 0.0, 0),
            ],
            ..RecordSet::default()
        };
        let tables = forge(&records, &ForgeConfig::default()).unwrap();
        let source = emit_enums(&tables.database).unwrap();
        let code_enum = &source[..source.find("impl Code {").unwrap()];
        assert!(code_enum.contains("pub enum Code {\n    Unknown = 1,\n    Gamma = 2,\n}"));
        assert!(!code_enum.contains("Unknown = 0"));
        assert!(source.contains("pub enum PdgCode {\n    Unknown = 0,\n    Gamma = 22,\n}"));
    }

    #[test]
    fn from_pdg_covers_every_entry() {
        let source = emit_accessors(&sample_tables().database).unwrap();
        assert!(source.contains("            PdgCode::Electron => Code::Electron,\n"));
        assert!(source.contains("            PdgCode::Helium => Code::Helium,\n"));
        assert_eq!(source.matches(" => Code::").count(), 7);
        assert!(source.contains("impl core::fmt::Display for Code {"));
    }

    #[test]
    fn pdg_accessor_maps_sentinel_to_none() {
        let source = emit_accessors(&sample_tables().database).unwrap();
        assert!(source.contains("    pub const fn pdg(self) -> Option<PdgCode> {"));
        assert!(source.contains("            Code::Unknown => None,\n"));
        assert!(source.contains("            Code::Gamma => Some(PdgCode::Gamma),\n"));
        assert_eq!(source.matches(" => Some(PdgCode::").count(), 7);
    }

    #[test]
    fn accessors_index_through_the_table_offset() {
        let source = emit_accessors(&sample_tables().database).unwrap();
        assert!(source.contains("self as usize - detail::OFFSET"));
        assert!(source.contains("detail::IS_NUCLEUS[self.index()]"));
        assert!(source.contains("f.write_str(self.name())"));
        assert!(!source.contains("as i16 - 1"));
    }
}
