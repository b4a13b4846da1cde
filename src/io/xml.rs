//! Readers for the XML particle data files.
//!
//! All three files share one shape: a flat list of `<particle>` elements
//! whose attributes carry the data. Child elements such as decay channels
//! are skipped.

use super::{Format, error::Error, util::Attributes};
use crate::model::record::{LifetimeSource, NuclearNumbers, ParticleRecord, SymbolOverrides};
use crate::model::symbol::Symbol;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::BufRead;
use tracing::debug;

const PARTICLE_TAG: &[u8] = b"particle";

/// Reads PYTHIA8-style particle data.
///
/// A particle with an `antiName` attribute is followed in the output by its
/// anti-particle record.
pub fn read_particles<R: BufRead>(reader: R) -> Result<Vec<ParticleRecord>, Error> {
    let mut records = Vec::new();
    for_each_particle(reader, Format::ParticleXml, |attrs| {
        let record = particle_record(&attrs)?;
        let anti = record.conjugate();
        records.push(record);
        records.extend(anti);
        Ok(())
    })?;
    debug!(records = records.len(), "read particle data");
    Ok(records)
}

/// Reads nucleus data. Nuclei without a `mass` attribute get the sum of
/// their free nucleon masses.
pub fn read_nuclei<R: BufRead>(reader: R) -> Result<Vec<ParticleRecord>, Error> {
    let mut records = Vec::new();
    for_each_particle(reader, Format::NucleusXml, |attrs| {
        records.push(nucleus_record(&attrs)?);
        Ok(())
    })?;
    debug!(records = records.len(), "read nucleus data");
    Ok(records)
}

/// Reads the PDG code to symbol override table. Later entries for the same
/// code replace earlier ones.
pub fn read_overrides<R: BufRead>(reader: R) -> Result<SymbolOverrides, Error> {
    let mut overrides = SymbolOverrides::new();
    for_each_particle(reader, Format::SymbolXml, |attrs| {
        let symbol: Symbol = attrs.required("classname")?;
        let pdg: i32 = attrs.required("pdgID")?;
        overrides.insert(pdg, symbol);
        Ok(())
    })?;
    debug!(overrides = overrides.len(), "read symbol overrides");
    Ok(overrides)
}

fn for_each_particle<R, F>(reader: R, format: Format, mut visit: F) -> Result<(), Error>
where
    R: BufRead,
    F: FnMut(Attributes) -> Result<(), Error>,
{
    let mut reader = Reader::from_reader(reader);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == PARTICLE_TAG => {
                visit(Attributes::from_element(&e, format, position)?)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn particle_record(attrs: &Attributes) -> Result<ParticleRecord, Error> {
    let pdg: i32 = attrs.required("id")?;
    let name: String = attrs.required("name")?;
    let mass: f64 = attrs.required("m0")?;
    let charge: i16 = attrs.required("chargeType")?;

    let lifetime = match (attrs.optional("tau0")?, attrs.optional("mWidth")?) {
        (Some(ctau), _) => LifetimeSource::Tau0(ctau),
        (None, Some(width)) => LifetimeSource::Width(width),
        (None, None) => LifetimeSource::Unspecified,
    };

    let mut record = ParticleRecord::new(pdg, name, mass, charge).with_lifetime(lifetime);
    record.anti_name = attrs.optional("antiName")?;
    Ok(record)
}

fn nucleus_record(attrs: &Attributes) -> Result<ParticleRecord, Error> {
    let pdg: i32 = attrs.required("id")?;
    let name: String = attrs.required("name")?;
    let numbers = NuclearNumbers::new(attrs.required("A")?, attrs.required("Z")?);
    numbers
        .validate()
        .map_err(|reason| attrs.error(format!("nucleus '{name}' has {reason}")))?;
    let mass = attrs
        .optional::<f64>("mass")?
        .unwrap_or_else(|| numbers.nominal_mass());

    let mut record = ParticleRecord::nucleus(pdg, name, numbers, mass);
    record.anti_name = attrs.optional("antiName")?;
    Ok(record)
}
