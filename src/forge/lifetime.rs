use super::error::Error;
use super::policy::LifetimePolicy;
use crate::model::record::{LifetimeSource, ParticleRecord};
use tracing::warn;

/// Millimetres per femtometre.
const MM_PER_FM: f64 = 1e-12;

/// Derives a record's mean lifetime in seconds.
///
/// Exactly one rule applies, tried in order: the policy's stable list, an
/// explicitly stable source, `c·τ`, the decay width via `ħc / Γ`, and the
/// policy's short-lived list. A record matching none of them is rejected.
pub fn derive(record: &ParticleRecord, policy: &LifetimePolicy) -> Result<f64, Error> {
    let constants = &policy.constants;

    if policy.is_stable(record.pdg) {
        return Ok(f64::INFINITY);
    }

    match record.lifetime {
        LifetimeSource::Stable => return Ok(f64::INFINITY),
        LifetimeSource::Tau0(ctau_mm) if ctau_mm >= 0.0 => {
            return Ok(ctau_mm / constants.speed_of_light);
        }
        LifetimeSource::Width(width) if width > 0.0 => {
            let ctau_mm = constants.hbar_c / width * MM_PER_FM;
            return Ok(ctau_mm / constants.speed_of_light);
        }
        _ => {}
    }

    if policy.is_short_lived(record.pdg) {
        warn!(
            pdg = record.pdg,
            name = %record.name,
            "no lifetime data, using zero lifetime from the short-lived list"
        );
        return Ok(0.0);
    }

    Err(Error::missing_lifetime(record.pdg, &record.name))
}
