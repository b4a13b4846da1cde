//! Core data structures that flow through `particle-forge`.
//!
//! - [`record`] – Raw particle and nucleus records as read from a record source.
//! - [`symbol`] – Identifier-safe particle names and the identifier grammar.
//! - [`entry`] – Database entries with their assigned internal codes.
//! - [`database`] – The insertion-ordered, read-only particle database.
//!
//! Records ([`RecordSet`]) are the input of the [`crate::forge`] pipeline and
//! the [`ParticleDatabase`] is its central product.
//!
//! [`RecordSet`]: record::RecordSet
//! [`ParticleDatabase`]: database::ParticleDatabase

pub mod database;
pub mod entry;
pub mod record;
pub mod symbol;
