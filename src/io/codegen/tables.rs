use super::{float_literal, needs_unknown_sentinel};
use crate::forge::ForgedTables;
use crate::io::error::Error;
use crate::model::symbol::Symbol;
use std::fmt::{self, Write};

/// Emits the `detail` module: property tables in code order and the
/// two-tier PDG conversion index.
///
/// When the `Code` enum carries the synthesized `Unknown = 0` variant, every
/// property table starts with an `Unknown` row so that all codes index a row.
pub fn emit_tables(tables: &ForgedTables) -> Result<String, Error> {
    let db = &tables.database;
    let index = &tables.index;
    let sentinel = needs_unknown_sentinel(db);
    let column = |unknown: &str, rows: Vec<String>| {
        sentinel
            .then(|| unknown.to_string())
            .into_iter()
            .chain(rows)
            .collect::<Vec<_>>()
    };
    let mut out = String::new();

    writeln!(out, "pub mod detail {{")?;
    writeln!(out, "    use super::Code;")?;
    writeln!(out)?;
    writeln!(out, "    pub const SIZE: usize = {};", db.len())?;
    writeln!(out, "    /// Code of the first table row.")?;
    writeln!(out, "    pub const OFFSET: usize = {};", if sentinel { 0 } else { 1 })?;
    writeln!(out, "    pub const ROWS: usize = SIZE + 1 - OFFSET;")?;
    writeln!(out)?;

    writeln!(out, "    /// Masses in GeV.")?;
    write_table(
        &mut out,
        "MASSES",
        "f64",
        "ROWS",
        column("0.0", db.iter().map(|e| float_literal(e.mass)).collect()),
    )?;

    write_table(
        &mut out,
        "PDG_CODES",
        "i32",
        "ROWS",
        column("0", db.iter().map(|e| e.pdg.to_string()).collect()),
    )?;

    write_table(
        &mut out,
        "NAMES",
        "&str",
        "ROWS",
        column(
            &format!("{:?}", Symbol::UNKNOWN),
            db.iter().map(|e| format!("{:?}", e.name)).collect(),
        ),
    )?;

    writeln!(out, "    /// Electric charges in units of e/3.")?;
    write_table(
        &mut out,
        "ELECTRIC_CHARGES",
        "i16",
        "ROWS",
        column("0", db.iter().map(|e| e.charge.to_string()).collect()),
    )?;

    writeln!(out, "    /// Mean lifetimes in seconds.")?;
    write_table(
        &mut out,
        "LIFETIMES",
        "f64",
        "ROWS",
        column("0.0", db.iter().map(|e| float_literal(e.lifetime)).collect()),
    )?;

    write_table(
        &mut out,
        "IS_HADRON",
        "bool",
        "ROWS",
        column("false", db.iter().map(|e| e.is_hadron.to_string()).collect()),
    )?;

    write_table(
        &mut out,
        "IS_NUCLEUS",
        "bool",
        "ROWS",
        column("false", db.iter().map(|e| e.is_nucleus.to_string()).collect()),
    )?;

    write_table(
        &mut out,
        "NUCLEUS_A",
        "u16",
        "ROWS",
        column("0", db.iter().map(|e| e.nucleus_a().to_string()).collect()),
    )?;
    write_table(
        &mut out,
        "NUCLEUS_Z",
        "u16",
        "ROWS",
        column("0", db.iter().map(|e| e.nucleus_z().to_string()).collect()),
    )?;

    writeln!(out, "    /// PDG codes with `|pdg| < P_MAX` are resolved through `CONVERSION_ARRAY`.")?;
    writeln!(out, "    pub const P_MAX: i32 = {};", index.p_max())?;
    writeln!(out)?;

    let dense = index.dense();
    write_table(
        &mut out,
        "CONVERSION_ARRAY",
        "Option<Code>",
        &dense.len().to_string(),
        dense.iter().map(|slot| match slot {
            Some(symbol) => format!("Some(Code::{symbol})"),
            None => "None".to_string(),
        }),
    )?;

    let sparse = index.sparse();
    writeln!(out, "    /// All other PDG codes, sorted for binary search.")?;
    write_table(
        &mut out,
        "CONVERSION_MAP",
        "(i32, Code)",
        &sparse.len().to_string(),
        sparse
            .iter()
            .map(|(pdg, symbol)| format!("({pdg}, Code::{symbol})")),
    )?;

    writeln!(out, "}}")?;
    Ok(out)
}

fn write_table<I>(out: &mut String, name: &str, ty: &str, len: &str, rows: I) -> fmt::Result
where
    I: IntoIterator<Item = String>,
{
    writeln!(out, "    pub const {name}: [{ty}; {len}] = [")?;
    for row in rows {
        writeln!(out, "        {row},")?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)
}
