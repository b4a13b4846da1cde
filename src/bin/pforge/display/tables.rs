use std::io::{self, Write};

use particle_forge::{ForgedTables, ParticleEntry, RecordSet};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_input_summary(records: &RecordSet) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = [
        ("Particles", records.particles.len().to_string()),
        ("Nuclei", records.nuclei.len().to_string()),
        ("Symbol overrides", records.overrides.len().to_string()),
        ("Total records", records.record_count().to_string()),
    ];

    print_kv_table(&mut out, "Input Summary", &rows);
}

pub fn print_database_summary(tables: &ForgedTables) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let db = &tables.database;
    let index = &tables.index;
    let dense = index.dense().iter().filter(|slot| slot.is_some()).count();

    let rows = [
        ("Entries", db.len().to_string()),
        ("Codes", format!("1 .. {}", db.last_code())),
        ("Dense (|pdg|<P)", format!("{dense} of {}", index.dense().len())),
        ("Sparse", index.sparse().len().to_string()),
        ("P_MAX", index.p_max().to_string()),
    ];
    print_kv_table(&mut out, "Database Summary", &rows);

    let classes = lifetime_classes(db.iter());
    print_distribution_table(&mut out, "Lifetime Classes", &classes, db.len());
}

fn lifetime_classes<'a>(entries: impl Iterator<Item = &'a ParticleEntry>) -> Vec<(String, usize)> {
    let (mut stable, mut prompt, mut decaying) = (0, 0, 0);
    for entry in entries {
        if entry.is_stable() {
            stable += 1;
        } else if entry.lifetime == 0.0 {
            prompt += 1;
        } else {
            decaying += 1;
        }
    }

    let mut classes = vec![
        ("Stable".to_string(), stable),
        ("Decaying".to_string(), decaying),
        ("Prompt".to_string(), prompt),
    ];
    classes.sort_by(|a, b| b.1.cmp(&a.1));
    classes
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┐",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Class", "Count", "Distribution",
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┤",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );

    for (name, count) in data {
        let pct = if total > 0 {
            (*count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let dist = format!("{} {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            truncate(&dist, dist_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┘",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(
        out,
        "{}┌{}┬{}┐",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┘",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_width - filled))
}

/// Writes one tab-separated line per requested PDG code.
pub fn print_lookup_results(
    out: &mut impl Write,
    tables: &ForgedTables,
    pdg_codes: &[i32],
) -> io::Result<usize> {
    let mut missing = 0;
    for &pdg in pdg_codes {
        let entry = tables
            .index
            .lookup(pdg)
            .and_then(|symbol| tables.database.get(symbol.as_str()));
        match entry {
            Some(entry) => writeln!(
                out,
                "{}\t{}\t{}\t{}",
                pdg, entry.symbol, entry.code, entry.name
            )?,
            None => {
                missing += 1;
                writeln!(out, "{pdg}\tnot found")?;
            }
        }
    }
    out.flush()?;
    Ok(missing)
}
