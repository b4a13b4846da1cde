//! Conversion of particle display names into identifier-safe symbols.
//!
//! Names like `"Delta++"` or `"nu_ebar"` become CamelCase identifiers such
//! as `DeltaPlusPlus` and `NuEBar`. Anti-particle markers always end up as a
//! `Bar` suffix.

use super::error::Error;
use crate::model::symbol::Symbol;

const PUNCTUATION: [char; 4] = ['(', ')', ' ', '/'];

const SUBSTITUTIONS: [(&str, &str); 5] = [
    ("bar", "Bar"),
    ("*", "Star"),
    ("'", "Prime"),
    ("+", "Plus"),
    ("-", "Minus"),
];

const BAR: &str = "Bar";

/// Synthesizes the symbol for a particle display name.
///
/// # Errors
///
/// Returns [`Error::Synthesis`] when the transformed name is not a valid
/// identifier, e.g. because it contains characters the substitution table
/// does not cover.
pub fn synthesize(name: &str) -> Result<Symbol, Error> {
    let mut candidate = normalize_case(name);

    for c in PUNCTUATION {
        candidate = candidate.replace(c, "_");
    }
    for (from, to) in SUBSTITUTIONS {
        candidate = candidate.replace(from, to);
    }

    let candidate = strip_underscores(&collapse_underscores(relocate_bar(candidate)));

    match candidate.parse::<Symbol>() {
        Ok(symbol) => Ok(symbol),
        Err(_) => Err(Error::synthesis(name, candidate)),
    }
}

fn normalize_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Moves the first inner `Bar` to the end of the name.
fn relocate_bar(name: String) -> String {
    match name.find(BAR) {
        Some(i) if i > 0 && i + BAR.len() < name.len() => {
            format!("{}{}{}", &name[..i], &name[i + BAR.len()..], BAR)
        }
        _ => name,
    }
}

fn collapse_underscores(mut name: String) -> String {
    while name.contains("__") {
        name = name.replace("__", "_");
    }
    name
}

/// Drops underscores, keeping only those between two digits.
///
/// A dropped underscore between two lowercase letters turns into a word
/// boundary: the following letter is capitalized.
fn strip_underscores(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            if std::mem::take(&mut capitalize_next) {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            continue;
        }

        match (out.chars().next_back(), chars.get(i + 1)) {
            (Some(prev), Some(next)) if prev.is_ascii_digit() && next.is_ascii_digit() => {
                out.push('_');
            }
            (Some(prev), Some(next)) if prev.is_lowercase() && next.is_lowercase() => {
                capitalize_next = true;
            }
            _ => {}
        }
    }

    out
}
