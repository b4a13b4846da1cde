use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self {
            hints: Vec::new(),
            has_typed_hints: false,
        };

        collector.collect_io_hints(err);
        collector.collect_forge_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use particle_forge::io::error::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.has_typed_hints = true;

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Xml(_) => {
                self.add("The input is not well-formed XML");
                self.add("Check for unclosed tags or unescaped '&' and '<' in attribute values");
            }

            IoError::Parse {
                format, position, ..
            } => {
                self.add(format!(
                    "Reader stopped near byte {} of the {} input",
                    position, format
                ));
                self.add_format_hints(*format);
            }

            IoError::ReservedSymbol { symbol, .. } => {
                self.add(format!(
                    "'{}' collides with a keyword or a name the generated module defines",
                    symbol
                ));
                self.add("Assign a different identifier in the symbol override file (-s)");
            }

            IoError::EmptyDatabase => {
                self.add("No particle or nucleus records were read");
                self.add("Check that the inputs contain <particle> elements");
            }

            IoError::Forge(forge_err) => self.add_forge_error_hints(forge_err),

            IoError::Serialize { .. } => {
                self.add("The particle database could not be written as TOML");
            }

            IoError::Fmt(_) => {
                self.add("Rendering the generated module failed");
                self.add("This may indicate a bug, please report if reproducible");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Ensure you have read/write access as needed");
            }
            ErrorKind::BrokenPipe => {
                self.add("Broken pipe, the output consumer terminated early");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn add_format_hints(&mut self, format: particle_forge::io::Format) {
        use particle_forge::io::Format;

        match format {
            Format::ParticleXml => {
                self.add("Particle XML: each <particle> needs id, name, chargeType and m0");
                self.add("Optional attributes: antiName, tau0 (mm/c), mWidth (GeV)");
            }
            Format::NucleusXml => {
                self.add("Nucleus XML: each <particle> needs id, name, A and Z");
                self.add("A must be positive and Z must not exceed A");
            }
            Format::SymbolXml => {
                self.add("Symbol XML: each <particle> needs pdgID and classname");
                self.add("classname must be a valid identifier, e.g. Electron or F0_500");
            }
            Format::RustSource | Format::Toml => {}
        }
    }

    fn collect_forge_hints(&mut self, err: &Error) {
        use particle_forge::ForgeError;

        let Some(forge_err) = err.downcast_ref::<ForgeError>() else {
            return;
        };

        self.has_typed_hints = true;
        self.add_forge_error_hints(forge_err);
    }

    fn add_forge_error_hints(&mut self, forge_err: &particle_forge::ForgeError) {
        use particle_forge::ForgeError;

        match forge_err {
            ForgeError::MissingLifetime { pdg, .. } => {
                self.add(format!("Record {} has neither tau0 nor mWidth", pdg));
                self.add("Add the id to 'stable' or 'short_lived' in a --policy file");
            }

            ForgeError::MissingNuclearNumbers { pdg, .. } => {
                self.add(format!("Nucleus {} was supplied without A and Z", pdg));
            }

            ForgeError::InvalidNuclearNumbers { pdg, .. } => {
                self.add(format!("Check the A and Z attributes of nucleus {}", pdg));
                self.add("A must be positive and Z may not exceed A");
            }

            ForgeError::Synthesis { name, .. } => {
                self.add(format!("The name '{}' has characters no rule covers", name));
                self.add("Assign an explicit identifier in the symbol override file (-s)");
                self.add("Preview generated identifiers with 'pforge symbol <NAME>'");
            }

            ForgeError::DuplicatePdg { pdg, .. } => {
                self.add(format!("PDG code {} appears more than once in the inputs", pdg));
                self.add("Check for a nucleus that repeats a particle id");
            }

            ForgeError::DuplicateSymbol { symbol, .. } => {
                self.add(format!("Two records both map to '{}'", symbol));
                self.add("Give one of them an explicit identifier via the override file (-s)");
            }

            ForgeError::IndexCollision { .. } => {
                self.add("The conversion index received the same PDG code twice");
                self.add("This may indicate a bug, please report if reproducible");
            }

            ForgeError::CodeOverflow { max, .. } => {
                self.add(format!("At most {} particles fit the 16-bit code type", max));
                self.add("Reduce the input to the particles you need");
            }

            ForgeError::PolicyParse(_) => {
                self.add("The lifetime policy file has invalid TOML syntax");
                self.add("Expected [lifetime] with stable and short_lived id lists");
            }

            ForgeError::InvalidConfig(_) => {
                self.add(format!(
                    "--p-max must be between 1 and {}",
                    particle_forge::MAX_P_MAX
                ));
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdout") {
            self.add("Redirect the output or pass -o <FILE>");
        } else if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        } else if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
