use std::fs::{self, File, Permissions};
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdout is a terminal (interactive).
pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Writes each `(path, contents)` pair, using stdout when no path is given.
///
/// Every file output is first written in full to a temporary file in its
/// destination directory. Only once all of them are staged are they renamed
/// over their destinations, so a failed run leaves no output behind. Stdout
/// is written last.
pub fn write_outputs(outputs: &[(Option<&Path>, &[u8])]) -> Result<()> {
    let mut staged = Vec::with_capacity(outputs.len());
    let mut to_stdout = Vec::new();
    for &(path, contents) in outputs {
        match path {
            Some(path) => staged.push((path, stage(path, contents)?)),
            None => to_stdout.push(contents),
        }
    }

    for (path, tmp) in staged {
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    }

    if !to_stdout.is_empty() {
        let mut stdout = io::stdout().lock();
        for contents in to_stdout {
            stdout.write_all(contents).context("Failed to write to stdout")?;
        }
        stdout.flush().context("Failed to write to stdout")?;
    }

    Ok(())
}

fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    if let Some(permissions) = output_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to set permissions for {}", path.display()))?;
    }

    Ok(tmp)
}

/// Permissions for a new output: those of the file it replaces, or
/// world-readable on unix. Temporary files are created owner-only.
fn output_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
