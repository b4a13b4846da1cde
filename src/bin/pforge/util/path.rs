use std::path::Path;

/// Short display form of an output path for progress substeps.
pub fn display_name(path: Option<&Path>) -> String {
    path.map(|p| {
        p.file_name()
            .unwrap_or(p.as_os_str())
            .to_string_lossy()
            .into_owned()
    })
    .unwrap_or_else(|| "stdout".to_string())
}
