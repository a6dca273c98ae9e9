use crate::error::PathError;
use crate::fs::AbsPath;
use error_stack::{IntoReport, Result};
use std::path::Path;

/// Read a source file into a string.
///
/// The file is opened, fully read and released before this returns. No
/// handle outlives the call.
pub fn read_source(path: &AbsPath) -> Result<String, PathError> {
    std::fs::read_to_string(path).into_report().map_err(|e| {
        e.change_context(PathError::from(path))
            .attach_printable(format!("could not read file: {path}"))
    })
}

/// Write the flattened output to the destination path.
pub fn write_output<P>(path: &P, contents: &str) -> Result<(), PathError>
where
    P: AsRef<Path>,
{
    std::fs::write(path, contents).into_report().map_err(|e| {
        e.change_context(PathError::from(path))
            .attach_printable(format!(
                "could not write output file: {}",
                path.as_ref().display()
            ))
    })
}
