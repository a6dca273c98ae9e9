//! Recursive include expansion
//!
//! Drives the per-file pipeline: read, strip comments, exclude ignored
//! regions, then splice the expansion of every `\input` directive in
//! place, depth first and in document order.

use crate::core::comment::{rewrite_ignore_markers, strip_comments};
use crate::core::directive::{find_directive, INPUT_WORD};
use crate::core::region::{exclude_regions, IgnoreEnvs, RegionWarning};
use crate::fs::{self, AbsPath, TexPath};
use error_stack::{Report, Result};
use std::error;
use std::fmt;
use std::path::{Path, PathBuf};

/// The expansion buffer: ordered text fragments whose concatenation is
/// the flattened document, plus the diagnostics collected along the way.
#[derive(Debug, Default)]
pub struct Expansion {
    pub parts: Vec<String>,
    pub warnings: Vec<FileWarning>,
    pub file_count: usize,
}

/// A region warning tagged with the file it came from
#[derive(Debug)]
pub struct FileWarning {
    pub path: AbsPath,
    pub warning: RegionWarning,
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} in {}", self.warning, self.path)
    }
}

#[derive(Debug)]
pub enum ExpandError {
    /// The file could not be resolved or read
    File(String),
    /// The include graph loops back onto a file already being expanded
    CircularInclude(String),
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "could not expand {p}"),
            Self::CircularInclude(p) => write!(f, "circular \\input of {p}"),
        }
    }
}

impl error::Error for ExpandError {}

/// Expand the document rooted at `input` (resolved against `base`).
///
/// A missing file aborts the whole expansion; no partial buffer is
/// returned for that branch.
pub fn expand(base: &AbsPath, input: &Path, ignore: &IgnoreEnvs) -> Result<Expansion, ExpandError> {
    let mut expansion = Expansion::default();
    let mut in_progress = Vec::new();
    expand_into(base, input, ignore, &mut in_progress, &mut expansion)?;
    Ok(expansion)
}

fn expand_into(
    base: &AbsPath,
    input: &Path,
    ignore: &IgnoreEnvs,
    in_progress: &mut Vec<AbsPath>,
    expansion: &mut Expansion,
) -> Result<(), ExpandError> {
    let path = base.try_resolve(&input).map_err(|e| {
        e.change_context(ExpandError::File(input.display().to_string()))
            .attach_printable("could not resolve input file")
    })?;
    if in_progress.contains(&path) {
        let chain = in_progress
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n -> ");
        return Err(Report::new(ExpandError::CircularInclude(path.to_string()))
            .attach_printable(format!("include chain:\n    {chain}")));
    }
    in_progress.push(path.clone());
    log::debug!("expanding file: {path}");

    let raw = fs::read_source(&path).map_err(|e| {
        e.change_context(ExpandError::File(path.to_string()))
            .attach_printable("could not read input file")
    })?;
    let (cleaned, warnings) = clean_source(&raw, ignore);
    expansion.warnings.extend(warnings.into_iter().map(|warning| FileWarning {
        path: path.clone(),
        warning,
    }));
    expansion.file_count += 1;

    let mut last_pos = 0;
    let mut from = 0;
    while let Some(d) = find_directive(&cleaned, INPUT_WORD, from) {
        expansion.parts.push(cleaned[last_pos..d.start].to_string());
        let target = PathBuf::from(d.arg).with_default_extension();
        expand_into(base, &target, ignore, in_progress, expansion)?;
        last_pos = d.end;
        from = d.end;
    }
    expansion.parts.push(cleaned[last_pos..].to_string());

    in_progress.pop();
    Ok(())
}

/// Apply the per-file text pipeline: ignore-marker rewrite, comment
/// stripping, then region exclusion. Order matters; see
/// [`rewrite_ignore_markers`].
fn clean_source(s: &str, ignore: &IgnoreEnvs) -> (String, Vec<RegionWarning>) {
    let s = rewrite_ignore_markers(s);
    let s = strip_comments(&s);
    exclude_regions(&s, ignore)
}

#[cfg(test)]
mod ut {
    use super::*;

    fn ignore() -> IgnoreEnvs {
        IgnoreEnvs::new(vec![
            "comment".to_string(),
            "error".to_string(),
            "tex-flatten-force-ignore".to_string(),
        ])
    }

    #[test]
    fn test_clean_plain() {
        let (out, warnings) = clean_source("hello\nworld\n", &ignore());
        assert_eq!("hello\nworld\n", out);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_clean_comment_and_region() {
        let s = "intro % note\n\\begin{comment}\nhidden\n\\end{comment}\nend\n";
        let (out, warnings) = clean_source(s, &ignore());
        assert_eq!("intro %\n\nend\n", out);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_clean_ignore_markers() {
        let s = "a\n% tex-flatten:ignore-begin\nhidden\n% tex-flatten:ignore-end\nb\n";
        let (out, warnings) = clean_source(s, &ignore());
        assert_eq!("a\n\nb\n", out);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_clean_commented_marker_hides_region() {
        // a commented-out \begin still counts, the comment body is gone
        // before region exclusion runs
        let s = "a\n% \\begin{comment}\nb\n";
        let (out, warnings) = clean_source(s, &ignore());
        assert_eq!("a\n%\nb\n", out);
        assert!(warnings.is_empty());
    }
}
