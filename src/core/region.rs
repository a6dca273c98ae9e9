//! Removal of ignored environment regions

use crate::core::directive::{env_markers, MarkerKind};
use std::fmt;

/// The set of environment names excluded from output.
///
/// Built once per run from the config (augmented with the reserved
/// sentinel name) and shared read-only across all recursive calls.
#[derive(Debug, Clone)]
pub struct IgnoreEnvs {
    names: Vec<String>,
}

impl IgnoreEnvs {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Non-fatal diagnostic produced while excluding regions
#[derive(Debug, PartialEq)]
pub enum RegionWarning {
    /// `\end{found}` closed a region opened by `\begin{expected}`
    Mismatch { expected: String, found: String },
    /// `\end{name}` with no open region
    DanglingEnd { name: String },
    /// `\begin{name}` never closed before the end of the file
    Unterminated { name: String },
}

impl fmt::Display for RegionWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mismatch { expected, found } => {
                write!(
                    f,
                    "\\begin{{{expected}}} and \\end{{{found}}} don't match"
                )
            }
            Self::DanglingEnd { name } => write!(f, "extra \\end{{{name}}}"),
            Self::Unterminated { name } => {
                write!(f, "\\end{{{name}}} not found")
            }
        }
    }
}

/// Remove every maximal nested region bounded by begin/end markers whose
/// names are in the ignore set.
///
/// Markers for different ignored names may interleave arbitrarily; they
/// are tracked on one combined nesting stack. Markers naming environments
/// outside the set are invisible to this pass and pass through untouched.
///
/// Returns the preserved spans concatenated in original order, plus any
/// diagnostics. Diagnostics never abort processing, but an unterminated
/// region drops the trailing content inside it.
pub fn exclude_regions(s: &str, ignore: &IgnoreEnvs) -> (String, Vec<RegionWarning>) {
    let mut parts: Vec<&str> = Vec::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut warnings = Vec::new();
    let mut last_pos = 0;
    for marker in env_markers(s) {
        if !ignore.contains(marker.name) {
            continue;
        }
        match marker.kind {
            MarkerKind::Begin => {
                if stack.is_empty() {
                    parts.push(&s[last_pos..marker.start]);
                }
                stack.push(marker.name);
            }
            MarkerKind::End => {
                if let Some(open) = stack.pop() {
                    if open != marker.name {
                        warnings.push(RegionWarning::Mismatch {
                            expected: open.to_string(),
                            found: marker.name.to_string(),
                        });
                    }
                    if stack.is_empty() {
                        last_pos = marker.end;
                    }
                } else {
                    // dangling end: warn and leave the marker in place
                    warnings.push(RegionWarning::DanglingEnd {
                        name: marker.name.to_string(),
                    });
                }
            }
        }
    }
    if let Some(open) = stack.first() {
        warnings.push(RegionWarning::Unterminated {
            name: open.to_string(),
        });
    } else {
        parts.push(&s[last_pos..]);
    }
    (parts.concat(), warnings)
}
