//! Wrapper around Path objects provided by the standard library
//!
//! In the program, we use a few kinds of paths
//! - The base directory all inputs resolve against
//! - The include targets written inside `\input` directives, which may
//!   omit their extension
//! - The output path specified by the user, which may not exist yet
//!
//! The wrapper makes sure that paths are always in the correct context.

use crate::constants::TEX_EXT;
use std::ffi::OsString;
use std::path::PathBuf;

mod abs_path;
pub use abs_path::*;

pub trait TexPath: Sized {
    /// Apply the default extension to an include target.
    ///
    /// Returns `self` with `.tex` appended if the final component of the
    /// path contains no `.`. A path that already has an extension (or a
    /// dotted file name like `refs.bbl`) is returned unchanged.
    fn with_default_extension(self) -> Self;
}

impl TexPath for PathBuf {
    fn with_default_extension(self) -> Self {
        let needs_ext = match self.file_name().and_then(|n| n.to_str()) {
            Some(name) => !name.contains('.'),
            None => false,
        };
        if !needs_ext {
            return self;
        }
        let mut p = OsString::from(self);
        p.push(TEX_EXT);
        PathBuf::from(p)
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_no_extension() {
        let p = PathBuf::from("chapter1").with_default_extension();
        assert_eq!(PathBuf::from("chapter1.tex"), p);
    }

    #[test]
    fn test_has_extension() {
        let p = PathBuf::from("chapter1.tex").with_default_extension();
        assert_eq!(PathBuf::from("chapter1.tex"), p);
    }

    #[test]
    fn test_other_extension() {
        let p = PathBuf::from("refs.bbl").with_default_extension();
        assert_eq!(PathBuf::from("refs.bbl"), p);
    }

    #[test]
    fn test_dotted_directory() {
        // only the final component decides
        let p = PathBuf::from("v1.2/intro").with_default_extension();
        assert_eq!(PathBuf::from("v1.2/intro.tex"), p);
    }

    #[test]
    fn test_plain_directory() {
        let p = PathBuf::from("sections/intro.tex").with_default_extension();
        assert_eq!(PathBuf::from("sections/intro.tex"), p);
    }
}
