use crate::constants::{DEFAULT_IGNORE_ENVS, FORCE_IGNORE_ENV};
use crate::core::region::IgnoreEnvs;
use error_stack::{Report, Result};
use std::error;
use std::fmt;
use std::path::PathBuf;

/// Config for running tex-flatten
///
/// Use this to configure tex-flatten when calling it from the library
/// # Example
/// ```no_run
/// use tex_flatten::{Config, Flattener, Verbosity};
///
/// // Use the default config
/// let mut cfg = Config::default();
/// cfg.input = "main.tex".into();
/// // Change verbosity to verbose
/// cfg.verbosity = Verbosity::Verbose;
/// Flattener::run(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for resolving paths. This is usually the current directory.
    pub base_dir: PathBuf,
    /// The root document to flatten, relative to `base_dir`
    pub input: PathBuf,
    /// Destination for the flattened text. When `None`, the text is only
    /// returned from the run and the caller decides where it goes.
    pub output: Option<PathBuf>,
    /// Environment names whose regions are excluded from output
    pub ignore_envs: Vec<String>,
    /// Path to a `.bbl` file whose contents replace the `\bibliography`
    /// directive. Mutually exclusive with `bbl_to_link`.
    pub bbl_to_read: Option<PathBuf>,
    /// Path to a `.bbl` file that the `\bibliography` directive is
    /// redirected to via `\input`. Mutually exclusive with `bbl_to_read`.
    pub bbl_to_link: Option<PathBuf>,
    /// Whether to collapse runs of 3+ newlines to a single blank line
    pub clean: bool,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Running from the current directory
    /// - Flattening `main.tex`
    /// - No output file (text is returned only)
    /// - Ignoring the `comment` and `error` environments
    /// - No bibliography substitution
    /// - Collapsing consecutive empty lines
    /// - Regular verbosity
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input: PathBuf::from("main.tex"),
            output: None,
            ignore_envs: DEFAULT_IGNORE_ENVS.iter().map(|s| s.to_string()).collect(),
            bbl_to_read: None,
            bbl_to_link: None,
            clean: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl Config {
    /// Resolve the bibliography substitution mode.
    ///
    /// Errors if both `bbl_to_read` and `bbl_to_link` are set. This is
    /// checked before any file IO happens.
    pub fn bibliography(&self) -> Result<Option<Bibliography>, ConfigError> {
        match (&self.bbl_to_read, &self.bbl_to_link) {
            (Some(_), Some(_)) => Err(Report::new(ConfigError).attach_printable(
                "bbl_to_read and bbl_to_link are mutually exclusive",
            )),
            (Some(p), None) => Ok(Some(Bibliography::Read(p.clone()))),
            (None, Some(p)) => Ok(Some(Bibliography::Link(p.clone()))),
            (None, None) => Ok(None),
        }
    }

    /// Build the working ignore set: the configured names plus the
    /// reserved sentinel backing the line-level ignore markers.
    pub(crate) fn ignore_set(&self) -> IgnoreEnvs {
        let mut names = self.ignore_envs.clone();
        names.push(FORCE_IGNORE_ENV.to_string());
        IgnoreEnvs::new(names)
    }
}

/// How the `\bibliography` directive is substituted
#[derive(Debug, Clone, PartialEq)]
pub enum Bibliography {
    /// Read the file and splice its contents in verbatim
    Read(PathBuf),
    /// Emit an `\input` directive pointing at the file
    Link(PathBuf),
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[derive(Debug)]
pub struct ConfigError;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid configuration")
    }
}

impl error::Error for ConfigError {}
