//! # tex-flatten
//! Flatten a multi-file TeX project into a single equivalent TeX file
//! by recursively inlining `\input` directives, stripping comments and
//! removing ignored environments.
//!
//! # tex-flatten as a library
//! Build a [`Config`] and call [`flatten`] (or [`Flattener::run`] to get
//! the error report instead of having it printed):
//! ```no_run
//! use tex_flatten::{Config, Flattener};
//!
//! let mut cfg = Config::default();
//! cfg.input = "main.tex".into();
//! let flat = Flattener::run(cfg).unwrap();
//! print!("{flat}");
//! ```

mod constants;
mod core;
pub use crate::core::{flatten, Bibliography, Config, ConfigError, Flattener, Verbosity};
pub mod error;
mod fs;
