use crate::core::{expand, substitute_bibliography, CollapseNewlines, Progress};
use crate::core::verbs;
use crate::error::FlattenError;
use crate::fs::{self, AbsPath};
use error_stack::Result;
use termcolor::Color;

mod config;
pub use config::*;

/// Run tex-flatten with the given config
///
/// This is the main entry point for tex-flatten. It takes a [`Config`],
/// runs the flattening pipeline and returns the flattened text.
/// If an error occurs, it will be printed to stderr and the function will
/// return [`Err`].
///
/// If you want to retrieve the error object instead of printing it, use
/// [`Flattener::run`].
pub fn flatten(config: Config) -> std::result::Result<String, ()> {
    match Flattener::run(config) {
        Ok(s) => Ok(s),
        Err(e) => {
            eprintln!("{:?}", e);
            Err(())
        }
    }
}

/// The runtime state when executing tex-flatten
#[derive(Debug)]
pub struct Flattener {
    /// The Config
    config: Config,
    /// The Progress reporter
    progress: Progress,
}

impl Flattener {
    /// Internal run function
    ///
    /// This is what [`flatten`] calls internally. The difference is that
    /// this function returns the error instead of printing it.
    pub fn run(config: Config) -> Result<String, FlattenError> {
        log::info!("creating tex-flatten");
        log::debug!("using config: {:?}", config);

        // reject conflicting bibliography modes before any file IO
        let bibliography = config.bibliography().map_err(|e| {
            e.change_context(FlattenError)
                .attach_printable("invalid bibliography configuration")
        })?;

        let progress = Progress::new(config.verbosity.clone());
        let runtime = Self { config, progress };
        runtime.run_internal(bibliography)
    }

    fn run_internal(mut self, bibliography: Option<Bibliography>) -> Result<String, FlattenError> {
        let base = AbsPath::create_base(self.config.base_dir.clone()).map_err(|e| {
            e.change_context(FlattenError)
                .attach_printable("cannot resolve base directory")
        })?;
        let ignore = self.config.ignore_set();

        let _ = self.progress.print_status(
            verbs::FLATTENING,
            &self.config.input.display().to_string(),
            Color::Green,
            false,
        );

        let expansion = expand(&base, &self.config.input, &ignore).map_err(|e| {
            let _ = self
                .progress
                .print_status(verbs::FAILED, "", Color::Red, false);
            e.change_context(FlattenError)
                .attach_printable("cannot expand input")
        })?;
        for warning in &expansion.warnings {
            let _ = self.progress.print_status(
                verbs::WARNING,
                &warning.to_string(),
                Color::Yellow,
                false,
            );
        }
        let _ = self.progress.print_status(
            verbs::EXPANDED,
            &format!("{} file(s)", expansion.file_count),
            Color::Yellow,
            true,
        );

        let mut text = expansion.parts.concat();

        if let Some(bibliography) = bibliography {
            log::info!("substituting bibliography");
            let replacement = match bibliography {
                Bibliography::Read(p) => {
                    let bbl_file = base.try_resolve(&p).map_err(|e| {
                        e.change_context(FlattenError)
                            .attach_printable("cannot resolve bbl file")
                    })?;
                    fs::read_source(&bbl_file).map_err(|e| {
                        e.change_context(FlattenError)
                            .attach_printable("cannot read bbl file")
                    })?
                }
                Bibliography::Link(p) => format!("\\input{{{}}}", p.display()),
            };
            text = substitute_bibliography(&text, &replacement);
        }

        if self.config.clean {
            text = text.collapse_newlines();
        }

        if let Some(output) = &self.config.output {
            let output = if output.is_absolute() {
                output.clone()
            } else {
                self.config.base_dir.join(output)
            };
            let _ = self.progress.print_status(
                verbs::WRITING,
                &output.display().to_string(),
                Color::Green,
                false,
            );
            fs::write_output(&output, &text).map_err(|e| {
                e.change_context(FlattenError)
                    .attach_printable("cannot write output file")
            })?;
        }

        let _ = self
            .progress
            .print_status(verbs::DONE, "", Color::Green, false);

        Ok(text)
    }
}
