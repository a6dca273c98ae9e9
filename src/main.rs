use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tex_flatten::{flatten, Config, Verbosity};

/// Flatten a multi-file TeX project into a single equivalent TeX file
/// after removing comments and replacing calls to \input.
#[derive(Debug, Parser)]
#[command(name = "tex-flatten", version, about)]
struct Cli {
    /// Path to the root TeX file
    input: PathBuf,

    /// Path to output file. Prints to stdout when not given.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Environments to ignore (may be repeated). Defaults to `comment` and `error`.
    #[arg(long = "ignore", value_name = "ENV")]
    ignore_envs: Vec<String>,

    /// Path to bbl file. Read its contents and put in tex file.
    #[arg(long, conflicts_with = "bbl_to_link")]
    bbl_to_read: Option<PathBuf>,

    /// Path to bbl file. \input it in tex file.
    #[arg(long)]
    bbl_to_link: Option<PathBuf>,

    /// Do not remove consecutive empty lines
    #[arg(long = "no-clean")]
    no_clean: bool,

    /// Suppress status output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show more status output
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        config.input = self.input;
        config.output = self.output;
        if !self.ignore_envs.is_empty() {
            config.ignore_envs = self.ignore_envs;
        }
        config.bbl_to_read = self.bbl_to_read;
        config.bbl_to_link = self.bbl_to_link;
        config.clean = !self.no_clean;
        config.verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let to_stdout = cli.output.is_none();
    match flatten(cli.into_config()) {
        Ok(text) => {
            if to_stdout {
                print!("{text}");
            }
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
