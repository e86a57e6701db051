//! Command-line interface implementation
//!
//! `filter [-b|-g|-r|-s|-e] [-v] <INFILE> <OUTFILE>`
//!
//! Exactly one filter flag must be given. Every failure maps to its own
//! exit status (see [`CliError::exit_code`]) and is reported on stderr
//! before any pixel is transformed.

use bmpfilter_filter::FilterMode;
use bmpfilter_io::{IoError, read_bmp, write_bmp};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use log::{debug, info};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INVALID_FILTER: u8 = 1;
pub const EXIT_FILTER_COUNT: u8 = 2;
pub const EXIT_USAGE: u8 = 3;
pub const EXIT_OPEN_INPUT: u8 = 4;
pub const EXIT_CREATE_OUTPUT: u8 = 5;
pub const EXIT_UNSUPPORTED_FORMAT: u8 = 6;

/// filter - Apply an image filter to a 24-bit uncompressed BMP file
#[derive(Parser, Debug)]
#[command(name = "filter")]
#[command(about = "Apply an image filter to a 24-bit uncompressed BMP file")]
#[command(version)]
pub struct Cli {
    /// Blur (3x3 box average)
    #[arg(short = 'b', long)]
    pub blur: bool,

    /// Grayscale (mean of the three channels)
    #[arg(short = 'g', long)]
    pub grayscale: bool,

    /// Reflect left-right
    #[arg(short = 'r', long)]
    pub reflect: bool,

    /// Sepia tone
    #[arg(short = 's', long)]
    pub sepia: bool,

    /// Edge detection (Sobel operator)
    #[arg(short = 'e', long)]
    pub edges: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Input and output BMP files
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// The single selected filter.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FilterCount`] unless exactly one filter flag is set.
    pub fn mode(&self) -> Result<FilterMode, CliError> {
        let selected: Vec<FilterMode> = [
            (self.blur, FilterMode::Blur),
            (self.grayscale, FilterMode::Grayscale),
            (self.reflect, FilterMode::Reflect),
            (self.sepia, FilterMode::Sepia),
            (self.edges, FilterMode::Edges),
        ]
        .into_iter()
        .filter_map(|(set, mode)| set.then_some(mode))
        .collect();

        match selected.as_slice() {
            [mode] => Ok(*mode),
            _ => Err(CliError::FilterCount(selected.len())),
        }
    }

    /// The input and output paths.
    ///
    /// Checked after [`Cli::mode`], so a second filter is reported before a
    /// wrong number of files.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Usage`] unless exactly two files are given.
    pub fn paths(&self) -> Result<(&Path, &Path), CliError> {
        match self.files.as_slice() {
            [infile, outfile] => Ok((infile.as_path(), outfile.as_path())),
            files => Err(CliError::Usage(format!(
                "expected 2 files, got {}",
                files.len()
            ))),
        }
    }
}

/// Everything that can stop a run, one variant per exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--help` or `--version` was requested; carries the rendered text
    #[error("{0}")]
    Info(String),

    /// Unknown flag
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Zero or several filter flags
    #[error("Exactly one filter allowed, got {0}")]
    FilterCount(usize),

    /// Wrong positional arguments
    #[error("Usage: filter [flag] infile outfile ({0})")]
    Usage(String),

    /// Input file could not be opened or read
    #[error("Could not open {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Output file could not be created or written
    #[error("Could not create {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Input is not a 24-bit uncompressed BMP
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(#[source] IoError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Info(_) => EXIT_SUCCESS,
            CliError::InvalidFilter(_) => EXIT_INVALID_FILTER,
            CliError::FilterCount(_) => EXIT_FILTER_COUNT,
            CliError::Usage(_) => EXIT_USAGE,
            CliError::OpenInput { .. } => EXIT_OPEN_INPUT,
            CliError::CreateOutput { .. } => EXIT_CREATE_OUTPUT,
            CliError::UnsupportedFormat(_) => EXIT_UNSUPPORTED_FORMAT,
        }
    }

    fn from_clap(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Info(err.to_string()),
            ErrorKind::ArgumentConflict => CliError::FilterCount(2),
            ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) if arg.starts_with('-') => {
                    CliError::InvalidFilter(arg.clone())
                }
                Some(ContextValue::String(arg)) => {
                    CliError::Usage(format!("unexpected argument '{arg}'"))
                }
                _ => CliError::Usage(err.kind().to_string()),
            },
            kind => CliError::Usage(kind.to_string()),
        }
    }
}

/// Parse command-line arguments (including the program name).
pub fn parse<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(CliError::from_clap)
}

/// Run the selected filter from the input file to the output file.
///
/// The filter flags are checked before the file count. The input is opened
/// first, then the output is created, then the input is decoded and
/// validated. The filter only runs on a valid image.
pub fn execute(cli: &Cli) -> Result<FilterMode, CliError> {
    let mode = cli.mode()?;
    let (infile, outfile) = cli.paths()?;

    let input = File::open(infile).map_err(|source| CliError::OpenInput {
        path: infile.to_path_buf(),
        source: IoError::Io(source),
    })?;
    let output = File::create(outfile).map_err(|source| CliError::CreateOutput {
        path: outfile.to_path_buf(),
        source: IoError::Io(source),
    })?;

    let mut bitmap = read_bmp(BufReader::new(input)).map_err(|e| {
        if e.is_format_error() {
            CliError::UnsupportedFormat(e)
        } else {
            CliError::OpenInput {
                path: infile.to_path_buf(),
                source: e,
            }
        }
    })?;
    debug!(
        "{}: {}x{}",
        infile.display(),
        bitmap.width(),
        bitmap.height()
    );

    mode.apply(&mut bitmap.image);
    info!(
        "applied {} to {}x{} image",
        mode,
        bitmap.width(),
        bitmap.height()
    );

    let mut writer = BufWriter::new(output);
    write_bmp(&bitmap, &mut writer)
        .and_then(|()| writer.flush().map_err(IoError::Io))
        .map_err(|source| CliError::CreateOutput {
            path: outfile.to_path_buf(),
            source,
        })?;
    info!("wrote {}", outfile.display());

    Ok(mode)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A logger may already be installed when embedded; keep that one.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Entry point for the `filter` binary.
pub fn run() -> ExitCode {
    let result = parse(std::env::args_os()).and_then(|cli| {
        init_logging(cli.verbose);
        execute(&cli)
    });

    match result {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError::Info(text)) => {
            print!("{text}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_filter() {
        let cli = parse(["filter", "-b", "in.bmp", "out.bmp"]).unwrap();
        assert_eq!(cli.mode().unwrap(), FilterMode::Blur);
        let (infile, outfile) = cli.paths().unwrap();
        assert_eq!(infile, Path::new("in.bmp"));
        assert_eq!(outfile, Path::new("out.bmp"));

        let cli = parse(["filter", "--edges", "in.bmp", "out.bmp"]).unwrap();
        assert_eq!(cli.mode().unwrap(), FilterMode::Edges);
    }

    #[test]
    fn test_every_flag_selects_its_mode() {
        for mode in FilterMode::ALL {
            let flag = format!("-{}", mode.flag());
            let cli = parse(["filter", flag.as_str(), "a", "b"]).unwrap();
            assert_eq!(cli.mode().unwrap(), mode);
        }
    }

    #[test]
    fn test_no_filter() {
        let cli = parse(["filter", "in.bmp", "out.bmp"]).unwrap();
        let err = cli.mode().unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FILTER_COUNT);
    }

    #[test]
    fn test_two_filters() {
        let err = cli_error(["filter", "-b", "-g", "in.bmp", "out.bmp"]);
        assert_eq!(err, EXIT_FILTER_COUNT);
        let err = cli_error(["filter", "-bg", "in.bmp", "out.bmp"]);
        assert_eq!(err, EXIT_FILTER_COUNT);
    }

    #[test]
    fn test_filter_count_before_file_count() {
        assert_eq!(cli_error(["filter", "-b", "-g", "in.bmp"]), EXIT_FILTER_COUNT);
        assert_eq!(cli_error(["filter", "-r", "-s"]), EXIT_FILTER_COUNT);
        assert_eq!(cli_error(["filter", "-e", "-g", "a", "b", "c"]), EXIT_FILTER_COUNT);
    }

    #[test]
    fn test_invalid_filter() {
        let err = cli_error(["filter", "-x", "in.bmp", "out.bmp"]);
        assert_eq!(err, EXIT_INVALID_FILTER);
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(cli_error(["filter", "-b", "in.bmp"]), EXIT_USAGE);
        assert_eq!(cli_error(["filter", "-b"]), EXIT_USAGE);
        assert_eq!(cli_error(["filter", "-b", "a", "b", "c"]), EXIT_USAGE);
    }

    #[test]
    fn test_help_is_success() {
        let err = parse(["filter", "--help"]).unwrap_err();
        assert!(matches!(err, CliError::Info(_)));
        assert_eq!(err.exit_code(), EXIT_SUCCESS);
    }

    #[test]
    fn test_verbose_count() {
        let cli = parse(["filter", "-vv", "-s", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    fn cli_error<const N: usize>(args: [&str; N]) -> u8 {
        let checked = parse(args).and_then(|cli| {
            cli.mode()?;
            cli.paths().map(|_| ())
        });
        match checked {
            Ok(()) => panic!("expected an error for {:?}", args),
            Err(e) => e.exit_code(),
        }
    }
}
