mod corrector;
mod diff;
mod errors;
mod logging;
mod process;
mod tables;
mod translit;
mod wordlist;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

use corrector::Corrector;
use errors::{ExitCode, InputError};
use logging::Verbosity;

/// Correct Kazakh-orthography transcripts to Bashkir orthography.
#[derive(Parser)]
#[command(name = "corrector", version, about)]
struct Cli {
    /// Path to a transcript file or a directory of .txt files
    /// (opens file picker if omitted)
    input: Option<PathBuf>,

    /// Correct a literal text string and print it to stdout
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Transliterate --text from Latin script first (language code:
    /// ba, kk, or ky)
    #[arg(long, value_name = "CODE", requires = "text")]
    from_latin: Option<String>,

    /// Output file path (single-file mode only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Apply aggressive corrections (reserved)
    #[arg(long)]
    aggressive: bool,

    /// Strip timestamp/pipe artifacts from segment-dump transcripts
    #[arg(long)]
    clean_artifacts: bool,

    /// Correct each line independently (per-segment transcripts)
    #[arg(long)]
    lines: bool,

    /// Directory with preserve-word list files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose (debug) console output
    #[arg(long)]
    verbose: bool,

    /// Suppress all console output except errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,

    /// Custom log file path (default: bashkir-corrector/logs/ under
    /// the platform cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Keeps the file writer alive until the very end of main.
    let _log_guard = logging::init(cli.verbosity(), cli.log_file.as_deref());
    debug!(version = env!("CARGO_PKG_VERSION"), os = std::env::consts::OS, "Starting");

    // Launched by double-click: keep the console window open at the
    // end so the result is readable.
    let interactive = std::env::args().len() == 1;

    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err}");
            ExitCode::from_error(&err)
        }
    };

    if interactive {
        println!();
        println!("Press Enter to close...");
        let _ = std::io::stdin().read_line(&mut String::new());
    }

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let corrector = match &cli.data_dir {
        Some(dir) => Corrector::with_data_dir(dir),
        None => Corrector::new(),
    };

    // Inline text mode: correct and print, no files involved.
    if let Some(text) = &cli.text {
        let text = match &cli.from_latin {
            Some(code) => {
                let language = translit::Language::from_code(code)?;
                debug!(language = language.code(), "Transliterating from Latin");
                translit::latin_to_cyrillic(text, language)
            }
            None => text.clone(),
        };
        println!("{}", corrector.correct(&text, cli.aggressive));
        return Ok(());
    }

    let input_path = match resolve_input(cli.input)? {
        Some(path) => path,
        None => {
            info!("No file selected.");
            return Ok(());
        }
    };

    let options = process::Options {
        aggressive: cli.aggressive,
        clean_artifacts: cli.clean_artifacts,
        per_line: cli.lines,
    };

    if input_path.is_dir() {
        process::run_dir(&corrector, &input_path, &options)
    } else {
        process::run_file(&corrector, &input_path, cli.output.as_deref(), &options)
    }
}

/// Take the path given on the command line, or ask for one with the
/// native file picker, then canonicalize it. `Ok(None)` means the
/// picker was cancelled.
fn resolve_input(arg: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let chosen = match arg {
        Some(path) => path,
        None => {
            let picked = rfd::FileDialog::new()
                .set_title("Transcript to correct")
                .add_filter("Transcripts", &["txt"])
                .add_filter("All files", &["*"])
                .pick_file();
            match picked {
                Some(path) => path,
                None => return Ok(None),
            }
        }
    };

    let resolved = chosen
        .canonicalize()
        .map_err(|_| InputError::NotFound(chosen.display().to_string()))?;
    Ok(Some(resolved))
}
