//! File-level correction pipeline.
//!
//! Reads transcript text, optionally strips transcription artifacts
//! (timestamp/pipe prefixes from segment dumps), runs the corrector,
//! writes the corrected file, and logs substitution statistics.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error, info, info_span};

use crate::corrector::Corrector;
use crate::diff;
use crate::errors::{InputError, OutputError};

lazy_static! {
    /// Lines consisting only of digits, punctuation, and brackets —
    /// timestamp rows in segment dumps, not speech.
    static ref NON_SPEECH_LINE: Regex = Regex::new(r"^[\d\s,\.\-\(\)\[\]:]+$").unwrap();
}

/// Correction options shared by the single-file and directory modes.
#[derive(Default)]
pub struct Options {
    pub aggressive: bool,
    pub clean_artifacts: bool,
    /// Correct each line independently instead of the whole text.
    pub per_line: bool,
}

/// Correct a single transcript file and write the result.
#[tracing::instrument(skip_all, fields(input = %input_path.display()))]
pub fn run_file(
    corrector: &Corrector,
    input_path: &Path,
    output_path: Option<&Path>,
    options: &Options,
) -> Result<()> {
    let t0 = Instant::now();

    let original = read_input(input_path)?;
    debug!(chars = original.chars().count(), "Input read");

    let text = if options.clean_artifacts {
        clean_transcript_artifacts(&original)
    } else {
        original.clone()
    };

    let corrected = {
        let _span = info_span!("correct").entered();
        if options.per_line {
            // Per-segment transcripts: each line is corrected on its
            // own so segment boundaries survive.
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            corrector.correct_batch(&lines, options.aggressive).join("\n")
        } else {
            corrector.correct(&text, options.aggressive)
        }
    };

    let output_path = match output_path {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input_path),
    };
    write_output(&output_path, &corrected)?;

    let stats = diff::analyze(&original, &corrected);
    info!(
        output = %output_path.display(),
        chars_changed = stats.chars_changed,
        letters_rewritten = stats.total_rewritten(),
        letter_breakdown = %format_rewritten(&stats),
        elapsed_secs = format!("{:.2}", t0.elapsed().as_secs_f64()),
        "File corrected"
    );

    Ok(())
}

/// Correct every `.txt` file in a directory. A failure on one file is
/// logged and does not stop the remaining files.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn run_dir(corrector: &Corrector, dir: &Path, options: &Options) -> Result<()> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| InputError::FileOpen {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension().and_then(|e| e.to_str()) == Some("txt")
                && !p
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s.ends_with("_corrected"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!(InputError::NoTextFiles(dir.display().to_string()));
    }

    info!(count = files.len(), "Processing directory");

    let mut failures = 0u32;
    for file in &files {
        if let Err(err) = run_file(corrector, file, None, options) {
            error!(file = %file.display(), "Failed: {err:#}");
            failures += 1;
        }
    }

    info!(
        processed = files.len() as u32 - failures,
        failed = failures,
        "Directory complete"
    );

    Ok(())
}

/// Strip timestamp/pipe artifacts left by segment-dump transcripts:
/// keep only the text after the last `|` on each line, drop blank
/// lines and lines that carry no speech.
pub fn clean_transcript_artifacts(text: &str) -> String {
    let cleaned: Vec<&str> = text
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let line = match line.rsplit_once('|') {
                Some((_, tail)) => tail.trim(),
                None => line,
            };
            if line.is_empty() || NON_SPEECH_LINE.is_match(line) {
                None
            } else {
                Some(line)
            }
        })
        .collect();
    cleaned.join("\n")
}

/// `<stem>_corrected.txt` next to the input file.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}_corrected.txt", stem.to_string_lossy()))
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| InputError::FileOpen {
        path: path.display().to_string(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|_| {
        InputError::NotUtf8 {
            path: path.display().to_string(),
        }
        .into()
    })
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    use std::io::Write;

    let mut f = std::fs::File::create(path).map_err(|e| OutputError::FileCreate {
        path: path.display().to_string(),
        source: e,
    })?;
    f.write_all(text.as_bytes())
        .and_then(|_| f.write_all(b"\n"))
        .map_err(|e| OutputError::WriteFailed(e.to_string()))?;

    Ok(())
}

fn format_rewritten(stats: &diff::CorrectionStats) -> String {
    if stats.rewritten.is_empty() {
        return "none".to_string();
    }
    stats
        .rewritten
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_cleaning_keeps_text_after_last_pipe() {
        let input = "0.00 | 4.20 | сәләм дуҫтар\n12,5 - 14,0\n\n8.40 | 12.00 | һаумыһығыҙ";
        assert_eq!(
            clean_transcript_artifacts(input),
            "сәләм дуҫтар\nһаумыһығыҙ"
        );
    }

    #[test]
    fn artifact_cleaning_passes_plain_text_through() {
        let input = "сәләм дуҫтар\nһаумыһығыҙ";
        assert_eq!(clean_transcript_artifacts(input), input);
    }

    #[test]
    fn default_output_path_uses_corrected_suffix() {
        assert_eq!(
            default_output_path(Path::new("/tmp/clip.txt")),
            PathBuf::from("/tmp/clip_corrected.txt")
        );
    }

    #[test]
    fn file_roundtrip_writes_corrected_output() {
        let dir = std::env::temp_dir();
        let input = dir.join("corrector_process_test.txt");
        let output = dir.join("corrector_process_test_out.txt");
        std::fs::write(&input, "жоқ, қызықты!").unwrap();

        let corrector = Corrector::new();
        run_file(&corrector, &input, Some(&output), &Options::default()).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.trim_end(), "Юҡ, ҡызыҡты!");

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn per_line_mode_keeps_segment_boundaries() {
        let dir = std::env::temp_dir();
        let input = dir.join("corrector_process_lines_test.txt");
        let output = dir.join("corrector_process_lines_test_out.txt");
        std::fs::write(&input, "бұл қиын ма\nжоқ, қызықты").unwrap();

        let corrector = Corrector::new();
        let options = Options {
            per_line: true,
            ..Options::default()
        };
        run_file(&corrector, &input, Some(&output), &options).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.trim_end(), "Был ҡиын мы\nЮҡ, ҡызыҡты");

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }
}
