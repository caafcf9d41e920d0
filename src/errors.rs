#![allow(dead_code)]

use thiserror::Error;

// ── Input errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Cannot open input file: {path}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file is not valid UTF-8: {path}")]
    NotUtf8 { path: String },

    #[error("Not a file or directory: {0}")]
    NotFound(String),

    #[error("No .txt files found in directory: {0}")]
    NoTextFiles(String),
}

// ── Transliteration errors ───────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("Unsupported language code: {0} (expected ba, kk, or ky)")]
    UnsupportedLanguage(String),
}

// ── Output errors ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot create output file: {path}")]
    FileCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    WriteFailed(String),
}

// ── Exit codes ───────────────────────────────────────────────────────

pub struct ExitCode;

impl ExitCode {
    pub const SUCCESS: i32 = 0;

    // Input errors (10)
    pub const INPUT: i32 = 10;

    // Transliteration errors (30)
    pub const TRANSLIT: i32 = 30;

    // Output errors (40)
    pub const OUTPUT_WRITE: i32 = 40;

    // Unknown (99)
    pub const UNKNOWN: i32 = 99;

    /// Walk the anyhow error chain and return the appropriate exit code.
    pub fn from_error(err: &anyhow::Error) -> i32 {
        for cause in err.chain() {
            if cause.downcast_ref::<InputError>().is_some() {
                return Self::INPUT;
            }
            if cause.downcast_ref::<TranslitError>().is_some() {
                return Self::TRANSLIT;
            }
            if cause.downcast_ref::<OutputError>().is_some() {
                return Self::OUTPUT_WRITE;
            }
        }
        Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_the_error_chain() {
        let err = anyhow::Error::new(InputError::NotFound("x.txt".into()))
            .context("while processing");
        assert_eq!(ExitCode::from_error(&err), ExitCode::INPUT);

        let err = anyhow::Error::new(TranslitError::UnsupportedLanguage("tr".into()));
        assert_eq!(ExitCode::from_error(&err), ExitCode::TRANSLIT);

        let err = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::from_error(&err), ExitCode::UNKNOWN);
    }
}
