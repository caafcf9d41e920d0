//! Preserve-word set loading.
//!
//! The three lexical exception lists are plain UTF-8 files, one word
//! per line. Loading is best-effort: any failure (missing file, read
//! error, empty list) falls back to the built-in defaults with a
//! warning. A broken word list must never stop the corrector.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

/// Materialize a built-in default list as an owned set.
pub fn defaults(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Load a word list from `path`, falling back to `default_words` on
/// any error. Blank lines and `#` comments are skipped.
pub fn load_word_set(path: &Path, default_words: &[&str]) -> HashSet<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let words: HashSet<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect();
            if words.is_empty() {
                warn!(path = %path.display(), "Word list is empty — using built-in defaults");
                defaults(default_words)
            } else {
                debug!(path = %path.display(), count = words.len(), "Word list loaded");
                words
            }
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Could not load word list — using built-in defaults"
            );
            defaults(default_words)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEFAULTS: &[&str] = &["бірге", "Бірге"];

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let set = load_word_set(Path::new("/nonexistent/preserve_q_words.txt"), DEFAULTS);
        assert_eq!(set, defaults(DEFAULTS));
    }

    #[test]
    fn file_contents_replace_defaults() {
        let path = std::env::temp_dir().join("corrector_wordlist_load_test.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# comment").unwrap();
        writeln!(f, "мінен").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "  әлікле  ").unwrap();
        drop(f);

        let set = load_word_set(&path, DEFAULTS);
        std::fs::remove_file(&path).ok();

        assert_eq!(set.len(), 2);
        assert!(set.contains("мінен"));
        assert!(set.contains("әлікле"));
        assert!(!set.contains("бірге"));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("corrector_wordlist_empty_test.txt");
        std::fs::write(&path, "# only a comment\n\n").unwrap();

        let set = load_word_set(&path, DEFAULTS);
        std::fs::remove_file(&path).ok();

        assert_eq!(set, defaults(DEFAULTS));
    }
}
