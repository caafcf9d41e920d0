//! Correction statistics for reporting.
//!
//! Compares an original transcript with its corrected form and counts
//! how many occurrences of each Kazakh-only letter were rewritten,
//! plus a total changed-character figure. Consumed by the CLI after a
//! file is processed; the corrector itself never calls this.

/// Source-orthography letters whose disappearance we attribute to the
/// character rules (both cases).
const TRACKED_LETTERS: &[char] = &['ұ', 'Ұ', 'і', 'І', 'ү', 'Ү', 'қ', 'Қ'];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CorrectionStats {
    /// (source letter, number of occurrences rewritten).
    pub rewritten: Vec<(char, usize)>,
    /// Total number of changed characters.
    pub chars_changed: usize,
}

impl CorrectionStats {
    pub fn total_rewritten(&self) -> usize {
        self.rewritten.iter().map(|&(_, n)| n).sum()
    }
}

/// Count character-level substitutions between an original text and
/// its corrected form.
///
/// Per-letter counts are occurrence deltas (a letter present in the
/// original but absent from the corrected text was rewritten). The
/// changed-character total is positional when both strings have the
/// same character length; otherwise it is the per-letter sum plus the
/// length difference.
pub fn analyze(original: &str, corrected: &str) -> CorrectionStats {
    let rewritten: Vec<(char, usize)> = TRACKED_LETTERS
        .iter()
        .map(|&letter| {
            let before = count_char(original, letter);
            let after = count_char(corrected, letter);
            (letter, before.saturating_sub(after))
        })
        .filter(|&(_, n)| n > 0)
        .collect();

    let original_len = original.chars().count();
    let corrected_len = corrected.chars().count();
    let chars_changed = if original_len == corrected_len {
        original
            .chars()
            .zip(corrected.chars())
            .filter(|(a, b)| a != b)
            .count()
    } else {
        rewritten.iter().map(|&(_, n)| n).sum::<usize>()
            + original_len.abs_diff(corrected_len)
    };

    CorrectionStats {
        rewritten,
        chars_changed,
    }
}

fn count_char(text: &str, letter: char) -> usize {
    text.chars().filter(|&c| c == letter).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_report_no_changes() {
        let stats = analyze("был ҡала", "был ҡала");
        assert_eq!(stats, CorrectionStats::default());
    }

    #[test]
    fn per_letter_counts_track_rewrites() {
        // ұ → у and both қ rewritten, same character length.
        let stats = analyze("бұл қалақ", "был ҡалаҡ");
        assert_eq!(stats.rewritten, vec![('ұ', 1), ('қ', 2)]);
        assert_eq!(stats.total_rewritten(), 3);
        assert_eq!(stats.chars_changed, 3);
    }

    #[test]
    fn length_change_is_reflected_in_total() {
        // A dictionary replacement that shortens the text.
        let stats = analyze("үйренемін", "өйрәнәм");
        assert_eq!(stats.rewritten, vec![('і', 1), ('ү', 1)]);
        assert_eq!(stats.chars_changed, 2 + 2);
    }
}
