//! Kazakh→Bashkir orthography correction.
//!
//! Post-processes Whisper transcriptions that come back in Kazakh
//! orthography when the audio is actually Bashkir. The pipeline is a
//! fixed sequence of pure text transformations over immutable tables:
//! normalize → dictionary → characters → grammar → proper nouns →
//! sentence capitalization → final formatting. Construction loads the
//! tables once; every `correct` call is independent and side-effect
//! free, so a single `Corrector` is safe to share across threads.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::tables;
use crate::wordlist;

pub struct Corrector {
    word_dict: HashMap<&'static str, &'static str>,
    char_map: HashMap<char, char>,
    preserve_q: HashSet<String>,
    preserve_i: HashSet<String>,
    preserve_e: HashSet<String>,
}

impl Corrector {
    /// Build a corrector with the bundled tables and the default
    /// preserve-word sets.
    pub fn new() -> Self {
        Self::from_preserve_sets(
            wordlist::defaults(tables::DEFAULT_PRESERVE_Q),
            wordlist::defaults(tables::DEFAULT_PRESERVE_I),
            wordlist::defaults(tables::DEFAULT_PRESERVE_E),
        )
    }

    /// Build a corrector whose preserve-word sets are loaded from
    /// word-list files under `data_dir`. A missing or unreadable list
    /// falls back to the built-in default for that set; loading never
    /// fails.
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self::from_preserve_sets(
            wordlist::load_word_set(
                &data_dir.join("preserve_q_words.txt"),
                tables::DEFAULT_PRESERVE_Q,
            ),
            wordlist::load_word_set(
                &data_dir.join("preserve_i_words.txt"),
                tables::DEFAULT_PRESERVE_I,
            ),
            wordlist::load_word_set(
                &data_dir.join("preserve_e_words.txt"),
                tables::DEFAULT_PRESERVE_E,
            ),
        )
    }

    fn from_preserve_sets(
        preserve_q: HashSet<String>,
        preserve_i: HashSet<String>,
        preserve_e: HashSet<String>,
    ) -> Self {
        Self {
            word_dict: tables::WORD_PAIRS.iter().copied().collect(),
            char_map: tables::CHAR_PAIRS.iter().copied().collect(),
            preserve_q,
            preserve_i,
            preserve_e,
        }
    }

    /// Correct Kazakh orthography to Bashkir.
    ///
    /// Total over all inputs: never fails, never touches I/O.
    /// Empty or whitespace-only input yields an empty string.
    /// `aggressive` is accepted for API stability but is a reserved
    /// toggle; it does not change stage selection.
    pub fn correct(&self, text: &str, aggressive: bool) -> String {
        let _ = aggressive; // reserved
        if text.trim().is_empty() {
            return String::new();
        }

        let result = self.normalize(text);
        let result = self.apply_dictionary(&result);
        let result = self.substitute_chars(&result);
        let result = self.apply_grammar(&result);
        let result = self.capitalize_proper_nouns(&result);
        let result = self.capitalize_sentences(&result);
        self.finalize_formatting(&result)
    }

    /// Correct each text independently, preserving order.
    pub fn correct_batch(&self, texts: &[String], aggressive: bool) -> Vec<String> {
        texts
            .iter()
            .map(|text| self.correct(text, aggressive))
            .collect()
    }

    // ── Stage 1: normalization ──────────────────────────────────────

    /// NFC-normalize, collapse whitespace, fix spacing around
    /// punctuation, and strip bracketed non-speech annotations like
    /// `[музыка]` or `(шум)`.
    fn normalize(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        let text = tables::WHITESPACE_RUN.replace_all(&text, " ");
        let text = tables::SPACE_BEFORE_PUNCT.replace_all(&text, "${1}");
        let text = tables::MISSING_SPACE_AFTER_PUNCT.replace_all(&text, "${1} ${2}");
        let text = tables::BRACKET_ANNOTATION.replace_all(&text, "");
        let text = tables::PAREN_ANNOTATION.replace_all(&text, "");
        text.trim().to_string()
    }

    // ── Stage 2: word dictionary ────────────────────────────────────

    fn apply_dictionary(&self, text: &str) -> String {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|token| self.replace_word(token))
            .collect();
        words.join(" ")
    }

    fn replace_word(&self, token: &str) -> String {
        let (prefix, core, suffix) = self.split_punctuation(token);
        let lower = core.to_lowercase();

        let replaced = match self.word_dict.get(lower.as_str()) {
            Some(&replacement) => {
                if is_title_case(core) {
                    capitalize_first(replacement)
                } else if is_upper_case(core) {
                    replacement.to_uppercase()
                } else {
                    replacement.to_string()
                }
            }
            None => core.to_string(),
        };

        format!("{prefix}{replaced}{suffix}")
    }

    /// Split a token into a leading-punctuation prefix, the core word,
    /// and a trailing-punctuation suffix. A character counts as
    /// punctuation when it is neither alphanumeric nor present in the
    /// character map.
    fn split_punctuation<'a>(&self, token: &'a str) -> (&'a str, &'a str, &'a str) {
        let is_word_char = |c: char| c.is_alphanumeric() || self.char_map.contains_key(&c);

        let core_start = token
            .char_indices()
            .find(|&(_, c)| is_word_char(c))
            .map(|(i, _)| i)
            .unwrap_or(token.len());
        let rest = &token[core_start..];
        let core_end = core_start
            + rest
                .char_indices()
                .rev()
                .find(|&(_, c)| is_word_char(c))
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);

        (&token[..core_start], &token[core_start..core_end], &token[core_end..])
    }

    // ── Stage 3: character substitution ─────────────────────────────

    fn substitute_chars(&self, text: &str) -> String {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|token| self.substitute_token_chars(token))
            .collect();
        words.join(" ")
    }

    fn substitute_token_chars(&self, token: &str) -> String {
        let (_, core, _) = self.split_punctuation(token);
        let keep_i = self.preserve_i.contains(core);
        let keep_q = self.preserve_q.contains(core);

        // Simultaneous single-character substitution: every character
        // is mapped against the original snapshot, so a replacement is
        // never re-replaced.
        let mapped: String = token
            .chars()
            .map(|c| {
                if keep_i && (c == 'і' || c == 'І') {
                    c
                } else {
                    *self.char_map.get(&c).unwrap_or(&c)
                }
            })
            .collect();

        if keep_q {
            return mapped;
        }

        // Three ordered context passes; each scans the previous
        // pass's output, so a letter rewritten early is not
        // reconsidered later.
        let text = tables::Q_BOUNDARY_LOWER.replace_all(&mapped, "${1}ҡ");
        let text = tables::Q_BOUNDARY_UPPER.replace_all(&text, "${1}Ҡ");
        let text = tables::Q_INTERVOCALIC_LOWER.replace_all(&text, "${1}х${2}");
        let text = tables::Q_INTERVOCALIC_UPPER.replace_all(&text, "${1}Х${2}");
        let text = tables::Q_FINAL_LOWER.replace_all(&text, "ҡ");
        let text = tables::Q_FINAL_UPPER.replace_all(&text, "Ҡ");
        text.into_owned()
    }

    // ── Stage 4: grammar endings and vowel harmony ──────────────────

    /// Suffix rewrites in table order, then the harmony repair pass.
    /// All rules are word-ending-anchored, so applying them per token
    /// is equivalent to sequential passes over the whole text.
    fn apply_grammar(&self, text: &str) -> String {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                let (_, core, _) = self.split_punctuation(token);
                if self.preserve_e.contains(core) {
                    return token.to_string();
                }
                let mut result = token.to_string();
                for (pattern, replacement) in tables::GRAMMAR_PATTERNS.iter() {
                    result = pattern.replace_all(&result, *replacement).into_owned();
                }
                self.fix_vowel_harmony(&result)
            })
            .collect();
        words.join(" ")
    }

    /// Repair disharmonic endings the context-free suffix rules can
    /// produce: the ending must agree in backness with the vowel
    /// immediately preceding it.
    fn fix_vowel_harmony(&self, word: &str) -> String {
        let mut result = word.to_string();
        for (pattern, replacement) in tables::HARMONY_BACK_PATTERNS.iter() {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
        for (pattern, replacement) in tables::HARMONY_FRONT_PATTERNS.iter() {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
        result
    }

    // ── Stage 5: proper nouns ───────────────────────────────────────

    fn capitalize_proper_nouns(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (pattern, fixed) in tables::PROPER_NOUN_PATTERNS.iter() {
            result = pattern.replace_all(&result, *fixed).into_owned();
        }
        result
    }

    // ── Stage 6: sentence capitalization ────────────────────────────

    /// Uppercase the first character of every sentence, leaving the
    /// rest untouched. Sentences are delimited by runs of `.!?` plus
    /// any following whitespace.
    fn capitalize_sentences(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for boundary in tables::SENTENCE_BOUNDARY.find_iter(text) {
            result.push_str(&capitalize_first(&text[last..boundary.start()]));
            result.push_str(boundary.as_str());
            last = boundary.end();
        }
        result.push_str(&capitalize_first(&text[last..]));
        result
    }

    // ── Stage 7: final formatting ───────────────────────────────────

    fn finalize_formatting(&self, text: &str) -> String {
        // Collapse repeats before spacing so the marks are still
        // adjacent when the collapse runs.
        let text = tables::REPEATED_TERMINAL_PUNCT.replace_all(text, "${1}");
        let text = tables::PUNCT_SPACING.replace_all(&text, "${1} ");
        let text = tables::WHITESPACE_RUN.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new()
    }
}

// ── Casing helpers ──────────────────────────────────────────────────

/// First character uppercase, no other uppercase characters.
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && !chars.any(|c| c.is_uppercase()),
        None => false,
    }
}

/// At least one letter and no lowercase letters.
fn is_upper_case(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(|c| c.is_lowercase())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> Corrector {
        Corrector::new()
    }

    #[test]
    fn empty_and_whitespace_inputs_yield_empty_output() {
        let c = corrector();
        assert_eq!(c.correct("", false), "");
        assert_eq!(c.correct("   ", false), "");
        assert_eq!(c.correct("\n\t ", false), "");
    }

    #[test]
    fn dictionary_preserves_casing_class() {
        let c = corrector();
        assert_eq!(c.correct("бұл", false), "Был"); // sentence capitalization
        assert_eq!(c.correct("Бұл бұл", false), "Был был");
        // All-caps input is not a literal dictionary key but must
        // still map through the lowercase entry.
        assert_eq!(c.correct("БҰЛ", false), "БЫЛ");
    }

    #[test]
    fn boundary_and_intervocalic_q_diverge_in_one_word() {
        let c = corrector();
        // Initial қ → uvular ҡ, intervocalic қ → aspirate х.
        assert_eq!(c.correct("қақа", false), "Ҡаха");
    }

    #[test]
    fn word_final_q_becomes_uvular() {
        let c = corrector();
        assert_eq!(c.correct("сақ", false), "Саҡ");
    }

    #[test]
    fn q_after_consonant_becomes_uvular() {
        let c = corrector();
        assert_eq!(c.correct("башқорт", false), "Башҡорт");
    }

    #[test]
    fn q_after_uppercase_consonant_is_also_rewritten() {
        let c = corrector();
        // The consonant class carries both cases, so all-caps words
        // get the same boundary rewrite as lowercase ones.
        assert_eq!(c.correct("БАШҚОРТ", false), "БАШҠОРТ");
    }

    #[test]
    fn dative_ending_keeps_front_harmony_after_neutral_stem() {
        let c = corrector();
        // ү → ө, then ге → гә; й carries no backness so the ending stands.
        assert_eq!(c.correct("үйге", false), "Өйгә");
    }

    #[test]
    fn back_stem_pulls_front_ending_back() {
        let c = corrector();
        // ге → гә by the suffix rule, then а…гә is disharmonic → га.
        assert_eq!(c.correct("ағаге", false), "Ағага");
    }

    #[test]
    fn front_stem_pulls_back_ending_forward() {
        let c = corrector();
        // тан survives the suffix rules, then и…тан → тән.
        assert_eq!(c.correct("әнитан", false), "Әнитән");
    }

    #[test]
    fn locative_ending_is_voiced() {
        let c = corrector();
        assert_eq!(c.correct("далада", false), "Далаҙа");
    }

    #[test]
    fn sentence_capitalization_handles_mixed_terminators() {
        let c = corrector();
        assert_eq!(c.correct("бер. һары! өс? туғыҙ", false), "Бер. Һары! Өс? Туғыҙ");
    }

    #[test]
    fn normalization_strips_annotations_and_fixes_spacing() {
        let c = corrector();
        assert_eq!(c.correct("[музыка] сәләм,дуҫ", false), "Сәләм, дуҫ");
        assert_eq!(c.correct("сәләм   (шум)  дуҫ", false), "Сәләм дуҫ");
    }

    #[test]
    fn repeated_terminal_punctuation_collapses() {
        let c = corrector();
        assert_eq!(c.correct("жоқ!!!", false), "Юҡ!");
    }

    #[test]
    fn proper_nouns_are_recapitalized_anywhere_in_the_sentence() {
        let c = corrector();
        assert_eq!(c.correct("ол татар һәм башқорт", false), "Ул Татар һәм Башҡорт");
    }

    #[test]
    fn preserve_sets_exempt_listed_words() {
        let c = corrector();
        // бірге is in the і preserve set: і survives, but the
        // dative suffix rule still applies.
        assert_eq!(c.correct("бірге", false), "Біргә");
        // қашмау is in the қ preserve set: no қ rewrite at all.
        assert_eq!(c.correct("қашмау", false), "Қашмау");
        // An unlisted word with the same shape is rewritten.
        assert_eq!(c.correct("қашу", false), "Ҡашу");
    }

    #[test]
    fn full_pipeline_regression_fixture() {
        let c = corrector();
        let input =
            "Менің атым Айдар. Мен қазақпын, бірақ башқорт тілін үйренемін. Бұл қиын ма? Жоқ, қызықты!";
        let expected =
            "Миниң атым Айдар. Мин ҡазаҡмын, бәраҡ Башҡорт телен өйрәнәм. Был ҡиын мы? Юҡ, ҡызыҡты!";
        assert_eq!(c.correct(input, false), expected);
    }

    #[test]
    fn correcting_corrected_text_is_stable() {
        let c = corrector();
        let input =
            "Менің атым Айдар. Мен қазақпын, бірақ башқорт тілін үйренемін. Бұл қиын ма? Жоқ, қызықты!";
        let once = c.correct(input, false);
        assert_eq!(c.correct(&once, false), once);
    }

    #[test]
    fn aggressive_flag_is_a_reserved_no_op() {
        let c = corrector();
        let input = "Мен қазақпын, бірақ башқорт тілін үйренемін.";
        assert_eq!(c.correct(input, true), c.correct(input, false));
    }

    #[test]
    fn batch_matches_element_wise_correction() {
        let c = corrector();
        let texts = vec![
            "Бұл қиын ма?".to_string(),
            "Жоқ, қызықты!".to_string(),
            String::new(),
        ];
        let batch = c.correct_batch(&texts, false);
        let individual: Vec<String> =
            texts.iter().map(|t| c.correct(t, false)).collect();
        assert_eq!(batch, individual);
        assert_eq!(batch.len(), texts.len());
    }
}
