//! Static knowledge base for the Kazakh→Bashkir corrector.
//!
//! Word dictionary, character map, suffix rewrite rules, vowel-harmony
//! repair patterns, proper-noun forms, and the default preserve-word
//! sets. Everything here is immutable; pattern tables are compiled
//! once at first use.

use lazy_static::lazy_static;
use regex::Regex;

// ── Word dictionary ─────────────────────────────────────────────────

/// Whole-word replacements (Kazakh → Bashkir). Lowercase and
/// title-case forms are stored as distinct entries; lookup is by
/// lowercased token and the original token's casing class is
/// re-applied to the replacement.
pub const WORD_PAIRS: &[(&str, &str)] = &[
    // Pronouns and common words
    ("бұл", "был"), ("Бұл", "Был"),
    ("осы", "был"), ("Осы", "Был"),
    ("мен", "мин"), ("Мен", "Мин"),
    ("менің", "миниң"), ("Менің", "Миниң"),
    ("сен", "һин"), ("Сен", "Һин"),
    ("сенің", "һинең"), ("Сенің", "Һинең"),
    ("ол", "ул"), ("Ол", "Ул"),
    ("оның", "уның"), ("Оның", "Уның"),
    ("біз", "беҙ"), ("Біз", "Беҙ"),
    ("біздің", "беҙҙең"), ("Біздің", "Беҙҙең"),
    ("сіз", "һеҙ"), ("Сіз", "Һеҙ"),
    ("сіздің", "һеҙҙең"), ("Сіздің", "Һеҙҙең"),
    ("олар", "улар"), ("Олар", "Улар"),
    ("олардың", "уларҙың"), ("Олардың", "Уларҙың"),
    // Question words and particles
    ("немау", "нимау"), ("Немау", "Нимау"),
    ("немене", "нимә"), ("Немене", "Нимә"),
    ("қалай", "ҡалай"), ("Қалай", "Ҡалай"),
    ("қайда", "ҡайҙа"), ("Қайда", "Ҡайҙа"),
    ("қашан", "ҡасан"), ("Қашан", "Ҡасан"),
    ("неге", "ниңә"), ("Неге", "Ниңә"),
    ("не", "нәмә"), ("Не", "Нәмә"),
    ("ма", "мы"), ("Ма", "Мы"),
    // Conjunctions
    ("бірақ", "бәраҡ"), ("Бірақ", "Бәраҡ"),
    // Common verbs
    ("болды", "булды"), ("Болды", "Булды"),
    ("болады", "була"), ("Болады", "Була"),
    ("етеді", "итә"), ("Етеді", "Итә"),
    ("керек", "кәрәк"), ("Керек", "Кәрәк"),
    ("бар", "бар"), ("Бар", "Бар"),
    ("жоқ", "юҡ"), ("Жоқ", "Юҡ"),
    ("деді", "әйтте"), ("Деді", "Әйтте"),
    ("деп", "тип"), ("Деп", "Тип"),
    ("үйренемін", "өйрәнәм"), ("Үйренемін", "Өйрәнәм"),
    ("қазақпын", "ҡазаҡмын"), ("Қазақпын", "Ҡазаҡмын"),
    // Common nouns and adjectives
    ("адам", "кеше"), ("Адам", "Кеше"),
    ("өмір", "ғүмер"), ("Өмір", "Ғүмер"),
    ("қала", "ҡала"), ("Қала", "Ҡала"),
    ("ауыл", "ауыл"), ("Ауыл", "Ауыл"),
    ("тіл", "тел"), ("Тіл", "Тел"),
    ("сөз", "һүҙ"), ("Сөз", "Һүҙ"),
    ("үй", "өй"), ("Үй", "Өй"),
    ("кітап", "китап"), ("Кітап", "Китап"),
    ("бала", "бала"), ("Бала", "Бала"),
    ("қыз", "ҡыҙ"), ("Қыз", "Ҡыҙ"),
    ("қызықты", "ҡызыҡты"), ("Қызықты", "Ҡызыҡты"),
];

// ── Character map ───────────────────────────────────────────────────

/// Single-character replacements, applied as one simultaneous pass.
/// Identity entries mark letters shared by both orthographies; they
/// also make those letters count as word characters when stripping
/// punctuation around tokens.
pub const CHAR_PAIRS: &[(char, char)] = &[
    ('ұ', 'у'), ('Ұ', 'У'), // Kazakh ұ → Bashkir у
    ('ү', 'ө'), ('Ү', 'Ө'), // Kazakh ү → Bashkir ө
    ('і', 'е'), ('І', 'Е'), // Kazakh і → Bashkir е
    ('ә', 'ә'), ('Ә', 'Ә'), // same in both
    ('ө', 'ө'), ('Ө', 'Ө'), // same in both
    ('ғ', 'ғ'), ('Ғ', 'Ғ'),
    ('ң', 'ң'), ('Ң', 'Ң'),
    ('һ', 'һ'), ('Һ', 'Һ'),
];

// ── Context-sensitive қ rules ───────────────────────────────────────
//
// Three sequential passes, each scanning the previous pass's output:
// word boundary / after consonant → ҡ, between vowels → х, then any
// remaining word-final қ → ҡ.

const CONSONANTS_LOWER: &str = "бвгджзйлмнпрстфхцчшщң";
const CONSONANTS_UPPER: &str = "БВГДЖЗЙЛМНПРСТФХЦЧШЩҢ";
const VOWELS_LOWER: &str = "аәоөуүыиеэ";
const VOWELS_UPPER: &str = "АӘОӨУҮЫИЕЭ";

lazy_static! {
    pub static ref Q_BOUNDARY_LOWER: Regex =
        Regex::new(&format!(r"(\b|[{CONSONANTS_LOWER}{CONSONANTS_UPPER}])қ")).unwrap();
    pub static ref Q_BOUNDARY_UPPER: Regex =
        Regex::new(&format!(r"(\b|[{CONSONANTS_LOWER}{CONSONANTS_UPPER}])Қ")).unwrap();
    pub static ref Q_INTERVOCALIC_LOWER: Regex =
        Regex::new(&format!(r"([{VOWELS_LOWER}{VOWELS_UPPER}])қ([{VOWELS_LOWER}{VOWELS_UPPER}])")).unwrap();
    pub static ref Q_INTERVOCALIC_UPPER: Regex =
        Regex::new(&format!(r"([{VOWELS_LOWER}{VOWELS_UPPER}])Қ([{VOWELS_LOWER}{VOWELS_UPPER}])")).unwrap();
    pub static ref Q_FINAL_LOWER: Regex = Regex::new(r"қ\b").unwrap();
    pub static ref Q_FINAL_UPPER: Regex = Regex::new(r"Қ\b").unwrap();
}

// ── Grammar suffix rules ────────────────────────────────────────────

/// Word-ending rewrites, applied in table order; each rule operates on
/// the previous rule's output. Identity entries pin endings that are
/// spelled the same in both orthographies.
const GRAMMAR_RULES: &[(&str, &str)] = &[
    // Possessive endings
    (r"ның\b", "ның"),
    (r"нің\b", "нең"),
    (r"дың\b", "ҙың"),
    (r"дің\b", "ҙең"),
    (r"тың\b", "тың"),
    (r"тің\b", "тең"),
    // Accusative case
    (r"ды\b", "ҙы"),
    (r"ді\b", "ҙе"),
    (r"ты\b", "ты"),
    (r"ті\b", "те"),
    (r"ны\b", "ны"),
    (r"ні\b", "не"),
    // Dative case
    (r"ға\b", "ға"),
    (r"ге\b", "гә"),
    (r"қа\b", "ҡа"),
    (r"ке\b", "кә"),
    // Locative case
    (r"да\b", "ҙа"),
    (r"де\b", "ҙә"),
    (r"та\b", "та"),
    (r"те\b", "тә"),
    // Ablative case
    (r"дан\b", "ҙан"),
    (r"ден\b", "ҙән"),
    (r"тан\b", "тан"),
    (r"тен\b", "тән"),
    (r"нан\b", "нан"),
    (r"нен\b", "нән"),
];

/// Harmony repair: a back-vowel stem followed by a front ending
/// variant is rewritten to the back variant.
const HARMONY_BACK_RULES: &[(&str, &str)] = &[
    (r"([аоуы])гә\b", "${1}га"),
    (r"([аоуы])кә\b", "${1}ка"),
    (r"([аоуы])ҙә\b", "${1}ҙа"),
    (r"([аоуы])тә\b", "${1}та"),
    (r"([аоуы])нән\b", "${1}нан"),
    (r"([аоуы])ҙән\b", "${1}ҙан"),
    (r"([аоуы])тән\b", "${1}тан"),
];

/// Harmony repair: a front-vowel stem followed by a back ending
/// variant is rewritten to the front variant.
const HARMONY_FRONT_RULES: &[(&str, &str)] = &[
    (r"([әөүие])га\b", "${1}гә"),
    (r"([әөүие])ка\b", "${1}кә"),
    (r"([әөүие])ҙа\b", "${1}ҙә"),
    (r"([әөүие])та\b", "${1}тә"),
    (r"([әөүие])нан\b", "${1}нән"),
    (r"([әөүие])ҙан\b", "${1}ҙән"),
    (r"([әөүие])тан\b", "${1}тән"),
];

fn compile(rules: &[(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|&(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect()
}

lazy_static! {
    pub static ref GRAMMAR_PATTERNS: Vec<(Regex, &'static str)> = compile(GRAMMAR_RULES);
    pub static ref HARMONY_BACK_PATTERNS: Vec<(Regex, &'static str)> = compile(HARMONY_BACK_RULES);
    pub static ref HARMONY_FRONT_PATTERNS: Vec<(Regex, &'static str)> = compile(HARMONY_FRONT_RULES);
}

// ── Proper nouns ────────────────────────────────────────────────────

/// Ethnonyms and toponyms with their fixed Bashkir capitalization.
/// Source keys cover the raw Kazakh spelling and the spellings the
/// dictionary/character stages can already have produced by the time
/// this table is applied.
const PROPER_NOUN_FORMS: &[(&str, &str)] = &[
    ("башқорт", "Башҡорт"),
    ("башҡорт", "Башҡорт"),
    ("башкорт", "Башҡорт"),
    ("татар", "Татар"),
    ("қазақ", "Ҡазаҡ"),
    ("ҡазаҡ", "Ҡазаҡ"),
    ("казақ", "Ҡазаҡ"),
    ("қырғыз", "Ҡырғыҙ"),
    ("ҡырғыз", "Ҡырғыҙ"),
    ("қазақстан", "Ҡазаҡстан"),
    ("ҡазақстан", "Ҡазаҡстан"),
    ("ҡазаҡстан", "Ҡазаҡстан"),
    ("орыс", "Урыҫ"),
    ("рус", "Урыҫ"),
    ("өзбек", "Үзбәк"),
    ("төрек", "Төрөк"),
    ("монғол", "Мунғал"),
];

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

lazy_static! {
    /// Whole-word matchers for both written forms (lowercase and
    /// title-case) of each proper noun.
    pub static ref PROPER_NOUN_PATTERNS: Vec<(Regex, &'static str)> = PROPER_NOUN_FORMS
        .iter()
        .map(|&(source, fixed)| {
            let pattern = format!(r"\b(?:{}|{})\b", source, title_case(source));
            (Regex::new(&pattern).unwrap(), fixed)
        })
        .collect();
}

// ── Normalization and formatting patterns ───────────────────────────

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    pub static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s([,\.!?;:])").unwrap();
    // A following punctuation mark is excluded so that runs like
    // `!!!` stay adjacent for the repeated-punctuation collapse.
    pub static ref MISSING_SPACE_AFTER_PUNCT: Regex =
        Regex::new(r"([,\.!?;:])([^\s,\.!?;:])").unwrap();
    pub static ref BRACKET_ANNOTATION: Regex = Regex::new(r"\[.*?\]").unwrap();
    pub static ref PAREN_ANNOTATION: Regex = Regex::new(r"\(.*?\)").unwrap();
    pub static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+\s*").unwrap();
    pub static ref REPEATED_TERMINAL_PUNCT: Regex = Regex::new(r"([.!?]){2,}").unwrap();
    pub static ref PUNCT_SPACING: Regex = Regex::new(r"\s*([,.:;!?])\s*").unwrap();
}

// ── Default preserve-word sets ──────────────────────────────────────
//
// Lexical exceptions, overridable by external word lists (see the
// wordlist module). Both written forms are listed, matching the word
// dictionary convention.

/// Words whose қ must survive the context-sensitive қ rules.
pub const DEFAULT_PRESERVE_Q: &[&str] = &[
    "қашмау", "Қашмау", "қойрук", "Қойрук",
    "қойылған", "Қойылған", "қойылхан", "Қойылхан",
];

/// Words whose і must survive the і → е character substitution.
pub const DEFAULT_PRESERVE_I: &[&str] = &[
    "мінен", "Мінен", "бірге", "Бірге",
    "әлікле", "Әлікле", "әликли", "Әликли",
];

/// Loanwords whose е-endings must not be reshaped by the suffix and
/// harmony rules.
pub const DEFAULT_PRESERVE_E: &[&str] = &[
    "интернетте", "Интернетте", "университетте", "Университетте",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pattern_tables_compile() {
        assert_eq!(GRAMMAR_PATTERNS.len(), GRAMMAR_RULES.len());
        assert_eq!(HARMONY_BACK_PATTERNS.len(), HARMONY_BACK_RULES.len());
        assert_eq!(HARMONY_FRONT_PATTERNS.len(), HARMONY_FRONT_RULES.len());
        assert_eq!(PROPER_NOUN_PATTERNS.len(), PROPER_NOUN_FORMS.len());
    }

    #[test]
    fn dictionary_stores_both_casings() {
        for pair in WORD_PAIRS.chunks(2) {
            let (lower, _) = pair[0];
            let (title, _) = pair[1];
            assert_eq!(title, title_case(lower), "entry pair mismatch: {lower}");
        }
    }

    #[test]
    fn boundary_rule_matches_word_start_and_post_consonant() {
        assert!(Q_BOUNDARY_LOWER.is_match("қала"));
        assert!(Q_BOUNDARY_LOWER.is_match("башқорт"));
        // After a vowel is neither a boundary nor a consonant
        assert!(!Q_BOUNDARY_LOWER.is_match("ақ"));
    }

    #[test]
    fn intervocalic_rule_requires_vowels_on_both_sides() {
        assert!(Q_INTERVOCALIC_LOWER.is_match("ақа"));
        assert!(!Q_INTERVOCALIC_LOWER.is_match("ақт"));
        assert!(!Q_INTERVOCALIC_LOWER.is_match("тқа"));
    }
}
