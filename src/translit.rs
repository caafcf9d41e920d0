//! Latin→Cyrillic transliteration for the supported Turkic languages.
//!
//! A small helper for preparing Latin-script evaluation text. The
//! language set is closed (Bashkir, Kazakh, Kyrgyz); any other code is
//! an explicit error rather than a silent fallback, since a wrong code
//! is a caller bug.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::TranslitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Bashkir,
    Kazakh,
    Kyrgyz,
}

impl Language {
    /// Parse an ISO 639-1 code. Only `ba`, `kk`, and `ky` are valid.
    pub fn from_code(code: &str) -> Result<Self, TranslitError> {
        match code {
            "ba" => Ok(Self::Bashkir),
            "kk" => Ok(Self::Kazakh),
            "ky" => Ok(Self::Kyrgyz),
            other => Err(TranslitError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Bashkir => "ba",
            Self::Kazakh => "kk",
            Self::Kyrgyz => "ky",
        }
    }
}

/// Latin sequences shared by all three alphabets. Multi-character
/// sequences are resolved by longest-match-first scanning.
const COMMON_PAIRS: &[(&str, &str)] = &[
    ("shch", "щ"), ("Shch", "Щ"),
    ("yo", "ё"), ("Yo", "Ё"),
    ("yu", "ю"), ("Yu", "Ю"),
    ("ya", "я"), ("Ya", "Я"),
    ("ts", "ц"), ("Ts", "Ц"),
    ("ch", "ч"), ("Ch", "Ч"),
    ("sh", "ш"), ("Sh", "Ш"),
    ("a", "а"), ("A", "А"),
    ("b", "б"), ("B", "Б"),
    ("v", "в"), ("V", "В"),
    ("g", "г"), ("G", "Г"),
    ("d", "д"), ("D", "Д"),
    ("e", "е"), ("E", "Е"),
    ("j", "ж"), ("J", "Ж"),
    ("z", "з"), ("Z", "З"),
    ("i", "и"), ("I", "И"),
    ("y", "й"), ("Y", "Й"),
    ("k", "к"), ("K", "К"),
    ("l", "л"), ("L", "Л"),
    ("m", "м"), ("M", "М"),
    ("n", "н"), ("N", "Н"),
    ("o", "о"), ("O", "О"),
    ("p", "п"), ("P", "П"),
    ("r", "р"), ("R", "Р"),
    ("s", "с"), ("S", "С"),
    ("t", "т"), ("T", "Т"),
    ("u", "у"), ("U", "У"),
    ("f", "ф"), ("F", "Ф"),
    ("x", "х"), ("X", "Х"),
];

const BASHKIR_PAIRS: &[(&str, &str)] = &[
    ("ð", "ҙ"), ("Ð", "Ҙ"),
    ("q", "ҡ"), ("Q", "Ҡ"),
    ("ŋ", "ң"), ("Ŋ", "Ң"),
    ("ś", "ҫ"), ("Ś", "Ҫ"),
    ("ü", "ү"), ("Ü", "Ү"),
    ("h", "һ"), ("H", "Һ"),
    ("ä", "ә"), ("Ä", "Ә"),
    ("ö", "ө"), ("Ö", "Ө"),
    ("ğ", "ғ"), ("Ğ", "Ғ"),
];

const KAZAKH_PAIRS: &[(&str, &str)] = &[
    ("ä", "ә"), ("Ä", "Ә"),
    ("ğ", "ғ"), ("Ğ", "Ғ"),
    ("q", "қ"), ("Q", "Қ"),
    ("ŋ", "ң"), ("Ŋ", "Ң"),
    ("ö", "ө"), ("Ö", "Ө"),
    ("u\u{307}", "ұ"), ("U\u{307}", "Ұ"),
    ("ü", "ү"), ("Ü", "Ү"),
    ("h", "һ"), ("H", "Һ"),
    ("i", "і"), ("I", "І"),
];

const KYRGYZ_PAIRS: &[(&str, &str)] = &[
    ("ŋ", "ң"), ("Ŋ", "Ң"),
    ("ö", "ө"), ("Ö", "Ө"),
    ("ü", "ү"), ("Ü", "Ү"),
];

/// Longest Latin sequence in any table, in characters.
const MAX_SEQUENCE_CHARS: usize = 4;

fn build_map(specific: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    let mut map: HashMap<&'static str, &'static str> = COMMON_PAIRS.iter().copied().collect();
    // Language-specific letters override the common table (e.g. `q`,
    // or Kazakh `i` → і).
    map.extend(specific.iter().copied());
    map
}

lazy_static! {
    static ref BASHKIR_MAP: HashMap<&'static str, &'static str> = build_map(BASHKIR_PAIRS);
    static ref KAZAKH_MAP: HashMap<&'static str, &'static str> = build_map(KAZAKH_PAIRS);
    static ref KYRGYZ_MAP: HashMap<&'static str, &'static str> = build_map(KYRGYZ_PAIRS);
}

/// Convert Latin-script text to the Cyrillic alphabet of `language`.
/// Unmapped characters pass through unchanged.
pub fn latin_to_cyrillic(text: &str, language: Language) -> String {
    let map = match language {
        Language::Bashkir => &*BASHKIR_MAP,
        Language::Kazakh => &*KAZAKH_MAP,
        Language::Kyrgyz => &*KYRGYZ_MAP,
    };

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        for len in (1..=MAX_SEQUENCE_CHARS.min(chars.len() - i)).rev() {
            let candidate: String = chars[i..i + len].iter().collect();
            if let Some(&cyrillic) = map.get(candidate.as_str()) {
                result.push_str(cyrillic);
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            result.push(chars[i]);
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_language_set() {
        assert_eq!(Language::from_code("ba").unwrap(), Language::Bashkir);
        assert_eq!(Language::from_code("kk").unwrap(), Language::Kazakh);
        assert_eq!(Language::from_code("ky").unwrap(), Language::Kyrgyz);
        assert!(matches!(
            Language::from_code("tr"),
            Err(TranslitError::UnsupportedLanguage(code)) if code == "tr"
        ));
    }

    #[test]
    fn q_maps_per_language() {
        assert_eq!(latin_to_cyrillic("qort", Language::Bashkir), "ҡорт");
        assert_eq!(latin_to_cyrillic("qazaq", Language::Kazakh), "қазақ");
    }

    #[test]
    fn multi_character_sequences_take_precedence() {
        assert_eq!(latin_to_cyrillic("chal", Language::Kyrgyz), "чал");
        assert_eq!(latin_to_cyrillic("Shchi", Language::Kyrgyz), "Щи");
    }

    #[test]
    fn kazakh_i_is_the_dotted_cyrillic_letter() {
        assert_eq!(latin_to_cyrillic("til", Language::Kazakh), "тіл");
        assert_eq!(latin_to_cyrillic("til", Language::Kyrgyz), "тил");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(latin_to_cyrillic("salam, 42!", Language::Bashkir), "салам, 42!");
    }
}
