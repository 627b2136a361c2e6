//! Soundex-style phonetic character classes.

use super::AlphabetMapping;

/// Collapses letters into coarse phonetic classes.
///
/// Letters are case folded and stripped of common Latin diacritics first
/// (`ü` → `u`, `ß` → `s`), then grouped:
///
/// | Class | Letters |
/// |-------|---------|
/// | `A` | a e i o u y |
/// | `B` | b f p v |
/// | `C` | c g j k q s x z |
/// | `D` | d t |
/// | `E` | l |
/// | `F` | m n |
/// | `G` | r |
/// | `H` | h w |
///
/// Every other character maps to its case-folded self, so the mapping is
/// total. Class labels are uppercase and nothing else maps to uppercase
/// ASCII, so a digit or symbol never shares a label with a letter class.
///
/// ```rust
/// use state_set_index::mapping::{AlphabetMapping, PhoneticClasses};
///
/// let code: String = "Müller".chars().filter_map(|c| PhoneticClasses.map(c)).collect();
/// let other: String = "Miller".chars().filter_map(|c| PhoneticClasses.map(c)).collect();
/// assert_eq!(code, other);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhoneticClasses;

impl PhoneticClasses {
    /// Strip diacritics from a lowercase Latin letter.
    fn fold(character: char) -> char {
        match character {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'œ' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            'ß' => 's',
            other => other,
        }
    }
}

impl AlphabetMapping for PhoneticClasses {
    fn map(&self, character: char) -> Option<char> {
        let lower = character.to_lowercase().next().unwrap_or(character);

        let class = match Self::fold(lower) {
            'a' | 'e' | 'i' | 'o' | 'u' | 'y' => 'A',
            'b' | 'f' | 'p' | 'v' => 'B',
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => 'C',
            'd' | 't' => 'D',
            'l' => 'E',
            'm' | 'n' => 'F',
            'r' => 'G',
            'h' | 'w' => 'H',
            other => other,
        };

        Some(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> String {
        s.chars().filter_map(|c| PhoneticClasses.map(c)).collect()
    }

    #[test]
    fn test_similar_names_share_code() {
        assert_eq!(code("Müller"), code("Muller"));
        assert_eq!(code("Meyer"), code("Maier"));
        assert_eq!(code("Schmidt"), code("Schmitt"));
    }

    #[test]
    fn test_distinct_names_differ() {
        assert_ne!(code("Muster"), code("Müller"));
    }

    #[test]
    fn test_digits_do_not_collide_with_classes() {
        let classes: Vec<char> = "aeiouybfpvcgjkqsxzdtlmnrhw"
            .chars()
            .filter_map(|c| PhoneticClasses.map(c))
            .collect();
        for digit in '0'..='9' {
            assert_eq!(PhoneticClasses.map(digit), Some(digit));
            assert!(!classes.contains(&digit), "{} shares a class label", digit);
        }
        assert_ne!(code("b1"), code("bb"));
        assert_ne!(code("a0"), code("aa"));
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(PhoneticClasses.map('-'), Some('-'));
        assert_eq!(PhoneticClasses.map('9'), Some('9'));
        assert_eq!(PhoneticClasses.map('日'), Some('日'));
    }

    #[test]
    fn test_case_and_diacritics_folded() {
        assert_eq!(PhoneticClasses.map('Ü'), PhoneticClasses.map('u'));
        assert_eq!(PhoneticClasses.map('ß'), PhoneticClasses.map('s'));
        assert_eq!(PhoneticClasses.map('É'), Some('A'));
    }
}
