// Character classification for Spanish orthography

// ---------------------------------------------------------------------------
// Spanish alphabet tables
// ---------------------------------------------------------------------------

/// Strong vowels (lowercase): a e o á é ó. Always a syllable nucleus.
pub const STRONG_VOWELS: &[char] = &['a', 'e', 'o', '\u{00E1}', '\u{00E9}', '\u{00F3}'];

/// Unaccented weak vowels (lowercase): i u.
pub const WEAK_VOWELS: &[char] = &['i', 'u'];

/// Accented weak vowels (lowercase): í ú. These break a diphthong.
pub const ACCENTED_WEAK_VOWELS: &[char] = &['\u{00ED}', '\u{00FA}'];

/// Two-letter sequences that spell a single consonant and are never split.
pub const DIGRAPHS: &[[char; 2]] = &[['c', 'h'], ['l', 'l'], ['r', 'r']];

/// Consonant pairs ending in `l` or `r` that always stay together as the
/// onset of the following syllable.
pub const INSEPARABLE_CLUSTERS: &[[char; 2]] = &[
    ['b', 'l'],
    ['b', 'r'],
    ['c', 'l'],
    ['c', 'r'],
    ['d', 'l'],
    ['d', 'r'],
    ['f', 'l'],
    ['f', 'r'],
    ['g', 'l'],
    ['g', 'r'],
    ['p', 'l'],
    ['p', 'r'],
    ['t', 'l'],
    ['t', 'r'],
    ['k', 'l'],
    ['k', 'r'],
];

// ---------------------------------------------------------------------------
// Character class
// ---------------------------------------------------------------------------

/// Orthographic class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// a, e, o and their accented forms.
    StrongVowel,
    /// i, u without an accent.
    WeakVowel,
    /// í, ú. Forces a hiatus with any neighbouring vowel.
    WeakVowelAccented,
    /// Any other alphabetic character (including ñ and ü).
    Consonant,
    /// Anything that is not alphabetic.
    Other,
}

impl CharClass {
    /// True for the three vowel classes.
    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            CharClass::StrongVowel | CharClass::WeakVowel | CharClass::WeakVowelAccented
        )
    }
}

/// Classify a character. Case-insensitive, diacritic-sensitive, total.
pub fn classify(c: char) -> CharClass {
    let lower = simple_lower(c);
    if ACCENTED_WEAK_VOWELS.contains(&lower) {
        CharClass::WeakVowelAccented
    } else if WEAK_VOWELS.contains(&lower) {
        CharClass::WeakVowel
    } else if STRONG_VOWELS.contains(&lower) {
        CharClass::StrongVowel
    } else if lower.is_alphabetic() {
        CharClass::Consonant
    } else {
        CharClass::Other
    }
}

pub fn is_vowel(c: char) -> bool {
    classify(c).is_vowel()
}

pub fn is_consonant(c: char) -> bool {
    classify(c) == CharClass::Consonant
}

pub fn is_strong_vowel(c: char) -> bool {
    classify(c) == CharClass::StrongVowel
}

/// True for both accented and unaccented weak vowels.
pub fn is_weak_vowel(c: char) -> bool {
    matches!(
        classify(c),
        CharClass::WeakVowel | CharClass::WeakVowelAccented
    )
}

pub fn is_accented_weak_vowel(c: char) -> bool {
    classify(c) == CharClass::WeakVowelAccented
}

// ---------------------------------------------------------------------------
// Pair predicates
// ---------------------------------------------------------------------------

/// Check whether two adjacent vowels stay in the same syllable.
///
/// Decision table over the vowel classes:
///
/// | first  | second | result    |
/// |--------|--------|-----------|
/// | weak+´ | any    | hiatus    |
/// | any    | weak+´ | hiatus    |
/// | strong | weak   | diphthong |
/// | weak   | strong | diphthong |
/// | weak   | weak   | diphthong |
/// | strong | strong | hiatus    |
///
/// Returns `false` when either character is not a vowel.
pub fn is_diphthong(v1: char, v2: char) -> bool {
    use CharClass::*;
    match (classify(v1), classify(v2)) {
        (WeakVowelAccented, _) | (_, WeakVowelAccented) => false,
        (StrongVowel, WeakVowel) | (WeakVowel, StrongVowel) | (WeakVowel, WeakVowel) => true,
        _ => false,
    }
}

/// Check whether two adjacent vowels belong to different syllables.
/// Returns `false` when either character is not a vowel.
pub fn is_hiatus(v1: char, v2: char) -> bool {
    is_vowel(v1) && is_vowel(v2) && !is_diphthong(v1, v2)
}

/// Check whether `c1 c2` is one of the digraphs ch, ll, rr (case-insensitive).
pub fn is_digraph(c1: char, c2: char) -> bool {
    DIGRAPHS.contains(&[simple_lower(c1), simple_lower(c2)])
}

/// Check whether `c1 c2` is an inseparable consonant cluster (case-insensitive).
pub fn is_inseparable_cluster(c1: char, c2: char) -> bool {
    INSEPARABLE_CLUSTERS.contains(&[simple_lower(c1), simple_lower(c2)])
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// `char::to_lowercase` yields an iterator because a few characters expand to
// several code points. Classification needs a one-to-one mapping, so only the
// first character is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- classify --

    #[test]
    fn classify_strong_vowels() {
        for c in ['a', 'e', 'o', 'á', 'é', 'ó', 'A', 'É'] {
            assert_eq!(classify(c), CharClass::StrongVowel, "{c}");
        }
    }

    #[test]
    fn classify_weak_vowels() {
        assert_eq!(classify('i'), CharClass::WeakVowel);
        assert_eq!(classify('U'), CharClass::WeakVowel);
        assert_eq!(classify('í'), CharClass::WeakVowelAccented);
        assert_eq!(classify('Ú'), CharClass::WeakVowelAccented);
    }

    #[test]
    fn classify_consonants() {
        for c in ['b', 'z', 'ñ', 'Ñ', 'ü', 'y', 'K'] {
            assert_eq!(classify(c), CharClass::Consonant, "{c}");
        }
    }

    #[test]
    fn classify_other() {
        for c in ['1', ' ', '-', '.', '\'', '\u{00BF}'] {
            assert_eq!(classify(c), CharClass::Other, "{c:?}");
        }
    }

    #[test]
    fn classify_is_context_free() {
        for c in "murciélago".chars() {
            assert_eq!(classify(c), classify(c));
        }
    }

    // -- derived predicates --

    #[test]
    fn vowel_and_consonant_predicates() {
        assert!(is_vowel('a'));
        assert!(is_vowel('Í'));
        assert!(!is_vowel('r'));
        assert!(is_consonant('r'));
        assert!(!is_consonant('3'));
        assert!(is_strong_vowel('ó'));
        assert!(!is_strong_vowel('u'));
        assert!(is_weak_vowel('u'));
        assert!(is_weak_vowel('ú'));
        assert!(is_accented_weak_vowel('ú'));
        assert!(!is_accented_weak_vowel('u'));
    }

    // -- diphthong / hiatus --

    #[test]
    fn diphthong_table() {
        assert!(is_diphthong('a', 'i'));
        assert!(is_diphthong('u', 'e'));
        assert!(is_diphthong('i', 'u'));
        assert!(!is_diphthong('e', 'a'));
        assert!(!is_diphthong('o', 'o'));
    }

    #[test]
    fn diphthong_depends_only_on_class() {
        assert_eq!(is_diphthong('a', 'i'), is_diphthong('e', 'u'));
        assert_eq!(is_diphthong('i', 'o'), is_diphthong('u', 'a'));
        assert_eq!(is_diphthong('a', 'e'), is_diphthong('o', 'á'));
    }

    #[test]
    fn accented_weak_vowel_always_breaks() {
        for accented in ['í', 'ú'] {
            for other in ['a', 'e', 'o', 'i', 'u', 'á', 'í', 'ú'] {
                assert!(!is_diphthong(accented, other), "{accented}{other}");
                assert!(!is_diphthong(other, accented), "{other}{accented}");
            }
        }
    }

    #[test]
    fn hiatus_is_negation_for_vowels() {
        assert!(is_hiatus('e', 'a'));
        assert!(is_hiatus('í', 'a'));
        assert!(!is_hiatus('a', 'i'));
        assert!(!is_hiatus('a', 'b'));
    }

    #[test]
    fn diphthong_requires_vowels() {
        assert!(!is_diphthong('a', 'b'));
        assert!(!is_diphthong('1', 'i'));
    }

    // -- digraphs and clusters --

    #[test]
    fn digraphs() {
        assert!(is_digraph('c', 'h'));
        assert!(is_digraph('L', 'l'));
        assert!(is_digraph('r', 'R'));
        assert!(!is_digraph('h', 'c'));
        assert!(!is_digraph('n', 'n'));
    }

    #[test]
    fn inseparable_clusters() {
        for pair in INSEPARABLE_CLUSTERS {
            assert!(is_inseparable_cluster(pair[0], pair[1]));
        }
        assert!(is_inseparable_cluster('B', 'R'));
        assert!(!is_inseparable_cluster('n', 't'));
        assert!(!is_inseparable_cluster('s', 'l'));
        assert!(!is_inseparable_cluster('r', 'b'));
    }

    // -- case conversion --

    #[test]
    fn simple_lower_spanish() {
        assert_eq!(simple_lower('Á'), 'á');
        assert_eq!(simple_lower('Ñ'), 'ñ');
        assert_eq!(simple_lower('a'), 'a');
        assert_eq!(simple_lower('1'), '1');
    }
}
