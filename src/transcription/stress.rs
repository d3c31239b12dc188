/*!
 * Stress placement heuristics.
 *
 * Determines which syllable of a word carries primary stress. Orthographic
 * accent marks always win; without one the standard Italian paroxytone
 * default applies. Proparoxytone words without a written accent cannot be
 * detected by rule and will default to penultimate stress; that is an
 * accepted limitation of the heuristic, not a bug.
 */

use super::syllabifier::{Syllable, is_accented};

/// Index of the stressed syllable.
///
/// Priority: an accented vowel marks its syllable; a monosyllable stresses
/// itself; a vowel-final word stresses the penultimate syllable; a
/// consonant-final word stresses the last one. Always returns a valid index
/// for a non-empty slice.
pub fn stress_index(syllables: &[Syllable]) -> usize {
    debug_assert!(!syllables.is_empty());

    for (idx, syllable) in syllables.iter().enumerate() {
        if syllable.nucleus.chars().any(is_accented) {
            return idx;
        }
    }

    if syllables.len() <= 1 {
        return 0;
    }

    let final_syllable = &syllables[syllables.len() - 1];
    if final_syllable.ends_in_vowel() {
        syllables.len() - 2
    } else {
        syllables.len() - 1
    }
}
