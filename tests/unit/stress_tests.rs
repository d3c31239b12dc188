/*!
 * Tests for stress placement heuristics
 */

use fonetico::transcription::{stress_index, syllabify};

fn stress_of(word: &str) -> usize {
    stress_index(&syllabify(word))
}

/// Test that an accent mark always wins
#[test]
fn test_stress_index_withAccentMark_shouldStressMarkedSyllable() {
    assert_eq!(stress_of("città"), 1);
    assert_eq!(stress_of("virtù"), 1);
    assert_eq!(stress_of("perché"), 1);
    assert_eq!(stress_of("È"), 0);
    // accent early in the word
    assert_eq!(stress_of("èsodo"), 0);
}

/// Test the monosyllable rule
#[test]
fn test_stress_index_withMonosyllable_shouldStressIt() {
    assert_eq!(stress_of("gli"), 0);
    assert_eq!(stress_of("tu"), 0);
    assert_eq!(stress_of("tram"), 0);
}

/// Test the paroxytone default for vowel-final words
#[test]
fn test_stress_index_withVowelFinalWord_shouldStressPenultimate() {
    assert_eq!(stress_of("casa"), 0);
    assert_eq!(stress_of("amico"), 1);
    assert_eq!(stress_of("informale"), 2);
}

/// Test the final-syllable rule for consonant-final words
#[test]
fn test_stress_index_withConsonantFinalWord_shouldStressFinal() {
    assert_eq!(stress_of("computer"), 2);
    assert_eq!(stress_of("autobus"), 2);
}

/// Test the single stress invariant
#[test]
fn test_stress_index_withAnyWord_shouldReturnValidIndex() {
    for word in ["casa", "città", "gli", "scienza", "tv", "computer", "più"] {
        let syllables = syllabify(word);
        let idx = stress_index(&syllables);
        assert!(idx < syllables.len(), "stress out of range for {:?}", word);
    }
}
