/*!
 * Rendering of mapped syllables and phrase reassembly.
 *
 * Joins a word's syllable sounds with hyphens, visually distinguishing
 * exactly the stressed syllable, then rebuilds the full phrase from word and
 * separator segments so that the output mirrors the input's shape.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::sounds::map_syllable;
use super::stress::stress_index;
use super::syllabifier::{Syllable, syllabify};
use super::tokenizer::{Segment, is_apostrophe, tokenize};

/// How the stressed syllable is distinguished in the rendered word
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StressStyle {
    /// Stressed syllable in upper case, the rest in lower case
    #[default]
    Uppercase,
    /// A stress mark before the stressed syllable, all lower case
    Marker,
}

impl StressStyle {
    // @returns: Lowercase style identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Uppercase => "uppercase".to_string(),
            Self::Marker => "marker".to_string(),
        }
    }
}

impl std::fmt::Display for StressStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for StressStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uppercase" => Ok(Self::Uppercase),
            "marker" => Ok(Self::Marker),
            _ => Err(anyhow!("Invalid stress style: {}", s)),
        }
    }
}

/// Join a word's syllables with hyphens, rendering the syllable at `stress`
/// in the distinguishing style and every other syllable in lower case.
///
/// A vowel-less word is returned as its literal text, un-mapped and
/// un-cased.
pub fn compose_word(syllables: &[Syllable], stress: usize, style: StressStyle) -> String {
    if syllables.len() == 1 && !syllables[0].has_nucleus() {
        return syllables[0].text();
    }

    let rendered: Vec<String> = syllables
        .iter()
        .enumerate()
        .map(|(idx, syllable)| {
            let sound = map_syllable(syllable);
            if idx == stress {
                match style {
                    StressStyle::Uppercase => sound.to_uppercase(),
                    StressStyle::Marker => format!("ˈ{sound}"),
                }
            } else {
                sound
            }
        })
        .collect();

    rendered.join("-")
}

/// Transcribe a full phrase: words are respelled, separators pass through
/// verbatim, so punctuation keeps its original spacing.
pub fn render_phrase(phrase: &str, style: StressStyle) -> String {
    tokenize(phrase)
        .iter()
        .map(|segment| match segment {
            Segment::Word(text) => render_word(text, style),
            Segment::Separator(text) => text.clone(),
        })
        .collect()
}

/// Transcribe one word segment. Elision apostrophes are dropped before
/// syllabification (`l'amico` is syllabified as `lamico`).
pub fn render_word(text: &str, style: StressStyle) -> String {
    let cleaned: String = text.chars().filter(|ch| !is_apostrophe(*ch)).collect();
    if cleaned.is_empty() {
        return String::new();
    }

    let syllables = syllabify(&cleaned);
    let stress = stress_index(&syllables);
    compose_word(&syllables, stress, style)
}
