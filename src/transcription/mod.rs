/*!
 * Grapheme-to-sound transcription of Italian words and phrases.
 *
 * The engine is a pure pipeline composed left to right:
 *
 * - `tokenizer`: lossless split of a phrase into word and separator runs
 * - `syllabifier`: onset/nucleus/coda syllable splitting per Italian
 *   phonotactics
 * - `stress`: accent-mark and positional stress placement heuristics
 * - `sounds`: digraph/trigraph, soft-consonant and diphthong sound mapping
 * - `composer`: hyphen-joined respelling with the stressed syllable
 *   distinguished, reassembled into the original phrase shape
 *
 * Every stage is stateless and side-effect free; two calls with identical
 * input produce identical output.
 */

// Re-export main types for easier usage
pub use self::composer::{StressStyle, compose_word, render_word};
pub use self::sounds::map_syllable;
pub use self::stress::stress_index;
pub use self::syllabifier::{Syllable, syllabify};
pub use self::tokenizer::{Segment, tokenize};

// Submodules
pub mod composer;
pub mod sounds;
pub mod stress;
pub mod syllabifier;
pub mod tokenizer;

/// Configured entry point to the transcription pipeline.
///
/// The transcriber holds only rendering options; it keeps no state across
/// calls and may be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transcriber {
    stress_style: StressStyle,
}

impl Transcriber {
    /// Create a transcriber with the default uppercase stress style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcriber with an explicit stress style
    pub fn with_stress_style(stress_style: StressStyle) -> Self {
        Transcriber { stress_style }
    }

    // @returns: Configured stress style
    pub fn stress_style(&self) -> StressStyle {
        self.stress_style
    }

    /// Transcribe an Italian term or short phrase into its respelling.
    ///
    /// Any input is legal; an empty phrase yields an empty string and a
    /// word without vowels passes through unmodified.
    pub fn transcribe(&self, phrase: &str) -> String {
        composer::render_phrase(phrase, self.stress_style)
    }
}

/// Transcribe a phrase with the default rendering options
pub fn transcribe(phrase: &str) -> String {
    Transcriber::new().transcribe(phrase)
}
