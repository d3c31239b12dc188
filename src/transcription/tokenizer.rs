/*!
 * Phrase segmentation into word and separator runs.
 *
 * Splits an input phrase into alternating word and separator segments while
 * preserving the original text byte-for-byte, so that re-joining all
 * segments reproduces the input exactly.
 */

// @module: Lossless phrase tokenization

/// A run of characters taken verbatim from the original phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Maximal run of letters, including elision apostrophes (`l'amico`)
    Word(String),
    /// Everything between word runs: spaces, punctuation, digits
    Separator(String),
}

impl Segment {
    /// Original text of the segment
    pub fn text(&self) -> &str {
        match self {
            Segment::Word(text) => text,
            Segment::Separator(text) => text,
        }
    }

    // @checks: Segment is a word run
    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

/// True for the straight and typographic apostrophes used in elisions
pub fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '’'
}

/// Split a phrase into word and separator segments.
///
/// A character belongs to a word run when it is alphabetic, or when it is an
/// apostrophe directly adjacent to a letter (elisions like `l'amico`, and
/// truncations like `po'`). All other characters accumulate into separator
/// runs, emitted verbatim. Any input is legal; an empty phrase yields no
/// segments.
pub fn tokenize(phrase: &str) -> Vec<Segment> {
    let chars: Vec<char> = phrase.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_is_word = false;

    for (idx, &ch) in chars.iter().enumerate() {
        let word_char = if ch.is_alphabetic() {
            true
        } else if is_apostrophe(ch) {
            // An apostrophe joins the word run only when a letter sits
            // directly on either side of it.
            let after_letter = idx > 0 && chars[idx - 1].is_alphabetic();
            let before_letter = chars.get(idx + 1).is_some_and(|c| c.is_alphabetic());
            after_letter || before_letter
        } else {
            false
        };

        if !current.is_empty() && word_char != current_is_word {
            segments.push(make_segment(current, current_is_word));
            current = String::new();
        }
        current_is_word = word_char;
        current.push(ch);
    }

    if !current.is_empty() {
        segments.push(make_segment(current, current_is_word));
    }

    segments
}

fn make_segment(text: String, is_word: bool) -> Segment {
    if is_word {
        Segment::Word(text)
    } else {
        Segment::Separator(text)
    }
}
