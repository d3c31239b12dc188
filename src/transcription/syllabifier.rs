/*!
 * Italian syllabification.
 *
 * Splits a single word (letters only, apostrophes already removed) into an
 * ordered sequence of syllables. Nuclei are maximal vowel runs; the
 * consonant cluster between two nuclei is divided by onset maximization
 * against a fixed table of legal Italian onsets.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// @const: Maximal vowel run, either case, accents included
static VOWEL_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[aeiouàèéìòóù]+").unwrap()
});

// @const: Legal Italian syllable onsets (folded form)
static LEGAL_ONSETS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // single consonants
        "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r",
        "s", "t", "v", "w", "x", "y", "z",
        // two-letter clusters
        "bl", "br", "ch", "cl", "cr", "dr", "fl", "fr", "gh", "gl", "gn",
        "gr", "gu", "pl", "pr", "ps", "qu", "sb", "sc", "sp", "st", "tr",
        "vr",
        // three-letter clusters
        "sbr", "sch", "scl", "scr", "sdr", "sfr", "sgl", "sgn", "sgr", "spl",
        "spr", "squ", "str",
    ]
    .into_iter()
    .collect()
});

/// One syllable of a word, split into onset, nucleus and coda over the
/// original-case, accent-preserving substrings. Concatenating the parts of
/// every syllable in order reconstructs the word exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Consonants preceding the nucleus
    pub onset: String,
    /// Vowel core; empty only for a vowel-less word
    pub nucleus: String,
    /// Consonants following the nucleus within the same syllable
    pub coda: String,
}

impl Syllable {
    /// The syllable's substring of the original word
    pub fn text(&self) -> String {
        format!("{}{}{}", self.onset, self.nucleus, self.coda)
    }

    // @checks: Syllable carries a vowel core
    pub fn has_nucleus(&self) -> bool {
        !self.nucleus.is_empty()
    }

    // @checks: Last character of the syllable is a vowel
    pub fn ends_in_vowel(&self) -> bool {
        self.coda.is_empty() && !self.nucleus.is_empty()
    }
}

/// Lowercase a letter and strip its accent for rule matching
pub(crate) fn fold_char(ch: char) -> char {
    match ch.to_lowercase().next().unwrap_or(ch) {
        'à' => 'a',
        'è' | 'é' => 'e',
        'ì' => 'i',
        'ò' | 'ó' => 'o',
        'ù' => 'u',
        other => other,
    }
}

/// Folded form of a whole string
pub(crate) fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// True for orthographically accented Italian vowels
pub(crate) fn is_accented(ch: char) -> bool {
    matches!(
        ch.to_lowercase().next().unwrap_or(ch),
        'à' | 'è' | 'é' | 'ì' | 'ò' | 'ó' | 'ù'
    )
}

/// Split a word into syllables covering it exactly.
///
/// A word with no vowels yields a single syllable equal to the whole word;
/// this is not an error.
pub fn syllabify(word: &str) -> Vec<Syllable> {
    let runs = nucleus_runs(word);
    if runs.is_empty() {
        return vec![Syllable {
            onset: word.to_string(),
            nucleus: String::new(),
            coda: String::new(),
        }];
    }

    let mut syllables: Vec<Syllable> = Vec::with_capacity(runs.len());
    let mut prev_end = 0usize;

    for (k, &(start, end)) in runs.iter().enumerate() {
        let cluster = &word[prev_end..start];
        let onset = if k == 0 {
            cluster.to_string()
        } else {
            let keep = coda_length(cluster);
            let split_at = byte_at_char(cluster, keep);
            if let Some(prev) = syllables.last_mut() {
                prev.coda = cluster[..split_at].to_string();
            }
            cluster[split_at..].to_string()
        };
        syllables.push(Syllable {
            onset,
            nucleus: word[start..end].to_string(),
            coda: String::new(),
        });
        prev_end = end;
    }

    // word-final consonants all belong to the last syllable
    let trailing = &word[prev_end..];
    if !trailing.is_empty() {
        if let Some(last) = syllables.last_mut() {
            last.coda.push_str(trailing);
        }
    }

    syllables
}

/// Locate nucleus byte ranges: maximal vowel runs, adjusted for the `qu`/`gu`
/// glide and for palatal-marker hiatus.
fn nucleus_runs(word: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();

    for m in VOWEL_RUN_REGEX.find_iter(word) {
        let mut start = m.start();
        let end = m.end();

        // A `u` opening a multi-vowel run directly after `q` or `g` is the
        // glide of the `qu`/`gu` digraph and belongs to the onset, not the
        // nucleus (questo -> que|sto, guerra -> gue|rra). An accented `ù`
        // is a real nucleus and is never absorbed.
        let mut chars = word[start..end].chars();
        let first = chars.next();
        if let (Some(f), Some(_)) = (first, chars.next()) {
            if (f == 'u' || f == 'U')
                && word[..start]
                    .chars()
                    .next_back()
                    .is_some_and(|c| matches!(fold_char(c), 'q' | 'g'))
            {
                start += f.len_utf8();
            }
        }

        // An `ie` run directly after an onset ending in `c` or `g` is a
        // hiatus around the palatal marker: the `i` closes its syllable and
        // the `e` opens the next one (scienza -> sci|en|za). The `h` of
        // `ch`/`gh` spellings blocks this, as those are hard sounds.
        let mut chars = word[start..end].chars();
        let split_hiatus = matches!(
            (chars.next(), chars.next()),
            (Some(f), Some(s)) if fold_char(f) == 'i' && fold_char(s) == 'e'
        ) && word[..start]
            .chars()
            .next_back()
            .is_some_and(|c| matches!(fold_char(c), 'c' | 'g'));

        if split_hiatus {
            let first_len = word[start..].chars().next().map_or(1, char::len_utf8);
            runs.push((start, start + first_len));
            runs.push((start + first_len, end));
        } else if start < end {
            runs.push((start, end));
        }
    }

    runs
}

/// Number of cluster characters that stay as coda of the preceding syllable.
///
/// Priority: geminates and whole legal onsets attach entirely to the next
/// syllable; an unrecognized `s`-initial cluster leaves only the `s` behind;
/// otherwise the longest legal suffix becomes the next onset.
fn coda_length(cluster: &str) -> usize {
    if cluster.is_empty() {
        return 0;
    }
    let folded = fold(cluster);
    let chars: Vec<char> = folded.chars().collect();

    if chars.len() >= 2 && chars[0] == chars[1] {
        // plain geminate, or a geminate spelling like `cch`/`ggh` whose
        // remainder is itself a legal onset
        let rest: String = chars[1..].iter().collect();
        if chars.len() == 2 || LEGAL_ONSETS.contains(rest.as_str()) {
            return 0;
        }
    }
    if LEGAL_ONSETS.contains(folded.as_str()) {
        return 0;
    }
    if chars[0] == 's' && chars.len() > 1 {
        return 1;
    }
    for keep in 1..chars.len() {
        let suffix: String = chars[keep..].iter().collect();
        if LEGAL_ONSETS.contains(suffix.as_str()) {
            return keep;
        }
    }
    chars.len() - 1
}

/// Byte offset of the char at `index`, or the string length past the end
fn byte_at_char(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(b, _)| b)
}
