/*!
 * Syllable-to-sound mapping.
 *
 * Converts a syllable's onset, nucleus and coda into an English-friendly
 * respelling. Onset and coda consult the adjacent nucleus for the
 * palatalization rules (soft `c`/`g`, `sc`, `gl`); the nucleus maps through
 * a fixed diphthong table with a vowel-by-vowel fallback. The mapping is a
 * pure function of the syllable text and position.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::syllabifier::{Syllable, fold};

// @const: Two-letter glide nuclei rendered as fixed idioms
static NUCLEUS_SOUNDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ia", "yah"),
        ("ie", "yeh"),
        ("io", "yoh"),
        ("iu", "yoo"),
        ("ua", "wah"),
        ("uo", "woh"),
        ("ui", "wee"),
        ("ue", "weh"),
        ("ai", "eye"),
        ("ei", "ay"),
        ("oi", "oy"),
        ("au", "ow"),
        ("eu", "eh-oo"),
    ])
});

/// Render one syllable as its phonetic respelling.
///
/// A vowel-less syllable (only possible for a vowel-less word) passes
/// through as its literal text.
pub fn map_syllable(syllable: &Syllable) -> String {
    if !syllable.has_nucleus() {
        return syllable.text();
    }

    let onset = fold(&syllable.onset);
    let nucleus = fold(&syllable.nucleus);
    let coda = fold(&syllable.coda);

    let (onset_sound, consumed) = map_onset(&onset, &nucleus);
    let nucleus_sound = map_nucleus(&nucleus[consumed..]);
    let coda_sound = map_coda(&coda);

    format!("{onset_sound}{nucleus_sound}{coda_sound}")
}

/// Map an onset against its nucleus, longest grapheme first.
///
/// Returns the rendered sound and the number of leading nucleus characters
/// consumed by a trigraph: `gl` before `i` eats the `i` (`gli` -> `ly`), as
/// do soft `c`/`g`/`sc` before an `i` that is a silent palatal marker
/// (`cia`, `gio`, `sciu` spellings). Expects folded input.
fn map_onset(onset: &str, nucleus: &str) -> (String, usize) {
    // geminate onsets render the single consonant sound
    let chars: Vec<char> = onset.chars().collect();
    let onset_norm: String = if chars.len() >= 2 && chars[0] == chars[1] {
        chars[1..].iter().collect()
    } else {
        onset.to_string()
    };

    let nucleus_first = nucleus.chars().next();
    let nucleus_second = nucleus.chars().nth(1);
    let front_nucleus = matches!(nucleus_first, Some('e') | Some('i'));
    let marker_i =
        nucleus_first == Some('i') && matches!(nucleus_second, Some('a') | Some('o') | Some('u'));

    let mut out = String::new();
    let mut consumed = 0usize;
    let n = onset_norm.len();
    let mut i = 0usize;

    while i < n {
        let rest = &onset_norm[i..];

        if rest.starts_with("sch") {
            out.push_str("sk");
            i += 3;
            continue;
        }
        if rest.starts_with("sc") && i + 2 == n {
            if marker_i {
                out.push_str("sh");
                consumed = 1;
            } else if front_nucleus {
                out.push_str("sh");
            } else {
                out.push_str("sk");
            }
            i += 2;
            continue;
        }
        if rest.starts_with("sc") {
            // mid-cluster, as in `scr`/`scl`
            out.push_str("sk");
            i += 2;
            continue;
        }
        if rest.starts_with("gl") && i + 2 == n && nucleus_first == Some('i') {
            out.push_str("ly");
            consumed = 1;
            i += 2;
            continue;
        }
        if rest.starts_with("gn") {
            out.push_str("ny");
            i += 2;
            continue;
        }
        if rest.starts_with("ch") {
            out.push_str("k");
            i += 2;
            continue;
        }
        if rest.starts_with("gh") {
            out.push_str("g");
            i += 2;
            continue;
        }
        if rest.starts_with("qu") && i + 2 == n {
            out.push_str("kw");
            i += 2;
            continue;
        }
        if rest.starts_with("gu")
            && i + 2 == n
            && matches!(nucleus_first, Some('a') | Some('e') | Some('i') | Some('o'))
        {
            out.push_str("gw");
            i += 2;
            continue;
        }

        let ch = rest.chars().next().unwrap_or_default();
        if ch == 'c' && i + 1 == n {
            if marker_i {
                out.push_str("ch");
                consumed = 1;
            } else if front_nucleus {
                out.push_str("ch");
            } else {
                out.push_str("k");
            }
            i += 1;
            continue;
        }
        if ch == 'g' && i + 1 == n {
            if marker_i {
                out.push_str("j");
                consumed = 1;
            } else if front_nucleus {
                out.push_str("j");
            } else {
                out.push_str("g");
            }
            i += 1;
            continue;
        }

        if ch == 'u' {
            // glide absorbed from a qu/gu spelling, as in `squ`
            out.push('w');
            i += 1;
            continue;
        }

        if let Some(sound) = consonant_sound(ch) {
            out.push_str(sound);
        } else {
            out.push(ch);
        }
        i += ch.len_utf8();
    }

    (out, consumed)
}

/// Map a nucleus: exact diphthong, then longest known prefix, then vowel by
/// vowel. Expects folded input.
fn map_nucleus(nucleus: &str) -> String {
    if nucleus.is_empty() {
        return String::new();
    }
    if let Some(&sound) = NUCLEUS_SOUNDS.get(nucleus) {
        return sound.to_string();
    }
    for split in (2..nucleus.len()).rev() {
        if let Some(&sound) = NUCLEUS_SOUNDS.get(&nucleus[..split]) {
            return format!("{}{}", sound, map_nucleus(&nucleus[split..]));
        }
    }
    nucleus.chars().map(vowel_sound).collect()
}

/// Map a coda through the consonant table; the digraph spellings keep their
/// sounds when they land syllable-final. Expects folded input.
fn map_coda(coda: &str) -> String {
    let mut out = String::new();
    let mut i = 0usize;

    while i < coda.len() {
        let rest = &coda[i..];
        if rest.starts_with("gn") {
            out.push_str("ny");
            i += 2;
            continue;
        }
        if rest.starts_with("gl") {
            out.push('l');
            i += 2;
            continue;
        }
        if rest.starts_with("sc") {
            out.push_str("sk");
            i += 2;
            continue;
        }
        if rest.starts_with("ch") {
            out.push('k');
            i += 2;
            continue;
        }
        if rest.starts_with("gh") {
            out.push('g');
            i += 2;
            continue;
        }
        let ch = rest.chars().next().unwrap_or_default();
        if let Some(sound) = consonant_sound(ch) {
            out.push_str(sound);
        } else {
            out.push(ch);
        }
        i += ch.len_utf8();
    }

    out
}

/// Base vowel sounds for nuclei outside the diphthong table
fn vowel_sound(ch: char) -> &'static str {
    match ch {
        'a' => "ah",
        'e' => "eh",
        'i' => "ee",
        'o' => "oh",
        'u' => "oo",
        'y' => "ee",
        _ => "",
    }
}

/// Direct consonant sounds; `h` is silent
fn consonant_sound(ch: char) -> Option<&'static str> {
    match ch {
        'b' => Some("b"),
        'c' => Some("k"),
        'd' => Some("d"),
        'f' => Some("f"),
        'g' => Some("g"),
        'h' => Some(""),
        'j' => Some("y"),
        'k' => Some("k"),
        'l' => Some("l"),
        'm' => Some("m"),
        'n' => Some("n"),
        'p' => Some("p"),
        'q' => Some("k"),
        'r' => Some("r"),
        's' => Some("s"),
        't' => Some("t"),
        'v' => Some("v"),
        'w' => Some("w"),
        'x' => Some("ks"),
        'y' => Some("y"),
        'z' => Some("dz"),
        _ => None,
    }
}
