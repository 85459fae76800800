//! Locale-aware string ordering for display names.
//!
//! Both strings are decomposed (NFD) so that precomposed and combining-mark
//! spellings of the same name compare equal. Comparison then runs in three
//! passes, each consulted only when the previous one ties:
//!
//! 1. base letters, ignoring case and diacritics (`"alice" < "Bob"`,
//!    `"Čapek" < "Zed"`)
//! 2. diacritics, unmarked first (`"e" < "é"`)
//! 3. case, lowercase first (`"a" < "A"`)

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stands in for the stroke or slash of letters NFD leaves whole (`ł`, `ø`).
const STROKE: char = '\u{0338}';

/// A base character and the combining marks that followed it.
struct Grapheme {
    base: char,
    marks: Vec<char>,
}

fn decompose(s: &str) -> Vec<Grapheme> {
    let mut graphemes: Vec<Grapheme> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = graphemes.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        graphemes.push(Grapheme {
            base: c,
            marks: Vec::new(),
        });
    }
    graphemes
}

/// Letters without a canonical decomposition, mapped to the base letters
/// they sort with.
fn fold_letter(c: char, out: &mut Vec<char>) {
    match c {
        'ł' => out.push('l'),
        'ø' => out.push('o'),
        'đ' | 'ð' => out.push('d'),
        'ħ' => out.push('h'),
        'ı' => out.push('i'),
        'ß' => out.extend(['s', 's']),
        'æ' => out.extend(['a', 'e']),
        'œ' => out.extend(['o', 'e']),
        'þ' => out.extend(['t', 'h']),
        other => out.push(other),
    }
}

fn is_stroked(c: char) -> bool {
    matches!(c, 'ł' | 'ø' | 'đ' | 'ħ')
}

fn primary_key(graphemes: &[Grapheme]) -> Vec<char> {
    let mut key = Vec::with_capacity(graphemes.len());
    for c in graphemes.iter().flat_map(|g| g.base.to_lowercase()) {
        fold_letter(c, &mut key);
    }
    key
}

fn accents(g: &Grapheme) -> Vec<char> {
    let mut marks = g.marks.clone();
    if g.base.to_lowercase().any(is_stroked) {
        marks.push(STROKE);
    }
    marks
}

fn compare_accents(a: &[Grapheme], b: &[Grapheme]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (accents(x), accents(y));
        if x == y {
            continue;
        }
        return match (x.is_empty(), y.is_empty()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    Ordering::Equal
}

fn compare_case(a: &[Grapheme], b: &[Grapheme]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x.base == y.base {
            continue;
        }
        return match (x.base.is_lowercase(), y.base.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.base.cmp(&y.base),
        };
    }
    a.len().cmp(&b.len())
}

/// Compare two strings the way a person reading a contact list expects.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (decompose(a), decompose(b));

    primary_key(&a)
        .cmp(&primary_key(&b))
        .then_with(|| compare_accents(&a, &b))
        .then_with(|| compare_case(&a, &b))
}
