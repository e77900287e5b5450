// Cifra Canonicalizer
// Reduces arbitrary characters to alphabet base-letter sequences

use std::collections::HashMap;

use parking_lot::RwLock;
use smallvec::SmallVec;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::alphabet::{Alphabet, PreservedDigraph};

/// Expansion for a ligature character, if the character is one.
///
/// Static and process-wide; expansions never re-enter the table.
fn expand_ligature(ch: char) -> Option<&'static str> {
    let expansion = match ch {
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'ß' => "ss",
        _ => return None,
    };
    Some(expansion)
}

/// Per-alphabet canonicalizer with a memoized character cache.
///
/// Maps one source character to its base-letter sequence: empty for
/// characters that pass through unshifted (combining marks on their own),
/// one letter for an ordinary accented letter, two or more for an expanded
/// ligature. Ligature expansion runs before diacritic analysis.
///
/// The cache grows monotonically for the canonicalizer's lifetime and is
/// purely an optimization; removing it changes latency, never output.
/// Lookups take the read lock, misses take the write lock; a duplicated
/// computation under a racing miss is harmless.
pub struct Canonicalizer {
    preserved: Vec<PreservedDigraph>,
    cache: RwLock<HashMap<char, String>>,
}

impl Canonicalizer {
    /// Create a canonicalizer with an explicit preserved-digraph set.
    pub fn new(preserved: Vec<PreservedDigraph>) -> Self {
        Self {
            preserved,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a canonicalizer carrying an alphabet's preservation trait.
    pub fn for_alphabet(alphabet: &Alphabet) -> Self {
        Self::new(alphabet.preserved().to_vec())
    }

    /// Canonical base-letter sequence for `ch`.
    pub fn canonical_seq(&self, ch: char) -> String {
        if let Some(hit) = self.cache.read().get(&ch) {
            return hit.clone();
        }
        let computed = self.compute(ch);
        self.cache
            .write()
            .entry(ch)
            .or_insert_with(|| computed.clone());
        computed
    }

    /// Number of distinct characters memoized so far
    pub fn cached_chars(&self) -> usize {
        self.cache.read().len()
    }

    fn compute(&self, ch: char) -> String {
        let mut out = String::new();
        match expand_ligature(ch) {
            Some(expansion) => {
                for part in expansion.chars() {
                    self.strip_or_preserve(part, &mut out);
                }
            }
            None => self.strip_or_preserve(ch, &mut out),
        }
        out
    }

    fn strip_or_preserve(&self, ch: char, out: &mut String) {
        let decomposed: SmallVec<[char; 4]> = ch.nfd().collect();
        if let Some(digraph) = self.preserved_match(&decomposed) {
            // Composed letter case follows the base letter, not the mark.
            if decomposed[0].is_uppercase() {
                out.push(digraph.upper);
            } else {
                out.push(digraph.lower);
            }
            return;
        }
        out.extend(decomposed.iter().copied().filter(|&c| !is_combining_mark(c)));
    }

    fn preserved_match(&self, decomposed: &[char]) -> Option<&PreservedDigraph> {
        if decomposed.len() < 2 {
            return None;
        }
        let base = decomposed[0];
        self.preserved.iter().find(|digraph| {
            base.to_lowercase().next() == Some(digraph.base)
                && decomposed[1..].contains(&digraph.mark)
        })
    }
}
