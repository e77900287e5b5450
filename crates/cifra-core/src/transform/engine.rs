// Cifra Transform Engine
// Alphabet-aware shift transformer with per-call substitution caching

use std::collections::HashMap;
use std::time::Instant;

use indexmap::IndexMap;

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::canonical::Canonicalizer;
use crate::transform::util::{is_uppercase_char, shifted_index};

/// Configuration for the cipher engine
#[derive(Debug, Clone)]
pub struct CipherConfig {
    /// Alphabets available to `transform`, selected by name at call time
    pub alphabets: Vec<Alphabet>,
    /// Alphabet used when the caller does not name one
    pub default_alphabet: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            alphabets: Alphabet::all_registered(),
            default_alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

/// Per-alphabet engine state: the alphabet plus its canonicalizer.
///
/// The normalization cache lives in the canonicalizer and is keyed per
/// alphabet because the preserved-digraph trait changes the canonical form
/// of the same character.
struct AlphabetState {
    alphabet: Alphabet,
    canonical: Canonicalizer,
}

/// Alphabet-aware Caesar transform engine.
///
/// Owns the per-alphabet normalization caches, which are initialized empty at
/// construction and grow monotonically. All methods take `&self`; a shared
/// engine is usable from several threads concurrently.
pub struct CipherEngine {
    states: IndexMap<String, AlphabetState>,
    default_alphabet: String,
}

impl CipherEngine {
    /// Create an engine from a configuration.
    pub fn new(config: CipherConfig) -> Self {
        let mut states = IndexMap::new();
        for alphabet in config.alphabets {
            let canonical = Canonicalizer::for_alphabet(&alphabet);
            states.insert(
                alphabet.name().to_string(),
                AlphabetState {
                    alphabet,
                    canonical,
                },
            );
        }
        Self {
            states,
            default_alphabet: config.default_alphabet,
        }
    }

    /// Name of the alphabet used when callers do not select one
    pub fn default_alphabet(&self) -> &str {
        &self.default_alphabet
    }

    /// Whether an alphabet name is known to this engine
    pub fn has_alphabet(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// The engine's alphabets, in configuration order
    pub fn alphabets(&self) -> impl Iterator<Item = &Alphabet> {
        self.states.values().map(|state| &state.alphabet)
    }

    /// Apply a signed modular shift to every alphabet letter of `text`.
    ///
    /// Characters outside the alphabet pass through verbatim; case is
    /// restored from the original character. An unknown alphabet name yields
    /// the input unchanged rather than an error. The transform is total and
    /// deterministic for any `shift`, including negative offsets and offsets
    /// larger than the alphabet length.
    pub fn transform(&self, text: &str, shift: i64, alphabet: &str) -> String {
        let Some(state) = self.states.get(alphabet) else {
            log::debug!("transform: unknown alphabet {alphabet}, passing text through");
            return text.to_string();
        };

        let started = Instant::now();
        // Shift and alphabet are fixed for this call, so each distinct source
        // character maps to exactly one output substring.
        let mut seen: HashMap<char, String> = HashMap::new();
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if let Some(part) = seen.get(&ch) {
                out.push_str(part);
                continue;
            }
            let part = Self::substitute(state, ch, shift);
            out.push_str(&part);
            seen.insert(ch, part);
        }
        log::debug!(
            "transform: alphabet {} shift {} done in {:?} ({} unique chars, {} memoized)",
            alphabet,
            shift,
            started.elapsed(),
            seen.len(),
            state.canonical.cached_chars(),
        );
        out
    }

    /// Encrypt: transform with the positive shift.
    pub fn encrypt(&self, text: &str, shift: i64, alphabet: &str) -> String {
        self.transform(text, shift, alphabet)
    }

    /// Decrypt: transform with the negated shift.
    ///
    /// Encrypt and decrypt are exact inverses over canonical text:
    /// `decrypt(encrypt(x, s), s)` equals `canonical_text(x)`, not `x`, when
    /// `x` contained removable diacritics or ligatures.
    pub fn decrypt(&self, text: &str, shift: i64, alphabet: &str) -> String {
        self.transform(text, -shift, alphabet)
    }

    /// Canonical form of `text`: every character reduced to its base-letter
    /// sequence, characters with an empty sequence kept as themselves.
    ///
    /// This is the reference value for round-trip comparison; an unknown
    /// alphabet name passes the text through.
    pub fn canonical_text(&self, text: &str, alphabet: &str) -> String {
        let Some(state) = self.states.get(alphabet) else {
            return text.to_string();
        };
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            let seq = state.canonical.canonical_seq(ch);
            if seq.is_empty() {
                out.push(ch);
            } else {
                out.push_str(&seq);
            }
        }
        out
    }

    fn substitute(state: &AlphabetState, ch: char, shift: i64) -> String {
        let seq = state.canonical.canonical_seq(ch);
        if seq.is_empty() {
            return ch.to_string();
        }

        let alphabet = &state.alphabet;
        let uppercase = is_uppercase_char(ch);
        let mut part = String::with_capacity(seq.len());
        for base in seq.chars() {
            match alphabet.letter_index(base) {
                Some(position) => {
                    let shifted = shifted_index(position, shift, alphabet.len());
                    part.push(alphabet.letter_at(shifted, uppercase));
                }
                None => {
                    // Base letters outside the alphabet pass through, re-cased
                    // to match the original character.
                    if uppercase {
                        part.extend(base.to_uppercase());
                    } else {
                        part.extend(base.to_lowercase());
                    }
                }
            }
        }
        part
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new(CipherConfig::default())
    }
}
