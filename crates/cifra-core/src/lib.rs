// Cifra Core Library
// Alphabet-aware Caesar transforms over canonicalized text

pub mod alphabet;
pub mod canonical;
pub mod fixture;
pub mod transform;

pub use alphabet::{Alphabet, AlphabetError, PreservedDigraph, DEFAULT_ALPHABET};
pub use canonical::Canonicalizer;
pub use fixture::{FixtureCase, FixtureError, FixtureFile};
pub use transform::engine::{CipherConfig, CipherEngine};
pub use transform::util::{is_uppercase_char, shifted_index};

use std::sync::LazyLock;

/// Process-wide engine backing the crate-level convenience functions.
///
/// Snapshots the alphabet registry on first use; its normalization caches are
/// shared by every call through the facade.
static DEFAULT_ENGINE: LazyLock<CipherEngine> =
    LazyLock::new(|| CipherEngine::new(CipherConfig::default()));

/// Encrypt `text` with the default engine.
///
/// `None` selects the default alphabet (`es`).
pub fn encrypt(text: &str, shift: i64, alphabet: Option<&str>) -> String {
    let engine = &*DEFAULT_ENGINE;
    engine.encrypt(text, shift, alphabet.unwrap_or(engine.default_alphabet()))
}

/// Decrypt `text` with the default engine.
///
/// `None` selects the default alphabet (`es`).
pub fn decrypt(text: &str, shift: i64, alphabet: Option<&str>) -> String {
    let engine = &*DEFAULT_ENGINE;
    engine.decrypt(text, shift, alphabet.unwrap_or(engine.default_alphabet()))
}
