// Cifra Alphabet Registry
// Ordered letter sequences with case tables and preserved-digraph traits

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use parking_lot::RwLock;

/// Global alphabet registry
static ALPHABET_REGISTRY: LazyLock<RwLock<AlphabetRegistry>> =
    LazyLock::new(|| RwLock::new(AlphabetRegistry::with_defaults()));

/// Name of the alphabet used when callers do not select one.
pub const DEFAULT_ALPHABET: &str = "es";

const SPANISH_UPPER: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const ENGLISH_UPPER: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A base letter + combining mark pair that an alphabet keeps as a composed
/// letter of its own instead of stripping the mark.
///
/// The Spanish alphabet preserves n/N followed by a combining tilde as ñ/Ñ,
/// which occupies its own position between N and O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreservedDigraph {
    /// Lowercase base letter as it appears first in a canonical decomposition
    pub base: char,
    /// Combining mark that accompanies the base
    pub mark: char,
    /// Composed lowercase letter to emit
    pub lower: char,
    /// Composed uppercase letter to emit
    pub upper: char,
}

/// Errors raised by alphabet construction
#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet {0} has no letters")]
    Empty(String),

    #[error("alphabet {name}: lower has {lower} letters but upper has {upper}")]
    LengthMismatch {
        name: String,
        lower: usize,
        upper: usize,
    },

    #[error("alphabet {name}: {upper} at position {position} is not the uppercase form of {lower}")]
    CaseMismatch {
        name: String,
        position: usize,
        lower: char,
        upper: char,
    },

    #[error("alphabet {name}: duplicate letter {letter}")]
    DuplicateLetter { name: String, letter: char },
}

/// An ordered, fixed-length sequence of letters with lower and upper forms.
///
/// `lower[i]` and `upper[i]` always denote the same letter; lookup by letter
/// is O(1) and case-insensitive. An alphabet also carries its
/// preserved-digraph configuration, consulted during canonicalization.
#[derive(Debug, Clone)]
pub struct Alphabet {
    name: String,
    lower: Vec<char>,
    upper: Vec<char>,
    index: HashMap<char, usize>,
    preserved: Vec<PreservedDigraph>,
}

/// Internal registry of alphabets, keyed by name in registration order
struct AlphabetRegistry {
    by_name: IndexMap<String, Alphabet>,
}

impl AlphabetRegistry {
    fn empty() -> Self {
        Self {
            by_name: IndexMap::new(),
        }
    }

    fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.add_internal(Alphabet::spanish());
        registry.add_internal(Alphabet::english());
        registry
    }

    fn add_internal(&mut self, alphabet: Alphabet) {
        self.by_name.insert(alphabet.name.clone(), alphabet);
    }
}

impl Alphabet {
    /// Create an alphabet from matching upper and lower letter sequences.
    ///
    /// Validates that the sequences are non-empty, equal in length,
    /// position-wise case-correspondent, and free of duplicate letters.
    pub fn new(
        name: &str,
        upper: &[char],
        lower: &[char],
        preserved: Vec<PreservedDigraph>,
    ) -> Result<Self, AlphabetError> {
        if upper.is_empty() || lower.is_empty() {
            return Err(AlphabetError::Empty(name.to_string()));
        }
        if upper.len() != lower.len() {
            return Err(AlphabetError::LengthMismatch {
                name: name.to_string(),
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        for (position, (&u, &l)) in upper.iter().zip(lower.iter()).enumerate() {
            if !u.to_lowercase().eq(std::iter::once(l)) {
                return Err(AlphabetError::CaseMismatch {
                    name: name.to_string(),
                    position,
                    lower: l,
                    upper: u,
                });
            }
        }
        let alphabet = Self::build(name, upper.to_vec(), lower.to_vec(), preserved);
        if alphabet.index.len() != alphabet.lower.len() {
            let mut seen = HashMap::new();
            for &l in &alphabet.lower {
                if seen.insert(l, ()).is_some() {
                    return Err(AlphabetError::DuplicateLetter {
                        name: name.to_string(),
                        letter: l,
                    });
                }
            }
        }
        Ok(alphabet)
    }

    /// Create an alphabet from its uppercase letters, deriving the lowercase
    /// forms.
    pub fn from_upper(
        name: &str,
        upper: &[char],
        preserved: Vec<PreservedDigraph>,
    ) -> Result<Self, AlphabetError> {
        let lower: Vec<char> = upper
            .iter()
            .map(|&u| u.to_lowercase().next().unwrap_or(u))
            .collect();
        Self::new(name, upper, &lower, preserved)
    }

    /// The built-in 27-letter Spanish alphabet, preserving ñ/Ñ.
    pub fn spanish() -> Self {
        let preserved = vec![PreservedDigraph {
            base: 'n',
            mark: '\u{0303}',
            lower: 'ñ',
            upper: 'Ñ',
        }];
        Self::build_from_upper("es", &SPANISH_UPPER, preserved)
    }

    /// The built-in 26-letter English alphabet, preserving nothing.
    pub fn english() -> Self {
        Self::build_from_upper("en", &ENGLISH_UPPER, Vec::new())
    }

    fn build_from_upper(name: &str, upper: &[char], preserved: Vec<PreservedDigraph>) -> Self {
        let lower: Vec<char> = upper
            .iter()
            .map(|&u| u.to_lowercase().next().unwrap_or(u))
            .collect();
        Self::build(name, upper.to_vec(), lower, preserved)
    }

    fn build(
        name: &str,
        upper: Vec<char>,
        lower: Vec<char>,
        preserved: Vec<PreservedDigraph>,
    ) -> Self {
        let index = lower
            .iter()
            .enumerate()
            .map(|(position, &letter)| (letter, position))
            .collect();
        Self {
            name: name.to_string(),
            lower,
            upper,
            index,
            preserved,
        }
    }

    /// Look up a registered alphabet by name.
    pub fn from_name(name: &str) -> Option<Alphabet> {
        ALPHABET_REGISTRY.read().by_name.get(name).cloned()
    }

    /// Register an alphabet, replacing any previous one with the same name.
    ///
    /// Engines snapshot the registry at construction time; registration after
    /// an engine exists does not affect it.
    pub fn register(self) {
        ALPHABET_REGISTRY.write().add_internal(self);
    }

    /// All registered alphabets, in registration order.
    pub fn all_registered() -> Vec<Alphabet> {
        ALPHABET_REGISTRY.read().by_name.values().cloned().collect()
    }

    /// Alphabet name used for call-time selection
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Always false; construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Position of a base letter, queried case-insensitively.
    pub fn letter_index(&self, letter: char) -> Option<usize> {
        let lowered = letter.to_lowercase().next().unwrap_or(letter);
        self.index.get(&lowered).copied()
    }

    /// Letter at a position, in the requested case.
    ///
    /// A position outside `[0, len)` is a contract violation and panics;
    /// callers reach this through wrapped shift arithmetic that cannot
    /// produce one.
    pub fn letter_at(&self, position: usize, uppercase: bool) -> char {
        if uppercase {
            self.upper[position]
        } else {
            self.lower[position]
        }
    }

    /// Preserved-digraph configuration for this alphabet
    pub fn preserved(&self) -> &[PreservedDigraph] {
        &self.preserved
    }
}
