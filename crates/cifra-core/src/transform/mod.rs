// Cifra Transform Module
// Shift transformation over canonicalized text

pub mod engine;
pub mod util;

pub use engine::{CipherConfig, CipherEngine};
pub use util::{is_uppercase_char, shifted_index};
