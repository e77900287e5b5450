// Cifra Transform Utility Functions
// Pure functions for case detection and modular shift arithmetic

/// Whether a character counts as uppercase for case restoration.
///
/// A character is uppercase when uppercasing it is a no-op AND lowercasing it
/// changes it. The second condition excludes case-less characters (digits,
/// punctuation, spaces), which map to themselves in both directions.
///
/// # Arguments
/// * `ch` - The original source character, before canonicalization
///
/// # Returns
/// `true` if output letters derived from `ch` should be rendered uppercase
pub fn is_uppercase_char(ch: char) -> bool {
    ch.to_uppercase().eq(std::iter::once(ch)) && !ch.to_lowercase().eq(std::iter::once(ch))
}

/// Shift an alphabet position by a signed offset, wrapping within `len`.
///
/// The result is always in `[0, len)` for any offset: negative, zero, or
/// larger than the alphabet length.
///
/// # Arguments
/// * `position` - Current position of the letter, `< len`
/// * `shift` - Signed offset to apply
/// * `len` - Alphabet length, never zero
pub fn shifted_index(position: usize, shift: i64, len: usize) -> usize {
    (position as i128 + shift as i128).rem_euclid(len as i128) as usize
}
