//! Masking of sensitive values for display.
//!
//! A masked value keeps its length and, past four characters, its first and
//! last two characters. Lengths are counted in `char`s so multi-byte values
//! are never split.

use crate::core::constants::{MASK_CHAR, MASK_KEEP};

/// Mask a sensitive value.
///
/// Values of up to four characters are fully masked; longer ones keep two
/// characters at each end. The empty string stays empty.
///
/// ```
/// use sopsenv::core::mask::mask;
///
/// assert_eq!(mask("abc"), "***");
/// assert_eq!(mask("super_secret"), "su********et");
/// ```
pub fn mask(value: &str) -> String {
    let len = value.chars().count();

    if len <= MASK_KEEP * 2 {
        return MASK_CHAR.to_string().repeat(len);
    }

    let mut out = String::with_capacity(value.len());
    for (i, ch) in value.chars().enumerate() {
        if i < MASK_KEEP || i >= len - MASK_KEEP {
            out.push(ch);
        } else {
            out.push(MASK_CHAR);
        }
    }
    out
}
