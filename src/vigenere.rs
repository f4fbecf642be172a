//! Vigenère encryption, used to build ciphertext fixtures with a known period.

use crate::error::{MrResult, RoughnessError};

fn key_shifts(key: &str) -> MrResult<Vec<u8>> {
    if key.is_empty() {
        return Err(RoughnessError::Config("Vigenère key is empty".to_string()));
    }
    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_uppercase() as u8 - b'A')
            } else {
                Err(RoughnessError::Config(format!(
                    "Vigenère key may only contain ASCII letters (found '{}')",
                    c
                )))
            }
        })
        .collect()
}

/// Shifts each ASCII letter of `plaintext` by the matching key letter.
///
/// The key advances only on letters; case is kept and everything else passes
/// through untouched.
pub fn encrypt(plaintext: &str, key: &str) -> MrResult<String> {
    let shifts = key_shifts(key)?;
    let mut position = 0;

    let out = plaintext
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
            let shift = shifts[position % shifts.len()];
            position += 1;
            (base + (c as u8 - base + shift) % 26) as char
        })
        .collect();

    Ok(out)
}

/// Uppercase key of `len` letters, reproducible for a given `seed`.
pub fn random_key(len: usize, seed: u64) -> MrResult<String> {
    if len == 0 {
        return Err(RoughnessError::InvalidKeyLength(0));
    }
    let mut rng = fastrand::Rng::with_seed(seed);
    Ok((0..len).map(|_| rng.uppercase()).collect())
}
