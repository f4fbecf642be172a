use crate::error::{MrResult, RoughnessError};

/// Splits `text` into `key_length` columns of uppercased letters.
///
/// Letter `i` (counting only alphabetic characters) lands in column `i % key_length`.
/// Non-letters are dropped and do not advance the position.
pub fn split_columns(text: &str, key_length: usize) -> MrResult<Vec<String>> {
    if key_length == 0 {
        return Err(RoughnessError::InvalidKeyLength(0));
    }

    let mut columns = vec![String::new(); key_length];
    let letters = text.chars().filter(|c| c.is_alphabetic());

    for (position, letter) in letters.enumerate() {
        columns[position % key_length].extend(letter.to_uppercase());
    }

    Ok(columns)
}
