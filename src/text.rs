use crate::error::MrResult;
use std::fs;
use std::path::Path;

/// Removes all whitespace (spaces, line breaks, tabs) from raw ciphertext.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn read_ciphertext<P: AsRef<Path>>(path: P) -> MrResult<String> {
    let raw = fs::read_to_string(path)?;
    Ok(normalize(&raw))
}

pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(normalize("AB C\nD\tE\r\n"), "ABCDE");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(normalize("a, b."), "a,b.");
        assert_eq!(letter_count("a,b."), 2);
    }
}
