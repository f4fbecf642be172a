#![allow(dead_code)]

use roughness::analysis::KeyLengthReport;
use roughness::vigenere;

pub const PANGRAM: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

/// Opening of A Tale of Two Cities, lowercase words separated by spaces.
pub const DICKENS: &str = "It was the best of times it was the worst of times it was the age of wisdom \
it was the age of foolishness it was the epoch of belief it was the epoch of incredulity \
it was the season of light it was the season of darkness it was the spring of hope \
it was the winter of despair we had everything before us we had nothing before us \
we were all going direct to heaven we were all going direct the other way";

pub fn pangram_times(n: usize) -> String {
    PANGRAM.repeat(n)
}

/// Encrypts `plaintext` and strips whitespace, the way ciphertext reaches the core.
pub fn fixture(plaintext: &str, key: &str) -> String {
    let ct = vigenere::encrypt(plaintext, key).expect("fixture key must be valid");
    roughness::text::normalize(&ct)
}

pub fn score_of(report: &KeyLengthReport, key_length: usize) -> f64 {
    report
        .scores
        .iter()
        .find(|s| s.key_length == key_length)
        .map(|s| s.average_roughness)
        .expect("candidate missing from report")
}
