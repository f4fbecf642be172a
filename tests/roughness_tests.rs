use roughness::alphabet::Alphabet;
use roughness::analysis::columns::split_columns;
use roughness::analysis::frequency::FrequencyTable;
use roughness::analysis::measure::{column_roughness, measure_of_roughness};
use roughness::analysis::scorer::{average_roughness, score_key_length};
use rstest::rstest;

#[rstest]
#[case("AAAAAA", 1.0)] // 6*5 / (6*5)
#[case("ABCDEF", 0.0)]
#[case("AABB", 1.0 / 3.0)] // (2 + 2) / 12
#[case("AAB", 1.0 / 3.0)] // 2 / 6
#[case("AAABBC", 0.2666666666666667)] // (6 + 2) / 30
#[case("A", 0.0)]
#[case("", 0.0)]
fn test_column_roughness(#[case] column: &str, #[case] expected: f64) {
    let mr = column_roughness(column, &Alphabet::latin());
    assert!(
        (mr - expected).abs() < 1e-12,
        "MR of '{}' was {}, expected {}",
        column,
        mr,
        expected
    );
}

#[rstest]
#[case("aaaaaa")]
#[case("AaAaAa")]
fn test_roughness_ignores_case(#[case] column: &str) {
    assert_eq!(column_roughness(column, &Alphabet::latin()), 1.0);
}

#[test]
fn test_roughness_depends_only_on_counts() {
    let alphabet = Alphabet::latin();
    let a = column_roughness("HELLOWORLD", &alphabet);
    let b = column_roughness("DLROWOLLEH", &alphabet);
    let c = column_roughness("LLLOOHEWRD", &alphabet);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_empty_table_is_zero() {
    let alphabet = Alphabet::latin();
    assert_eq!(measure_of_roughness(&FrequencyTable::empty(&alphabet)), 0.0);
}

#[test]
fn test_custom_alphabet_limits_tally() {
    // Only A and B are counted: "AABB" -> 4/12
    let ab = Alphabet::new("AB").unwrap();
    let mr = column_roughness("AAXBBYZ", &ab);
    assert!((mr - 1.0 / 3.0).abs() < 1e-12);
}

#[rstest]
#[case("AABB", 2, 0.0)] // "AB", "AB"
#[case("ABAB", 2, 1.0)] // "AA", "BB"
#[case("A-B A?B", 2, 1.0)] // punctuation does not shift columns
#[case("", 4, 0.0)]
fn test_average_roughness(#[case] text: &str, #[case] k: usize, #[case] expected: f64) {
    let avg = average_roughness(text, k, &Alphabet::latin()).unwrap();
    assert!((avg - expected).abs() < 1e-12, "got {}", avg);
}

#[test]
fn test_score_carries_every_column() {
    let score = score_key_length("ATTACKATDAWN", 4, &Alphabet::latin()).unwrap();
    assert_eq!(score.key_length, 4);
    assert_eq!(score.column_roughness.len(), 4);
    let mean: f64 = score.column_roughness.iter().sum::<f64>() / 4.0;
    assert_eq!(mean, score.average_roughness);
}

#[test]
fn test_sharp_s_expands_within_its_column() {
    // ß is one letter position but uppercases to "SS".
    let columns = split_columns("aßb", 2).unwrap();
    assert_eq!(columns, vec!["AB".to_string(), "SS".to_string()]);

    // Column 1 holds S twice: 2 / 2.
    let score = score_key_length("aßb", 2, &Alphabet::latin()).unwrap();
    assert_eq!(score.column_roughness, vec![0.0, 1.0]);
}
