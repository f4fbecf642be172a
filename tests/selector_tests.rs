use roughness::analysis::selector::{select_best, select_best_by};
use roughness::analysis::KeyLengthScore;
use roughness::config::DEFAULT_REFERENCE_ROUGHNESS;
use roughness::error::RoughnessError;
use rstest::rstest;

fn score(key_length: usize, average_roughness: f64) -> KeyLengthScore {
    KeyLengthScore {
        key_length,
        average_roughness,
        column_roughness: vec![average_roughness; key_length],
        distance: None,
    }
}

#[rstest]
#[case(&[3, 5], 3)]
#[case(&[5, 3], 5)]
#[case(&[7, 3, 5], 7)]
fn test_ties_go_to_first(#[case] candidates: &[usize], #[case] expected: usize) {
    let best = select_best_by(candidates, DEFAULT_REFERENCE_ROUGHNESS, |_| Ok(0.05)).unwrap();
    assert_eq!(best, expected);
}

#[rstest]
#[case(0.0686, 2)] // exact hit
#[case(0.0, 1)]
#[case(1.0, 3)]
fn test_closest_to_reference(#[case] reference: f64, #[case] expected: usize) {
    let scores = vec![score(1, 0.04), score(2, 0.0686), score(3, 0.2)];
    assert_eq!(select_best(&scores, reference).unwrap(), expected);
}

#[test]
fn test_overshoot_and_undershoot_compare_by_distance() {
    // 0.75 and 0.25 are exactly 0.25 away from 0.5; first one wins.
    let scores = vec![score(4, 0.75), score(6, 0.25)];
    assert_eq!(select_best(&scores, 0.5).unwrap(), 4);
    let scores = vec![score(6, 0.25), score(4, 0.75)];
    assert_eq!(select_best(&scores, 0.5).unwrap(), 6);
}

#[test]
fn test_empty_inputs() {
    assert!(matches!(
        select_best(&[], DEFAULT_REFERENCE_ROUGHNESS),
        Err(RoughnessError::EmptyCandidateSet)
    ));
    assert!(matches!(
        select_best_by(&[], DEFAULT_REFERENCE_ROUGHNESS, |_| Ok(0.0)),
        Err(RoughnessError::EmptyCandidateSet)
    ));
}

#[test]
fn test_nan_reference_is_reported() {
    let scores = vec![score(1, 0.04)];
    assert!(matches!(
        select_best(&scores, f64::NAN),
        Err(RoughnessError::Config(_))
    ));
}
