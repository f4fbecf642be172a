use super::frequency::FrequencyTable;
use crate::alphabet::Alphabet;

/// Measure of Roughness: the probability that two letters drawn without
/// replacement from the column are identical.
///
/// Columns with fewer than two letters score 0.
pub fn measure_of_roughness(table: &FrequencyTable) -> f64 {
    let n = table.total;
    if n < 2 {
        return 0.0;
    }

    let coincidences: u64 = table
        .counts
        .iter()
        .map(|&f| f * f.saturating_sub(1))
        .sum();

    coincidences as f64 / (n * (n - 1)) as f64
}

/// Tally and measure a single column in one step.
pub fn column_roughness(column: &str, alphabet: &Alphabet) -> f64 {
    measure_of_roughness(&FrequencyTable::tally(column, alphabet))
}
