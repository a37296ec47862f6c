use thiserror::Error;

use super::model::{Dataset, Record};

/// How many leading rows the preview shows.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// One preview row: the original channels plus the derived power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRow {
    pub record: Record,
    pub power: f64,
}

/// Descriptive statistics over the derived power column.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSummary {
    /// First `min(5, len)` rows in file order.
    pub preview: Vec<PreviewRow>,
    /// Arithmetic mean of power over all records (W).
    pub mean: f64,
    /// Largest power value over all records (W).
    pub max: f64,
}

/// Statistics over zero records are undefined, so an empty dataset is an
/// error rather than a NaN or sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("dataset contains no records")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

/// Compute preview, mean, and max over a derived dataset.
///
/// Expects [`Dataset::derive_power`] to have run; the power column must be
/// parallel to the records.
pub fn summarize(dataset: &Dataset) -> Result<PowerSummary, SummaryError> {
    if dataset.is_empty() {
        return Err(SummaryError::EmptyDataset);
    }
    debug_assert_eq!(
        dataset.power.len(),
        dataset.records.len(),
        "summarize called before derive_power"
    );

    let count = dataset.power.len() as f64;
    let mean = dataset.power.iter().sum::<f64>() / count;
    let max = dataset
        .power
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let preview = dataset
        .records
        .iter()
        .zip(&dataset.power)
        .take(PREVIEW_ROWS)
        .map(|(&record, &power)| PreviewRow { record, power })
        .collect();

    Ok(PowerSummary { preview, mean, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_of(rows: &[(f64, f64, f64, f64)]) -> Dataset {
        let records = rows
            .iter()
            .map(|&(back_current, back_voltage, aux_current, aux_voltage)| Record {
                back_current,
                back_voltage,
                aux_current,
                aux_voltage,
            })
            .collect();
        let mut dataset = Dataset::from_records(records);
        dataset.derive_power();
        dataset
    }

    #[test]
    fn mean_and_max_over_two_rows() {
        // powers: 1*2 + 3*4 = 14 and 0*0 + 5*6 = 30
        let dataset = dataset_of(&[(1.0, 2.0, 3.0, 4.0), (0.0, 0.0, 5.0, 6.0)]);
        let summary = summarize(&dataset).unwrap();

        assert_eq!(summary.mean, 22.0);
        assert_eq!(summary.max, 30.0);
    }

    #[test]
    fn mean_is_sum_over_count() {
        let dataset = dataset_of(&[
            (1.0, 1.0, 0.0, 0.0),
            (2.0, 1.0, 0.0, 0.0),
            (3.0, 1.0, 0.0, 0.0),
        ]);
        let summary = summarize(&dataset).unwrap();

        let expected = dataset.power.iter().sum::<f64>() / dataset.len() as f64;
        assert!((summary.mean - expected).abs() < 1e-12);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn tied_maximum_reports_the_value() {
        let dataset = dataset_of(&[(1.0, 3.0, 0.0, 0.0), (3.0, 1.0, 0.0, 0.0)]);
        let summary = summarize(&dataset).unwrap();
        assert_eq!(summary.max, 3.0);
    }

    #[test]
    fn preview_is_capped_at_five_rows_in_order() {
        let rows: Vec<_> = (0..8).map(|i| (i as f64, 1.0, 0.0, 0.0)).collect();
        let dataset = dataset_of(&rows);
        let summary = summarize(&dataset).unwrap();

        assert_eq!(summary.preview.len(), PREVIEW_ROWS);
        for (i, row) in summary.preview.iter().enumerate() {
            assert_eq!(row.record.back_current, i as f64);
            assert_eq!(row.power, i as f64);
        }
    }

    #[test]
    fn short_dataset_previews_everything() {
        let dataset = dataset_of(&[(1.0, 2.0, 3.0, 4.0), (0.0, 0.0, 5.0, 6.0)]);
        let summary = summarize(&dataset).unwrap();

        assert_eq!(summary.preview.len(), 2);
        assert_eq!(summary.preview[0].power, 14.0);
        assert_eq!(summary.preview[1].power, 30.0);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let dataset = dataset_of(&[]);
        assert_eq!(summarize(&dataset), Err(SummaryError::EmptyDataset));
    }
}
