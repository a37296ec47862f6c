// ---------------------------------------------------------------------------
// Record – one row of the measurement log
// ---------------------------------------------------------------------------

/// A single power-meter sample (one row of the source file).
///
/// The analyzer logs many channels per sample; only the 12 V back and aux
/// rail pairs are kept here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Back rail current (A).
    pub back_current: f64,
    /// Back rail voltage (V).
    pub back_voltage: f64,
    /// Aux rail current (A).
    pub aux_current: f64,
    /// Aux rail voltage (V).
    pub aux_voltage: f64,
}

impl Record {
    /// Total power drawn across both rails (W).
    pub fn power(&self) -> f64 {
        self.back_voltage * self.back_current + self.aux_voltage * self.aux_current
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded log
// ---------------------------------------------------------------------------

/// The full parsed log with the derived power column.
///
/// Row order follows the file, which in turn is acquisition time order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All samples (rows).
    pub records: Vec<Record>,
    /// Derived total power per record, parallel to `records`.
    /// Empty until [`Dataset::derive_power`] runs.
    pub power: Vec<f64>,
}

impl Dataset {
    /// Wrap loaded records; the power column starts out underived.
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset {
            records,
            power: Vec::new(),
        }
    }

    /// Fill the power column from the voltage/current pairs.
    ///
    /// Recomputes from scratch on every call; the column is never cached
    /// across runs or written back to the source file.
    pub fn derive_power(&mut self) {
        self.power = self.records.iter().map(Record::power).collect();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
