use std::io::{self, Write};

use crate::data::summary::PowerSummary;

// ---------------------------------------------------------------------------
// Console report
// ---------------------------------------------------------------------------

const COLUMNS: [&str; 5] = [
    "back_current",
    "back_voltage",
    "aux_current",
    "aux_voltage",
    "power",
];

/// Cell width of the preview table.
const WIDTH: usize = 14;

/// Write the report to standard output: preview table, then the average and
/// maximum power lines.
pub fn print(summary: &PowerSummary) -> io::Result<()> {
    let stdout = io::stdout();
    render(summary, &mut stdout.lock())
}

/// Render the three report sections into `out`.
pub fn render<W: Write>(summary: &PowerSummary, out: &mut W) -> io::Result<()> {
    // Section 1: preview table (dataframe-style head).
    write!(out, "{:>4}", "")?;
    for name in COLUMNS {
        write!(out, " {name:>WIDTH$}")?;
    }
    writeln!(out)?;

    for (i, row) in summary.preview.iter().enumerate() {
        let r = &row.record;
        write!(out, "{i:>4}")?;
        for value in [
            r.back_current,
            r.back_voltage,
            r.aux_current,
            r.aux_voltage,
            row.power,
        ] {
            write!(out, " {value:>WIDTH$.4}")?;
        }
        writeln!(out)?;
    }

    // Sections 2 and 3: the headline statistics.
    writeln!(out, "Average: {}", summary.mean)?;
    writeln!(out, "Max: {}", summary.max)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dataset, Record};
    use crate::data::summary::summarize;

    fn rendered(rows: &[(f64, f64, f64, f64)]) -> String {
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
        let summary = summarize(&dataset).unwrap();

        let mut out = Vec::new();
        render(&summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_has_header_preview_and_stat_lines() {
        let text = rendered(&[(1.0, 2.0, 3.0, 4.0), (0.0, 0.0, 5.0, 6.0)]);
        let lines: Vec<&str> = text.lines().collect();

        // header + 2 preview rows + Average + Max
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("back_current"));
        assert!(lines[0].contains("power"));
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[1].contains("14.0000"));
        assert!(lines[2].contains("30.0000"));
        assert_eq!(lines[3], "Average: 22");
        assert_eq!(lines[4], "Max: 30");
    }

    #[test]
    fn preview_never_exceeds_five_rows() {
        let rows: Vec<_> = (0..9).map(|i| (i as f64, 1.0, 0.0, 0.0)).collect();
        let text = rendered(&rows);

        // header + 5 preview rows + Average + Max
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn non_integral_mean_is_printed_in_full() {
        let text = rendered(&[(1.0, 1.0, 0.0, 0.0), (2.0, 1.0, 0.0, 0.0)]);
        assert!(text.contains("Average: 1.5"));
        assert!(text.contains("Max: 2"));
    }
}
