//! CSV batch conversion
//!
//! Reads every record up front, converts the Kantec column row by row and
//! only then writes anything, so a fatal problem with the input never leaves
//! a partial output file behind.

use anyhow::{bail, Context, Result};
use paxconv_core::{ConvertError, PaxtonId};
use std::io::{Read, Write};
use tracing::debug;

/// Default name of the input column holding Kantec card numbers
pub const DEFAULT_KANTEC_COLUMN: &str = "Kantec";

/// Default name of the output column receiving Paxton10 card numbers
pub const DEFAULT_PAXTON_COLUMN: &str = "Paxton";

/// Prefix of the output cell for a row that failed to convert
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Column names used by a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Column to read Kantec card numbers from
    pub kantec_column: String,
    /// Column to write Paxton10 card numbers to (appended if absent)
    pub paxton_column: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            kantec_column: DEFAULT_KANTEC_COLUMN.to_string(),
            paxton_column: DEFAULT_PAXTON_COLUMN.to_string(),
        }
    }
}

/// Result of converting one row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Converted successfully
    Converted(PaxtonId),
    /// Conversion failed; the row is kept with an error cell
    Failed(ConvertError),
    /// The Kantec cell was empty
    Blank,
}

impl RowOutcome {
    /// Text written to the Paxton column
    pub fn cell(&self) -> String {
        match self {
            RowOutcome::Converted(id) => id.to_string(),
            RowOutcome::Failed(e) => format!("{}{}", ERROR_PREFIX, e),
            RowOutcome::Blank => String::new(),
        }
    }
}

/// One input record with its conversion outcome
#[derive(Debug, Clone)]
pub struct ConversionRow {
    /// Row number in the input file, the header being row 1
    pub row_number: usize,
    /// Trimmed Kantec cell
    pub kantec: String,
    /// Every field of the input record, untouched
    pub record: csv::StringRecord,
    /// What happened to this row
    pub outcome: RowOutcome,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Data rows read
    pub total: usize,
    /// Rows with a Paxton10 card number
    pub converted: usize,
    /// Rows with an `ERROR:` cell
    pub failed: usize,
    /// Rows with an empty Kantec cell
    pub blank: usize,
}

/// A fully converted CSV input, ready to be written
#[derive(Debug, Clone)]
pub struct ConversionBatch {
    input_headers: csv::StringRecord,
    output_headers: csv::StringRecord,
    paxton_index: usize,
    rows: Vec<ConversionRow>,
}

impl ConversionBatch {
    /// Header row of the output
    pub fn headers(&self) -> &csv::StringRecord {
        &self.output_headers
    }

    /// Converted rows, in input order
    pub fn rows(&self) -> &[ConversionRow] {
        &self.rows
    }

    /// Rows that failed to convert
    pub fn failures(&self) -> impl Iterator<Item = &ConversionRow> {
        self.rows
            .iter()
            .filter(|row| matches!(row.outcome, RowOutcome::Failed(_)))
    }

    /// Tally the row outcomes
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.rows.len(),
            ..Default::default()
        };

        for row in &self.rows {
            match row.outcome {
                RowOutcome::Converted(_) => summary.converted += 1,
                RowOutcome::Failed(_) => summary.failed += 1,
                RowOutcome::Blank => summary.blank += 1,
            }
        }

        summary
    }

    /// Output record for a row: input fields plus the Paxton cell
    pub fn output_record(&self, row: &ConversionRow) -> csv::StringRecord {
        let cell = row.outcome.cell();
        let mut record = csv::StringRecord::with_capacity(0, self.output_headers.len());

        for (i, field) in row.record.iter().enumerate() {
            if i == self.paxton_index {
                record.push_field(&cell);
            } else {
                record.push_field(field);
            }
        }
        if self.paxton_index >= self.input_headers.len() {
            record.push_field(&cell);
        }

        record
    }

    /// Write headers and rows as CSV
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(&self.output_headers)
            .context("Failed to write CSV header")?;

        for row in &self.rows {
            wtr.write_record(&self.output_record(row))
                .with_context(|| format!("Failed to write row {}", row.row_number))?;
        }

        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

/// Read CSV input and convert the Kantec column of every row
///
/// `on_row` is called once per row, whatever its outcome, in input order.
pub fn convert_reader<R, F>(reader: R, options: &BatchOptions, mut on_row: F) -> Result<ConversionBatch>
where
    R: Read,
    F: FnMut(&ConversionRow),
{
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let input_headers = rdr.headers().context("Failed to read CSV header")?.clone();
    if input_headers.is_empty() {
        bail!("Input CSV file is empty or has no headers");
    }

    let kantec_index = match input_headers
        .iter()
        .position(|h| h == options.kantec_column)
    {
        Some(index) => index,
        None => bail!(
            "Column '{}' not found in CSV. Available columns: {}",
            options.kantec_column,
            input_headers.iter().collect::<Vec<_>>().join(", ")
        ),
    };

    let mut output_headers = input_headers.clone();
    let paxton_index = match input_headers
        .iter()
        .position(|h| h == options.paxton_column)
    {
        Some(index) => {
            debug!("Overwriting existing column '{}'", options.paxton_column);
            index
        }
        None => {
            output_headers.push_field(&options.paxton_column);
            input_headers.len()
        }
    };

    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row_number = i + 2;
        let record = result.with_context(|| format!("Failed to read CSV row {}", row_number))?;
        let kantec = record.get(kantec_index).unwrap_or_default().trim().to_string();

        let outcome = if kantec.is_empty() {
            RowOutcome::Blank
        } else {
            match paxconv_core::convert(&kantec) {
                Ok(id) => RowOutcome::Converted(id),
                Err(e) => {
                    debug!("Row {}: {} - {}", row_number, kantec, e);
                    RowOutcome::Failed(e)
                }
            }
        };

        let row = ConversionRow {
            row_number,
            kantec,
            record,
            outcome,
        };
        on_row(&row);
        rows.push(row);
    }

    Ok(ConversionBatch {
        input_headers,
        output_headers,
        paxton_index,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> ConversionBatch {
        convert_reader(input.as_bytes(), &BatchOptions::default(), |_| {}).unwrap()
    }

    fn write(batch: &ConversionBatch) -> String {
        let mut out = Vec::new();
        batch.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_converts_and_appends_column() {
        let batch = run("Name,Kantec\nAlice,4D:52042\nBob,35:46655\n");

        assert_eq!(
            write(&batch),
            "Name,Kantec,Paxton\n\
             Alice,4D:52042,9716ABCDEFZ82Z014ACB4D139716\n\
             Bob,35:46655,9716ABCDEFZ82Z013FB635179716\n"
        );
        assert_eq!(
            batch.summary(),
            BatchSummary {
                total: 2,
                converted: 2,
                failed: 0,
                blank: 0
            }
        );
    }

    #[test]
    fn test_failed_row_keeps_other_fields() {
        let batch = run("Kantec,Door\nZZ:99999,Main\n4D:52042,Side\n");
        let rows = batch.rows();

        assert!(matches!(rows[0].outcome, RowOutcome::Failed(ref e) if e.is_format()));
        assert_eq!(
            batch.output_record(&rows[0]).iter().collect::<Vec<_>>(),
            vec!["ZZ:99999", "Main", "ERROR: Invalid hex facility code 'ZZ'"]
        );
        assert_eq!(batch.failures().count(), 1);
        assert_eq!(batch.failures().next().unwrap().row_number, 2);
    }

    #[test]
    fn test_blank_cell_left_empty() {
        let batch = run("Kantec,Note\n,empty\n  ,spaces\n");

        assert_eq!(batch.summary().blank, 2);
        assert_eq!(batch.rows()[1].outcome.cell(), "");
        assert!(write(&batch).starts_with("Kantec,Note,Paxton\n,empty,\n"));
    }

    #[test]
    fn test_existing_paxton_column_overwritten() {
        let batch = run("Paxton,Kantec\nold,4D:52042\n");

        assert_eq!(batch.headers().len(), 2);
        assert_eq!(
            write(&batch),
            "Paxton,Kantec\n9716ABCDEFZ82Z014ACB4D139716,4D:52042\n"
        );
    }

    #[test]
    fn test_quoted_fields_preserved() {
        let batch = run("Name,Kantec\n\"Smith, J\",4D:52042\n");

        assert_eq!(batch.rows()[0].record.get(0), Some("Smith, J"));
        assert!(write(&batch).contains("\"Smith, J\""));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let err = convert_reader(
            "Name,Card\nAlice,4D:52042\n".as_bytes(),
            &BatchOptions::default(),
            |_| {},
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Column 'Kantec' not found in CSV. Available columns: Name, Card"
        );
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = convert_reader("".as_bytes(), &BatchOptions::default(), |_| {}).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let result = convert_reader(
            "Name,Kantec\nAlice,4D:52042,extra\n".as_bytes(),
            &BatchOptions::default(),
            |_| {},
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_columns_and_observer() {
        let options = BatchOptions {
            kantec_column: "Card".to_string(),
            paxton_column: "P10".to_string(),
        };
        let mut seen = Vec::new();
        let batch = convert_reader("Card\n4D:52042\n".as_bytes(), &options, |row| {
            seen.push(row.row_number)
        })
        .unwrap();

        assert_eq!(seen, vec![2]);
        assert_eq!(batch.headers().iter().collect::<Vec<_>>(), vec!["Card", "P10"]);
    }

    #[test]
    fn test_observer_sees_every_row() {
        let mut seen = Vec::new();
        convert_reader(
            "Kantec\n4D:52042\nZZ:1\n\"\"\n".as_bytes(),
            &BatchOptions::default(),
            |row| seen.push((row.row_number, row.outcome.cell().is_empty())),
        )
        .unwrap();

        assert_eq!(seen, vec![(2, false), (3, false), (4, true)]);
    }
}
