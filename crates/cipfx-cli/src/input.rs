//! Observation CSV reader.

use std::path::Path;

use cipfx_core::Date;
use cipfx_engine::{SwapObservation, Tenor};

use crate::columns::ColumnMapping;
use crate::error::{CliError, CliResult};

/// Observations read from one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationFile {
    /// Tenor of every observation in the file.
    pub tenor: Tenor,
    /// Header of the reference rate column.
    pub reference_column: String,
    /// Rows in file order.
    pub observations: Vec<SwapObservation>,
}

/// Reads observations from a CSV file with a header row.
///
/// `tenor` takes precedence over a tenor-prefixed reference rate header.
/// Blank rows are skipped; any unparseable cell fails the whole file.
pub fn read_observations(
    path: &Path,
    mapping: &ColumnMapping,
    tenor: Option<Tenor>,
) -> CliResult<ObservationFile> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let names: Vec<&str> = headers.iter().collect();
    let columns = mapping.resolve(&names, tenor)?;
    let tenor = tenor.or(columns.header_tenor).ok_or(CliError::UnknownTenor)?;

    let cell = |record: &csv::StringRecord, index: usize| -> CliResult<String> {
        let line = record.position().map_or(0, |p| p.line());
        record
            .get(index)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CliError::InvalidValue {
                path: path.to_path_buf(),
                line,
                column: headers[index].to_string(),
                value: String::new(),
            })
    };
    let number = |record: &csv::StringRecord, index: usize| -> CliResult<f64> {
        let raw = cell(record, index)?;
        raw.parse::<f64>().map_err(|_| CliError::InvalidValue {
            path: path.to_path_buf(),
            line: record.position().map_or(0, |p| p.line()),
            column: headers[index].to_string(),
            value: raw,
        })
    };

    let mut observations = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let raw_date = cell(&record, columns.date)?;
        let trade_date = Date::parse(&raw_date).map_err(|_| CliError::InvalidValue {
            path: path.to_path_buf(),
            line: record.position().map_or(0, |p| p.line()),
            column: headers[columns.date].to_string(),
            value: raw_date.clone(),
        })?;

        observations.push(SwapObservation::new(
            trade_date,
            number(&record, columns.reference_rate)?,
            number(&record, columns.spot)?,
            number(&record, columns.forward_points)?,
        ));
    }

    tracing::debug!(
        path = %path.display(),
        rows = observations.len(),
        tenor = %tenor,
        reference_column = &headers[columns.reference_rate],
        "Read observations"
    );

    Ok(ObservationFile {
        tenor,
        reference_column: headers[columns.reference_rate].to_string(),
        observations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_rows_and_header_tenor() {
        let file = write_csv(
            "Date,3mSOFR,USDSGD_FX,Forward Points\n\
             2026-01-02,3.6512,1.3450,-80.1\n\
             ,,,\n\
             2026-01-05, 3.6498 ,1.3455,-79.6\n",
        );

        let parsed = read_observations(file.path(), &ColumnMapping::default(), None).unwrap();
        assert_eq!(parsed.tenor, Tenor::ThreeMonths);
        assert_eq!(parsed.reference_column, "3mSOFR");
        assert_eq!(parsed.observations.len(), 2);
        assert_eq!(parsed.observations[1].reference_rate_pct, 3.6498);
        assert_eq!(parsed.observations[1].forward_points_pips, -79.6);
    }

    #[test]
    fn test_explicit_tenor_wins() {
        let file = write_csv("Date,SOFR,Spot,Forward Points\n2026-01-02,3.6,1.34,-20\n");
        let parsed =
            read_observations(file.path(), &ColumnMapping::default(), Some(Tenor::SixMonths))
                .unwrap();
        assert_eq!(parsed.tenor, Tenor::SixMonths);

        let err = read_observations(file.path(), &ColumnMapping::default(), None).unwrap_err();
        assert!(matches!(err, CliError::UnknownTenor));
    }

    #[test]
    fn test_bad_cell_names_line_and_column() {
        let file = write_csv(
            "Date,1mSOFR,Spot,Forward Points\n\
             2026-01-02,3.6,1.34,-20\n\
             2026-01-05,3.6,n/a,-20\n",
        );
        let err = read_observations(file.path(), &ColumnMapping::default(), None).unwrap_err();
        match err {
            CliError::InvalidValue {
                line, column, value, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Spot");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bad_date() {
        let file = write_csv("Date,1mSOFR,Spot,Forward Points\n02/01/2026,3.6,1.34,-20\n");
        let err = read_observations(file.path(), &ColumnMapping::default(), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { line: 2, .. }));
    }
}
