//! CSV-backed results store.
//!
//! Reads the joined WCA results export (one row per competitor per round,
//! with the competition date flattened in) and indexes it in memory by
//! (person, event). The file is produced by joining the official
//! `Results.tsv` and `Competitions.tsv` dumps; expected header:
//!
//! `personId,eventId,year,month,day,value1,value2,value3,value4,value5`

use super::provider::{DataError, ResultsProvider};
use crate::domain::{AttemptRecord, WcaId};
use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ResultsRow {
    #[serde(rename = "personId")]
    person_id: String,
    #[serde(rename = "eventId")]
    event_id: String,
    year: i32,
    month: u32,
    day: u32,
    value1: i32,
    value2: i32,
    value3: i32,
    value4: i32,
    value5: i32,
}

/// In-memory index over the joined results export.
#[derive(Debug)]
pub struct CsvResultsStore {
    index: HashMap<(String, String), Vec<AttemptRecord>>,
    /// Lookback windows are measured back from this date.
    as_of: NaiveDate,
}

impl CsvResultsStore {
    /// Load and index the joined results CSV, with lookback windows anchored
    /// at today.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::open_as_of(path, chrono::Local::now().date_naive())
    }

    /// Load with an explicit anchor date. Tests use this to keep lookback
    /// filtering reproducible.
    pub fn open_as_of(path: impl AsRef<Path>, as_of: NaiveDate) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::MissingResultsFile {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut index: HashMap<(String, String), Vec<AttemptRecord>> = HashMap::new();

        for (i, result) in reader.deserialize::<ResultsRow>().enumerate() {
            // +2: one for the header row, one for 1-based numbering.
            let line = i as u64 + 2;
            let row = result.map_err(|e| DataError::MalformedRow {
                line: e.position().map(|p| p.line()).unwrap_or(line),
                reason: e.to_string(),
            })?;

            let date = NaiveDate::from_ymd_opt(row.year, row.month, row.day).ok_or_else(|| {
                DataError::MalformedRow {
                    line,
                    reason: format!(
                        "invalid competition date {}-{}-{}",
                        row.year, row.month, row.day
                    ),
                }
            })?;

            let record = AttemptRecord::new(
                [row.value1, row.value2, row.value3, row.value4, row.value5],
                date,
            );
            index
                .entry((row.person_id, row.event_id))
                .or_default()
                .push(record);
        }

        for records in index.values_mut() {
            records.sort_by_key(|r| r.date);
        }

        Ok(Self { index, as_of })
    }

    pub fn row_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }
}

impl ResultsProvider for CsvResultsStore {
    fn name(&self) -> &str {
        "csv_results_store"
    }

    fn attempt_history(
        &self,
        event: &str,
        competitor: &WcaId,
        lookback_days: i64,
    ) -> Result<Vec<AttemptRecord>, DataError> {
        let key = (competitor.as_str().to_string(), event.to_string());
        let records = match self.index.get(&key) {
            Some(records) => records,
            None => return Ok(Vec::new()),
        };

        let cutoff = self.as_of - Duration::days(lookback_days);
        Ok(records
            .iter()
            .filter(|r| r.date > cutoff)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "personId,eventId,year,month,day,value1,value2,value3,value4,value5";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let err = CsvResultsStore::open("/nonexistent/results.csv").unwrap_err();
        assert!(matches!(err, DataError::MissingResultsFile { .. }));
    }

    #[test]
    fn indexes_by_person_and_event() {
        let file = write_csv(&[
            "2015TEST01,333,2024,3,10,600,650,-1,700,620",
            "2015TEST01,444,2024,3,10,4000,4100,4200,4300,4400",
            "2019XXXX02,333,2024,4,2,800,810,820,830,840",
        ]);
        let store = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap();
        assert_eq!(store.row_count(), 3);

        let history = store
            .attempt_history("333", &WcaId::new("2015TEST01"), 365)
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].attempts, [600, 650, -1, 700, 620]);
    }

    #[test]
    fn unknown_competitor_yields_empty_not_error() {
        let file = write_csv(&["2015TEST01,333,2024,3,10,600,650,660,700,620"]);
        let store = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap();
        let history = store
            .attempt_history("333", &WcaId::new("1982NOPE01"), 365)
            .unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn lookback_window_filters_old_rounds() {
        let file = write_csv(&[
            "2015TEST01,333,2022,1,15,900,910,920,930,940",
            "2015TEST01,333,2024,5,20,600,610,620,630,640",
        ]);
        let store = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap();

        let recent = store
            .attempt_history("333", &WcaId::new("2015TEST01"), 365)
            .unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].attempts[0], 600);

        let all = store
            .attempt_history("333", &WcaId::new("2015TEST01"), 3650)
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn history_is_ordered_by_date_ascending() {
        let file = write_csv(&[
            "2015TEST01,333,2024,5,20,600,610,620,630,640",
            "2015TEST01,333,2024,1,15,900,910,920,930,940",
        ]);
        let store = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap();
        let history = store
            .attempt_history("333", &WcaId::new("2015TEST01"), 365)
            .unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].date < history[1].date);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let file = write_csv(&["2015TEST01,333,2024,3,10,notanumber,650,660,700,620"]);
        let err = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { .. }));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        let file = write_csv(&["2015TEST01,333,2024,13,40,600,650,660,700,620"]);
        let err = CsvResultsStore::open_as_of(file.path(), as_of()).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { .. }));
    }
}
