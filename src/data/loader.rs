use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{CellValue, PlayerTable, PLAYER_NAME_COLUMN, YEAR_COLUMN};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV has no '{0}' column")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the player table from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<PlayerTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse a player table from any CSV byte source.
///
/// The first row is the header. Columns are typed the way a dataframe would
/// infer them, then text columns are stripped and `Year` is coerced.
pub fn load_reader<R: Read>(reader: R) -> Result<PlayerTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if !headers.iter().any(|h| h == PLAYER_NAME_COLUMN) {
        return Err(LoadError::MissingColumn(PLAYER_NAME_COLUMN.to_string()));
    }

    let mut raw: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        raw.push(record.iter().map(|v| v.to_string()).collect());
    }

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|col| infer_kind(raw.iter().map(|r| r[col].as_str())))
        .collect();

    let rows = raw
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .zip(&kinds)
                .map(|(value, kind)| kind.parse(value))
                .collect()
        })
        .collect();

    let mut table = PlayerTable::new(headers, rows);
    strip_text_columns(&mut table);
    coerce_year_column(&mut table);
    Ok(table)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Strip leading/trailing whitespace from every text value.
pub fn strip_text_columns(table: &mut PlayerTable) {
    for cell in table.rows.iter_mut().flatten() {
        if let CellValue::Text(s) = cell {
            if s.trim().len() != s.len() {
                *s = s.trim().to_string();
            }
        }
    }
}

/// Turn every value of the `Year` column (if any) into a non-negative
/// integer.
pub fn coerce_year_column(table: &mut PlayerTable) {
    let Some(col) = table.column_index(YEAR_COLUMN) else {
        return;
    };
    for row in &mut table.rows {
        let year = match &row[col] {
            CellValue::Integer(i) => (*i).max(0),
            CellValue::Float(f) => truncate(*f),
            CellValue::Text(s) => coerce_year(s),
            CellValue::Null => 0,
        };
        row[col] = CellValue::Integer(year);
    }
}

/// Numeric text truncates toward zero; anything else (blank, `N/A`, NaN,
/// infinities, negatives) becomes 0.
pub fn coerce_year(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return i.max(0);
    }
    s.parse::<f64>().map(truncate).unwrap_or(0)
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        (f.trunc() as i64).max(0)
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Column type inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    fn parse(self, value: String) -> CellValue {
        if is_missing(&value) {
            return CellValue::Null;
        }
        match self {
            ColumnKind::Integer => value
                .trim()
                .parse()
                .map(CellValue::Integer)
                .unwrap_or(CellValue::Text(value)),
            ColumnKind::Float => value
                .trim()
                .parse()
                .map(CellValue::Float)
                .unwrap_or(CellValue::Text(value)),
            ColumnKind::Text => CellValue::Text(value),
        }
    }
}

/// Field values read as missing, matched exactly (no trimming).
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// Narrowest kind that fits every present value. Integers with gaps widen
/// to floats; a column with no values at all is text.
fn infer_kind<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    let mut seen = false;
    let mut gaps = false;
    for v in values {
        if is_missing(v) {
            gaps = true;
            continue;
        }
        seen = true;
        let v = v.trim();
        if kind == ColumnKind::Integer && v.parse::<i64>().is_err() {
            kind = ColumnKind::Float;
        }
        if kind == ColumnKind::Float && v.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }
    match kind {
        _ if !seen => ColumnKind::Text,
        ColumnKind::Integer if gaps => ColumnKind::Float,
        kind => kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load(csv: &str) -> PlayerTable {
        load_reader(csv.as_bytes()).expect("valid csv")
    }

    #[test]
    fn year_coercion_matches_examples() {
        assert_eq!(coerce_year("2020"), 2020);
        assert_eq!(coerce_year(" 2020 "), 2020);
        assert_eq!(coerce_year(""), 0);
        assert_eq!(coerce_year("N/A"), 0);
        assert_eq!(coerce_year("2020.9"), 2020);
        assert_eq!(coerce_year("-5"), 0);
        assert_eq!(coerce_year("NaN"), 0);
    }

    #[test]
    fn load_strips_text_and_coerces_year() {
        let table = load(
            "Player Name,Team,Year,Amount\n\
             \"  Virat Kohli \",RCB , 2021,17.0\n\
             MS Dhoni, CSK,N/A,12\n\
             Rohit Sharma,MI,,15.5\n",
        );

        assert_eq!(
            table.column_names,
            vec!["Player Name", "Team", "Year", "Amount"]
        );
        assert_eq!(table.cell(0, 0), Some(&CellValue::Text("Virat Kohli".into())));
        assert_eq!(table.cell(1, 1), Some(&CellValue::Text("CSK".into())));
        assert_eq!(table.cell(0, 2), Some(&CellValue::Integer(2021)));
        assert_eq!(table.cell(1, 2), Some(&CellValue::Integer(0)));
        assert_eq!(table.cell(2, 2), Some(&CellValue::Integer(0)));
        assert_eq!(table.cell(1, 3), Some(&CellValue::Float(12.0)));
    }

    #[test]
    fn numeric_columns_are_inferred() {
        let table = load("Player Name,Runs,Average,Notes\nA,10,1.5,\nB,,2,x\n");
        // Runs has a gap, so it widens to float.
        assert_eq!(table.cell(0, 1), Some(&CellValue::Float(10.0)));
        assert_eq!(table.cell(0, 1).map(|v| v.to_string()).as_deref(), Some("10.0"));
        assert!(table.cell(1, 1).map(CellValue::is_null).unwrap_or(false));
        assert_eq!(table.cell(1, 2), Some(&CellValue::Float(2.0)));
        assert_eq!(table.cell(1, 3), Some(&CellValue::Text("x".into())));
    }

    #[test]
    fn missing_markers_become_null() {
        let table = load("Player Name,Team,Wickets\nNA,N/A,3\nB,MI,null\nC, NA ,4\n");
        assert!(table.cell(0, 0).map(CellValue::is_null).unwrap_or(false));
        assert!(table.cell(0, 1).map(CellValue::is_null).unwrap_or(false));
        assert_eq!(table.cell(0, 1).map(|v| v.to_string()).as_deref(), Some("nan"));
        assert_eq!(table.cell(0, 2), Some(&CellValue::Float(3.0)));
        assert!(table.cell(1, 2).map(CellValue::is_null).unwrap_or(false));
        // Only exact markers count; padded text is stripped and kept.
        assert_eq!(table.cell(2, 1), Some(&CellValue::Text("NA".into())));
        assert!(crate::data::filter::matching_indices(&table, "na").is_empty());
    }

    #[test]
    fn full_integer_columns_stay_integer() {
        let table = load("Player Name,Runs\nA,10\nB,20\n");
        assert_eq!(table.cell(1, 1), Some(&CellValue::Integer(20)));
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut table = load("Player Name,Year\n  A  ,2020.5\nB,oops\n");
        let once = table.clone();
        strip_text_columns(&mut table);
        coerce_year_column(&mut table);
        assert_eq!(table, once);
        assert_eq!(table.cell(0, 1), Some(&CellValue::Integer(2020)));
    }

    #[test]
    fn table_without_year_is_left_alone() {
        let table = load("Player Name,Team\nA,MI\n");
        assert_eq!(table.column_index(YEAR_COLUMN), None);
        assert_eq!(table.cell(0, 1), Some(&CellValue::Text("MI".into())));
    }

    #[test]
    fn missing_player_name_column_is_rejected() {
        let err = load_reader("Name,Year\nA,2020\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Player Name"));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = load_reader("Player Name,Year\nA,2020,extra\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let bytes: &[u8] = b"Player Name,Year\n\xff\xfe,2020\n";
        assert!(matches!(load_reader(bytes), Err(LoadError::Csv(_))));
    }

    #[test]
    fn load_csv_reads_from_disk() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "Player Name,Year").unwrap();
        writeln!(file, "Virat Kohli,2021").unwrap();

        let table = load_csv(file.path()).expect("load");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn load_csv_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope.csv");
        match load_csv(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
