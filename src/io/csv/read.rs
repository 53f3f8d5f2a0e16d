//! CSV record retrieval filtered by a grouping key.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{ensure, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, PolarsResult}};

/// Reads a CSV file with a header row, every column as a string.
pub(crate) fn read_csv_strings(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Rows of the CSV at `path` whose `key_column` equals `key`, header excluded.
///
/// Each row comes back as its raw cell texts in column order; empty cells are
/// empty strings.
pub fn read_records(path: &Path, key_column: usize, key: &str) -> Result<Vec<Vec<String>>> {
    select_records(&read_csv_strings(path)?, key_column, key)
}

/// Same as [`read_records`] over in-memory CSV text.
pub fn read_records_str(csv: &str, key_column: usize, key: &str) -> Result<Vec<Vec<String>>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    select_records(&df, key_column, key)
}

fn select_records(df: &DataFrame, key_column: usize, key: &str) -> Result<Vec<Vec<String>>> {
    ensure!(
        key_column < df.width(),
        "[io::csv::read] Key column {} out of range, table has {} columns", key_column, df.width()
    );

    let columns = df.get_columns().iter()
        .map(|column| column.str())
        .collect::<PolarsResult<Vec<_>>>()?;
    let keys = columns[key_column];

    Ok((0..df.height())
        .filter(|&row| keys.get(row) == Some(key))
        .map(|row| columns.iter().map(|column| column.get(row).unwrap_or_default().to_string()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TREES: &str = "\
tree_id,x_sp,y_sp,tree_dbh,boroname
1,10.5,20.0,12,Manhattan
2,30.0,40.0,8,Queens
3,50.0,60.0,4,Manhattan
";

    #[test]
    fn selects_rows_by_key_without_header() {
        let rows = read_records_str(TREES, 4, "Manhattan").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "10.5", "20.0", "12", "Manhattan"]);
        assert_eq!(rows[1][0], "3");
    }

    #[test]
    fn unknown_key_gives_no_rows() {
        assert!(read_records_str(TREES, 4, "Bronx").unwrap().is_empty());
    }

    #[test]
    fn key_column_out_of_range_is_an_error() {
        assert!(read_records_str(TREES, 9, "Manhattan").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TREES.as_bytes()).unwrap();
        let rows = read_records(file.path(), 4, "Queens").unwrap();
        assert_eq!(rows, vec![vec!["2", "30.0", "40.0", "8", "Queens"]]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_records(Path::new("/nonexistent/trees.csv"), 0, "x").is_err());
    }
}
