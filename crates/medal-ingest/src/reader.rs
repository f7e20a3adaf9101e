//! CSV reading for the events and region-mapping tables.

use std::path::Path;

use polars::prelude::*;

use crate::error::{DataLoadError, Result, TableKind};

/// Columns the events table must provide.
pub const EVENT_COLUMNS: [&str; 14] = [
    "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season", "City",
    "Sport", "Event", "Medal",
];

/// Columns the region mapping must provide. `notes` is optional.
pub const REGION_COLUMNS: [&str; 2] = ["NOC", "region"];

/// Optional free-text column of the region mapping.
pub const REGION_NOTES_COLUMN: &str = "notes";

/// Reads a CSV file into a DataFrame with every column as a string.
///
/// Type conversion is left to the normalizer so that markers such as `NA`
/// never trip schema inference.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataLoadError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DataLoadError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| DataLoadError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV table"
    );
    Ok(df)
}

/// Reads the events table and checks its required columns.
pub fn read_events_table(path: &Path) -> Result<DataFrame> {
    let df = read_csv_frame(path)?;
    require_columns(&df, TableKind::Events, &EVENT_COLUMNS)?;
    Ok(df)
}

/// Reads the region mapping table and checks its required columns.
pub fn read_regions_table(path: &Path) -> Result<DataFrame> {
    let df = read_csv_frame(path)?;
    require_columns(&df, TableKind::Regions, &REGION_COLUMNS)?;
    Ok(df)
}

/// Fails with `MissingColumn` for the first required column the frame lacks.
pub fn require_columns(df: &DataFrame, table: TableKind, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(DataLoadError::MissingColumn {
                table,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Extracts a column as trimmed optional strings.
///
/// Empty cells and the `NA` marker become `None`.
pub fn text_column(df: &DataFrame, table: TableKind, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| DataLoadError::MissingColumn {
            table,
            column: name.to_string(),
        })?;
    let str_col = column.cast(&DataType::String)?;
    let str_chunked = str_col.str()?;

    Ok(str_chunked
        .iter()
        .map(|opt_val| opt_val.and_then(clean_cell))
        .collect())
}

fn clean_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() || trimmed == "NA" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_clean_cell_markers() {
        assert_eq!(clean_cell("NA"), None);
        assert_eq!(clean_cell("   "), None);
        assert_eq!(clean_cell(" Gold "), Some("Gold".to_string()));
    }

    #[test]
    fn test_read_csv_frame_reads_all_as_strings() {
        let file = create_temp_csv("NOC,region,notes\nAFG,Afghanistan,\nSGP,NA,Singapore\n");
        let df = read_csv_frame(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        let regions = text_column(&df, TableKind::Regions, "region").unwrap();
        assert_eq!(regions, vec![Some("Afghanistan".to_string()), None]);
    }

    #[test]
    fn test_read_csv_frame_missing_file() {
        let result = read_csv_frame(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_regions_table_requires_region_column() {
        let file = create_temp_csv("NOC,notes\nAFG,\n");
        let result = read_regions_table(file.path());

        match result {
            Err(DataLoadError::MissingColumn { table, column }) => {
                assert_eq!(table, TableKind::Regions);
                assert_eq!(column, "region");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
