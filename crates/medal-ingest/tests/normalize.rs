//! Integration tests for loading and normalizing the input tables.

use std::io::Write;

use tempfile::NamedTempFile;

use medal_ingest::{DataLoadError, DataSources, TableKind, load_dataset};
use medal_model::{Medal, Sex};

const HEADER: &str = "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal";

const REGIONS: &str = "NOC,region,notes
USA,USA,
GBR,UK,
SGP,Singapore,
";

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn events_csv(rows: &[&str]) -> String {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

fn load(events: &str, regions: &str) -> medal_ingest::Result<medal_model::Dataset> {
    let events = temp_csv(events);
    let regions = temp_csv(regions);
    load_dataset(&DataSources::new(events.path(), regions.path()))
}

#[test]
fn normalizes_summer_rows_with_region_and_indicators() {
    let csv = events_csv(&[
        "1,A,M,24,190,88,United States,USA,2004 Summer,2004,Summer,Athina,Rowing,Rowing Men's Coxed Eights,Gold",
        "2,B,F,NA,NA,NA,Great Britain,GBR,2004 Summer,2004,Summer,Athina,Swimming,Swimming Women's 100 metres Freestyle,NA",
    ]);
    let dataset = load(&csv, REGIONS).unwrap();

    assert_eq!(dataset.len(), 2);
    let first = &dataset.records()[0];
    assert_eq!(first.name, "A");
    assert_eq!(first.sex, Sex::Male);
    assert_eq!(first.age, Some(24.0));
    assert_eq!(first.year, 2004);
    assert_eq!(first.medal, Some(Medal::Gold));
    assert_eq!(first.region.as_deref(), Some("USA"));
    assert_eq!(first.indicators.gold, 1);
    assert_eq!(first.indicators.total(), 1);

    let second = &dataset.records()[1];
    assert_eq!(second.age, None);
    assert_eq!(second.height, None);
    assert_eq!(second.medal, None);
    assert_eq!(second.region.as_deref(), Some("UK"));
    assert_eq!(second.indicators.total(), 0);
}

#[test]
fn drops_rows_outside_the_summer_season() {
    let csv = events_csv(&[
        "1,A,M,24,NA,NA,Norway,NOR,1994 Winter,1994,Winter,Lillehammer,Biathlon,Biathlon Men's 20 kilometres,Gold",
        "2,B,F,22,NA,NA,Great Britain,GBR,1996 Summer,1996,Summer,Atlanta,Rowing,Rowing Women's Single Sculls,NA",
    ]);
    let dataset = load(&csv, REGIONS).unwrap();

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].name, "B");
}

#[test]
fn unmapped_noc_keeps_row_with_missing_region() {
    let csv = events_csv(&[
        "1,A,M,30,NA,NA,Refugee Olympic Athletes,ROT,2016 Summer,2016,Summer,Rio de Janeiro,Judo,Judo Men's Middleweight,NA",
    ]);
    let dataset = load(&csv, REGIONS).unwrap();

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].noc, "ROT");
    assert_eq!(dataset.records()[0].region, None);
}

#[test]
fn missing_events_column_is_a_load_error() {
    let csv = "Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event\n";
    let err = load(csv, REGIONS).unwrap_err();

    match err {
        DataLoadError::MissingColumn { table, column } => {
            assert_eq!(table, TableKind::Events);
            assert_eq!(column, "Medal");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unknown_medal_is_rejected() {
    let csv = events_csv(&[
        "1,A,M,24,NA,NA,United States,USA,2004 Summer,2004,Summer,Athina,Rowing,Rowing Men's Coxed Eights,Platinum",
    ]);
    let err = load(&csv, REGIONS).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::InvalidValue { ref column, row: 1, .. } if column == "Medal"
    ));
}

#[test]
fn lowercase_medal_is_rejected() {
    let csv = events_csv(&[
        "1,A,M,24,NA,NA,United States,USA,2004 Summer,2004,Summer,Athina,Rowing,Rowing Men's Coxed Eights,Gold",
        "2,B,M,25,NA,NA,United States,USA,2004 Summer,2004,Summer,Athina,Rowing,Rowing Men's Single Sculls,gold",
    ]);
    let err = load(&csv, REGIONS).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::InvalidValue { ref column, row: 2, ref value, .. }
            if column == "Medal" && value == "gold"
    ));
}

#[test]
fn non_positive_year_is_rejected() {
    let csv = events_csv(&[
        "1,A,M,24,NA,NA,United States,USA,0 Summer,0,Summer,Athina,Rowing,Rowing Men's Coxed Eights,NA",
    ]);
    let err = load(&csv, REGIONS).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::InvalidValue { ref column, .. } if column == "Year"
    ));
}

#[test]
fn missing_file_is_reported() {
    let regions = temp_csv(REGIONS);
    let sources = DataSources::new("/no/such/athlete_events.csv", regions.path());
    let err = load_dataset(&sources).unwrap_err();

    assert!(matches!(err, DataLoadError::FileNotFound { .. }));
}
