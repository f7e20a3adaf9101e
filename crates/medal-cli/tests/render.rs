//! Tests for report titles and output rendering.

use medal_cli::render::{OutputFormat, Renderer, build_table, write_csv};
use medal_cli::titles::{no_data_notice, tally_title};
use medal_core::{AthleteRanking, OverviewStats, YearCount};
use medal_model::Filter;

fn render_to_string(renderer: Renderer, title: &str, rows: &[YearCount]) -> String {
    let mut out = Vec::new();
    renderer.section(&mut out, title, rows).unwrap();
    String::from_utf8(out).unwrap()
}

fn yearwise() -> Vec<YearCount> {
    vec![
        YearCount { year: 2004, medals: 3 },
        YearCount { year: 2008, medals: 5 },
    ]
}

#[test]
fn tally_title_follows_filter_combination() {
    let usa: Filter<String> = Filter::exact("USA");
    assert_eq!(tally_title(&Filter::All, &Filter::All), "Overall Medal Tally");
    assert_eq!(
        tally_title(&Filter::Exact(2004), &Filter::All),
        "Medal Tally in 2004 Olympics"
    );
    assert_eq!(tally_title(&Filter::All, &usa), "USA Overall Performance");
    assert_eq!(
        tally_title(&Filter::Exact(2004), &usa),
        "USA Performance in 2004 Olympics"
    );
}

#[test]
fn notice_names_the_country() {
    let country: Filter<String> = Filter::exact("France");
    assert_eq!(
        no_data_notice("medal", &country),
        "No medal data available for France."
    );
}

#[test]
fn csv_section_has_title_header_and_rows() {
    let output = render_to_string(Renderer::new(OutputFormat::Csv), "USA Medals", &yearwise());
    assert_eq!(output, "# USA Medals\nYear,Medal\n2004,3\n2008,5\n\n");
}

#[test]
fn json_section_is_one_line_with_title_and_data() {
    let output = render_to_string(Renderer::new(OutputFormat::Json), "USA Medals", &yearwise());
    let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(value["title"], "USA Medals");
    assert_eq!(value["data"][1]["year"], 2008);
    assert_eq!(value["data"][1]["medals"], 5);
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn table_section_contains_headers_and_cells() {
    let output = render_to_string(Renderer::new(OutputFormat::Table), "USA Medals", &yearwise());
    assert!(output.starts_with("USA Medals\n"));
    assert!(output.contains("Year"));
    assert!(output.contains("Medal"));
    assert!(output.contains("2008"));
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn notice_replaces_the_table() {
    let mut out = Vec::new();
    Renderer::new(OutputFormat::Table)
        .notice(&mut out, "Top 10 Athletes of France", "No athlete data available for France.")
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Top 10 Athletes of France\nNo athlete data available for France.\n\n"
    );

    let mut out = Vec::new();
    Renderer::new(OutputFormat::Json)
        .notice(&mut out, "Title", "Nothing here.")
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["message"], "Nothing here.");
}

#[test]
fn csv_leaves_missing_region_empty() {
    let rows = vec![AthleteRanking {
        name: "Refugee".to_string(),
        medals: 1,
        sport: "Judo".to_string(),
        region: None,
    }];
    let mut out = Vec::new();
    write_csv(&mut out, rows.as_slice()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Name,Medals,Sport,region\nRefugee,1,Judo,\n"
    );
}

#[test]
fn table_has_one_row_per_report_row() {
    let stats = OverviewStats {
        editions: 29,
        hosts: 23,
        sports: 52,
        events: 651,
        athletes: 116122,
        nations: 205,
    };
    let mut table = build_table(&stats, false);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column_count(), 6);
}
