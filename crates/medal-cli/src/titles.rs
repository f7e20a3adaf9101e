//! Section titles of the printed reports.

use medal_model::Filter;

/// Heading of a medal tally for the selected filters.
pub fn tally_title(year: &Filter<u32>, country: &Filter<String>) -> String {
    match (year, country) {
        (Filter::All, Filter::All) => "Overall Medal Tally".to_string(),
        (Filter::Exact(year), Filter::All) => format!("Medal Tally in {year} Olympics"),
        (Filter::All, Filter::Exact(country)) => format!("{country} Overall Performance"),
        (Filter::Exact(year), Filter::Exact(country)) => {
            format!("{country} Performance in {year} Olympics")
        }
    }
}

/// Notice printed in place of an empty country section.
pub fn no_data_notice(section: &str, country: &Filter<String>) -> String {
    format!("No {section} data available for {country}.")
}
