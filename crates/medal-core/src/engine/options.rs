use medal_model::Dataset;

use crate::filter::{distinct_regions, distinct_sports, distinct_years, with_overall};
use crate::tables::FilterOptions;

/// Selectable years (ascending) and countries (alphabetical), each preceded
/// by "Overall". Rows without a resolved region contribute no country.
pub fn list_years_and_countries(dataset: &Dataset) -> FilterOptions {
    FilterOptions {
        years: with_overall(distinct_years(dataset)),
        countries: with_overall(distinct_regions(dataset)),
    }
}

/// Selectable sports (alphabetical), preceded by "Overall".
pub fn list_sports(dataset: &Dataset) -> Vec<String> {
    with_overall(distinct_sports(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;

    #[test]
    fn lists_are_sorted_and_prefixed() {
        let dataset = Dataset::new(vec![
            RecordBuilder::new("A").year(2008).region(Some("USA")).sport("Judo").build(),
            RecordBuilder::new("B").year(1996).region(Some("France")).build(),
            RecordBuilder::new("C").year(2008).region(None).sport("Judo").build(),
        ]);

        let options = list_years_and_countries(&dataset);
        assert_eq!(options.years, vec!["Overall", "1996", "2008"]);
        assert_eq!(options.countries, vec!["Overall", "France", "USA"]);
        assert_eq!(list_sports(&dataset), vec!["Overall", "Judo", "Rowing"]);
    }

    #[test]
    fn empty_dataset_lists_only_the_sentinel() {
        let options = list_years_and_countries(&Dataset::default());
        assert_eq!(options.years, vec!["Overall"]);
        assert_eq!(options.countries, vec!["Overall"]);
    }
}
