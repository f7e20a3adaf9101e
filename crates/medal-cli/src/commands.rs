use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use medal_core::{
    Dimension, FilterDomain, Outcome, TabularReport, age_distribution, country_sport_heatmap,
    events_per_sport_heatmap, height_weight_by_sport, list_sports, list_years_and_countries,
    medal_tally, overview_stats, series_over_time, sex_participation_over_time, top_athletes,
    top_athletes_for_country, yearwise_medals_for_country,
};
use medal_ingest::{DataSources, load_dataset};
use medal_model::{Dataset, Filter};

use medal_cli::render::Renderer;
use medal_cli::titles::{no_data_notice, tally_title};

use crate::cli::{AthleteArgs, Cli, Command, CountryArgs, OverviewArgs, TallyArgs};

/// Selectable values of one filter dimension.
#[derive(Serialize)]
struct ValueList {
    name: &'static str,
    values: Vec<String>,
}

impl TabularReport for ValueList {
    fn headers(&self) -> Vec<String> {
        vec![self.name.to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.values.iter().map(|value| vec![value.clone()]).collect()
    }
}

/// Loads the dataset and runs the selected subcommand, writing to stdout.
pub fn run(cli: &Cli, renderer: Renderer) -> Result<()> {
    let sources = DataSources::new(cli.events.clone(), cli.regions.clone());
    let dataset = load_dataset(&sources).with_context(|| {
        format!(
            "load {} and {}",
            sources.events.display(),
            sources.regions.display()
        )
    })?;
    let domain = FilterDomain::from_dataset(&dataset);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Tally(args) => run_tally(&dataset, &domain, args, renderer, &mut out),
        Command::Overview(args) => run_overview(&dataset, &domain, args, renderer, &mut out),
        Command::Country(args) => run_country(&dataset, &domain, args, renderer, &mut out),
        Command::Athletes(args) => run_athletes(&dataset, &domain, args, renderer, &mut out),
        Command::Filters => run_filters(&dataset, renderer, &mut out),
    }?;
    out.flush()?;
    Ok(())
}

fn run_tally<W: Write>(
    dataset: &Dataset,
    domain: &FilterDomain,
    args: &TallyArgs,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let _span = info_span!("tally", year = %args.year, country = %args.country).entered();
    let year = domain.year(&args.year)?;
    let country = domain.country(&args.country)?;

    let tally = medal_tally(dataset, &year, &country);
    let title = tally_title(&year, &country);
    if tally.is_empty() {
        warn!(%year, %country, "no medal rows for the selected filters");
        renderer.notice(out, &title, "No medal data for the selected filters.")?;
    } else {
        info!(rows = tally.rows.len(), "medal tally");
        renderer.section(out, &title, &tally)?;
    }
    Ok(())
}

fn run_overview<W: Write>(
    dataset: &Dataset,
    domain: &FilterDomain,
    args: &OverviewArgs,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let _span = info_span!("overview", sport = %args.sport).entered();
    let sport = domain.sport(&args.sport)?;

    renderer.section(out, "Top Statistics", &overview_stats(dataset))?;
    let series = [
        (Dimension::Region, "Participating Nations over the Years"),
        (Dimension::Event, "Events over the Years"),
        (Dimension::Athlete, "Athletes over the Years"),
    ];
    for (dimension, title) in series {
        renderer.section(out, title, &series_over_time(dataset, dimension))?;
    }
    renderer.section(
        out,
        "No. of Events over Time (Every Sport)",
        &events_per_sport_heatmap(dataset),
    )?;

    let ranking = top_athletes(dataset, &sport);
    renderer.section(
        out,
        &format!("Most Successful Athletes ({sport})"),
        ranking.as_slice(),
    )?;
    Ok(())
}

fn run_country<W: Write>(
    dataset: &Dataset,
    domain: &FilterDomain,
    args: &CountryArgs,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let _span = info_span!("country", country = %args.country).entered();
    let country = domain.country(&args.country)?;

    let title = format!("{country} Medal Tally over the Years");
    match yearwise_medals_for_country(dataset, &country) {
        Outcome::Data(rows) => renderer.section(out, &title, rows.as_slice())?,
        Outcome::Empty => empty_section(renderer, out, &title, "medal", &country)?,
    }

    let title = format!("{country} Excels in the Following Sports");
    match country_sport_heatmap(dataset, &country) {
        Outcome::Data(heatmap) => renderer.section(out, &title, &heatmap)?,
        Outcome::Empty => empty_section(renderer, out, &title, "sport", &country)?,
    }

    let title = format!("Top 10 Athletes of {country}");
    match top_athletes_for_country(dataset, &country) {
        Outcome::Data(rows) => renderer.section(out, &title, rows.as_slice())?,
        Outcome::Empty => empty_section(renderer, out, &title, "athlete", &country)?,
    }
    Ok(())
}

fn empty_section<W: Write>(
    renderer: Renderer,
    out: &mut W,
    title: &str,
    section: &str,
    country: &Filter<String>,
) -> Result<()> {
    let message = no_data_notice(section, country);
    warn!(%country, section, "empty report section");
    renderer.notice(out, title, &message)
}

fn run_athletes<W: Write>(
    dataset: &Dataset,
    domain: &FilterDomain,
    args: &AthleteArgs,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let _span = info_span!("athletes", sport = %args.sport).entered();
    let sport = domain.sport(&args.sport)?;

    renderer.section(out, "Distribution of Age", &age_distribution(dataset))?;

    let profiles = height_weight_by_sport(dataset, &sport);
    let shown = &profiles[..profiles.len().min(args.limit)];
    renderer.section(
        out,
        &format!(
            "Height vs Weight ({sport}, {} of {} athletes)",
            shown.len(),
            profiles.len()
        ),
        shown,
    )?;

    let participation = sex_participation_over_time(dataset);
    renderer.section(
        out,
        "Men vs Women Participation over the Years",
        participation.as_slice(),
    )?;
    Ok(())
}

fn run_filters<W: Write>(dataset: &Dataset, renderer: Renderer, out: &mut W) -> Result<()> {
    let _span = info_span!("filters").entered();
    let options = list_years_and_countries(dataset);
    let lists = [
        ValueList {
            name: "Year",
            values: options.years,
        },
        ValueList {
            name: "Country",
            values: options.countries,
        },
        ValueList {
            name: "Sport",
            values: list_sports(dataset),
        },
    ];
    for list in &lists {
        renderer.section(out, list.name, list)?;
    }
    Ok(())
}
