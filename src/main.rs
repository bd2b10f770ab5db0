use anyhow::{Context, Result};
use clap::Parser;
use incident_atlas::charts::{SeverityBand, TimelineSpan};
use incident_atlas::model::category;
use incident_atlas::pipeline::{
    headline_stats, FilterQuery, HeadlineStats, RegionSummary, Summary,
};
use incident_atlas::{geo, Dashboard, EventStore, RegionTable};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "incident-atlas", about = "Summarize an incident dataset")]
struct Args {
    /// Event dataset (JSON array)
    #[arg(long, default_value = "data/events.json")]
    data: PathBuf,

    /// Region table (TOML); the built-in table is used when omitted
    #[arg(long)]
    regions: Option<PathBuf>,

    /// Category selector, or "all"
    #[arg(long, default_value = category::ALL)]
    category: String,

    /// Free-text search over headline, place and actors
    #[arg(long, default_value = "")]
    search: String,

    /// Write the filtered events as GeoJSON points to this path
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn open_log_file(path: &str) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize logging, appending to INCIDENT_ATLAS_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let mut open_failure = None;
    if let Ok(path) = std::env::var("INCIDENT_ATLAS_LOG_PATH") {
        match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(file)
                    .init();
                return;
            }
            Err(err) => open_failure = Some((path, err)),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some((path, err)) = open_failure {
        tracing::warn!(%path, error = %err, "cannot open log file, logging to stderr");
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    category: &'a str,
    search: &'a str,
    summary: Summary,
    headline: HeadlineStats,
    timeline: Vec<TimelineRow<'a>>,
    regions: Vec<RegionSummary<'a>>,
}

#[derive(Serialize)]
struct TimelineRow<'a> {
    id: &'a str,
    timestamp: &'a str,
    headline: &'a str,
    place: &'a str,
    category: &'a str,
    intensity: f64,
    severity: SeverityBand,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let store = EventStore::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let regions = match &args.regions {
        Some(path) => RegionTable::load(path)
            .with_context(|| format!("loading region table {}", path.display()))?,
        None => RegionTable::default(),
    };

    let mut dashboard = Dashboard::new(store, regions);
    dashboard.apply_query(FilterQuery::new(&args.category, &args.search));

    if let Some(path) = &args.geojson {
        let body = geo::to_geojson_string(dashboard.timeline());
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote map feed");
    }

    let timeline = dashboard.timeline();
    let report = Report {
        category: dashboard.query().category.as_selector(),
        search: &dashboard.query().search,
        summary: dashboard.summary(),
        headline: headline_stats(dashboard.store().iter()),
        timeline: timeline
            .iter()
            .map(|e| TimelineRow {
                id: &e.id,
                timestamp: &e.timestamp,
                headline: &e.headline,
                place: &e.location.place,
                category: &e.category,
                intensity: e.intensity,
                severity: SeverityBand::from_intensity(e.intensity),
            })
            .collect(),
        regions: dashboard.regions(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, dashboard.timeline_span());
    }

    Ok(())
}

fn print_report(report: &Report<'_>, span: Option<TimelineSpan>) {
    let s = &report.summary;
    let label = category::label_for(report.category).unwrap_or(report.category);
    println!("Filter: {label} / search {:?}", report.search);
    println!(
        "Events {}  Killed {}  Injured {}  Buildings destroyed {}  Hospitals impacted {}",
        s.total_events,
        s.total_killed,
        s.total_injured,
        s.total_buildings_destroyed,
        s.total_hospitals_impacted
    );
    if let Some(span) = span {
        println!("Timeline: {} - {}", span.earliest, span.latest);
    }
    println!();

    for row in &report.timeline {
        println!(
            "{:<26} {:>4.1} {:<9} {:<14} {}  ({})",
            row.timestamp, row.intensity, row.severity.label(), row.category, row.headline, row.place
        );
    }
    println!();

    println!("Regions:");
    for region in &report.regions {
        let damage = &region.total_infrastructure_damage;
        println!(
            "  {:<16} events {:>3}  avg intensity {:>4.1}  casualties {:>5}  buildings {:>4}  hospitals {:>3}  power {:>3}  water {:>3}",
            region.name,
            region.total_events,
            region.average_intensity,
            region.total_casualties,
            damage.buildings_destroyed,
            damage.hospitals_impacted,
            damage.power_outages,
            damage.water_disruption
        );
    }

    let h = &report.headline;
    println!();
    println!(
        "Dataset: {} events, {} killed, {} buildings destroyed, average intensity {:.1}",
        h.total_events, h.total_killed, h.buildings_destroyed, h.average_intensity
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_in_missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing").join("atlas.log");
        assert!(open_log_file(&bad.to_string_lossy()).is_err());

        let good = dir.path().join("atlas.log");
        assert!(open_log_file(&good.to_string_lossy()).is_ok());
        assert!(good.exists());
    }
}
