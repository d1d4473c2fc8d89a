use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use copernicus_core::catalog::{
    candidates_from_records, safe_root, Catalog, Coordinate, InMemoryCatalog,
};
use copernicus_core::pipeline::config::{DistanceFormula, RankingConfig};
use copernicus_core::pipeline::{run_ranking_reported, ProgressReporter};
use copernicus_core::sample::{parse_hex_color, Candidate};
use copernicus_core::sampler::create_sampler;
use copernicus_core::scoring::ScoringMode;

use crate::progress::BarReporter;
use crate::summary::{print_ranking, print_ranking_summary};

#[derive(Args)]
pub struct RankArgs {
    /// Band paths of one candidate, comma-separated (B02 or B02,B03,B04); repeat per candidate
    #[arg(long = "candidate")]
    pub candidates: Vec<String>,

    /// Imagery index (JSON array of catalog records) to draw candidates from
    #[arg(long, conflicts_with = "candidates", requires = "lon")]
    pub index: Option<PathBuf>,

    /// Longitude used with --index
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Latitude used with --index
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Target color as RRGGBB; without it candidates are ranked by deviation from 255
    #[arg(long)]
    pub color: Option<String>,

    /// Use the Euclidean distance to the target instead of the literal formula
    #[arg(long, requires = "color")]
    pub euclidean: bool,

    /// Ranking config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sampler endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Resolution level, negative for full resolution (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub rlevel: Option<i32>,
}

pub async fn run(args: &RankArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => RankingConfig::default(),
    };
    if let Some(ref endpoint) = args.endpoint {
        config.sampler.endpoint = endpoint.clone();
    }
    if let Some(rlevel) = args.rlevel {
        config.sampler.resolution_level = rlevel;
    }
    if args.euclidean {
        config.distance = DistanceFormula::Euclidean;
    }

    let mode = match args.color {
        Some(ref hex) => ScoringMode::TargetColor {
            target: parse_hex_color(hex)?,
            formula: config.distance,
        },
        None => ScoringMode::Deviation,
    };

    let candidates = collect_candidates(args, &mode).await?;
    let labels: Vec<String> = candidates
        .iter()
        .map(|c| candidate_label(c, &mode))
        .collect();

    print_ranking_summary(&config, &mode, candidates.len());

    let sampler = create_sampler(&config.sampler)?;
    let reporter = Arc::new(BarReporter::new());
    let progress: Arc<dyn ProgressReporter> = reporter.clone();
    let ranked = run_ranking_reported(sampler, &candidates, &mode, &config, progress).await;
    reporter.finish();
    let ranked = ranked.context("Ranking failed")?;

    print_ranking(&ranked, &labels);
    Ok(())
}

async fn collect_candidates(args: &RankArgs, mode: &ScoringMode) -> Result<Vec<Candidate>> {
    if let Some(ref index) = args.index {
        let (Some(lon), Some(lat)) = (args.lon, args.lat) else {
            bail!("--index needs --lon and --lat");
        };
        let catalog = InMemoryCatalog::load(index)
            .with_context(|| format!("Failed to load index {}", index.display()))?;
        let records = catalog.images_at(Coordinate { lon, lat }).await?;
        return Ok(candidates_from_records(&records, mode)?);
    }

    if args.candidates.is_empty() {
        bail!("Give at least one --candidate, or --index with --lon and --lat");
    }
    Ok(args
        .candidates
        .iter()
        .enumerate()
        .map(|(i, list)| {
            let bands = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            Candidate::new(i, bands)
        })
        .collect())
}

/// Blue band path for deviation ranking, product root for target-color ranking.
fn candidate_label(candidate: &Candidate, mode: &ScoringMode) -> String {
    let first = candidate.bands.first().map(String::as_str).unwrap_or_default();
    match mode {
        ScoringMode::Deviation => first.to_string(),
        ScoringMode::TargetColor { .. } => safe_root(first).to_string(),
    }
}
