use anyhow::Context;
use pricecast::config::Config;
use pricecast::services::signals::indicators::{Rsi, VolumeAnalysis};
use pricecast::{
    analyze_trend, ForecastEngine, ForecastResult, HistoricalPoint, PriceSeries, ScoreResult,
    SignalScorer, TechnicalSnapshot, TrendSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Everything the engine knows about one series.
#[derive(Debug, Serialize)]
struct Report {
    points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    technicals: Option<TechnicalSnapshot>,
    signal: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trend: Option<TrendSummary>,
    forecast: ForecastResult,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricecast=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let path = std::env::args()
        .nth(1)
        .context("usage: pricecast <series.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let points: Vec<HistoricalPoint> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;
    let series = PriceSeries::new(points).context("invalid price series")?;
    info!("Loaded {} points from {}", series.len(), path);

    let scorer = SignalScorer::new(
        Rsi::new(config.rsi_period),
        VolumeAnalysis::new(config.volume_period),
    );
    let technicals = scorer.snapshot(&series).value();
    let signal = scorer.score(&series);
    let trend = signal.breakdown.as_ref().map(|b| analyze_trend(&b.signals()));

    let engine = ForecastEngine::new(config.forecast_days)?;
    let mut rng = match config.forecast_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let forecast = engine.forecast(&series, &mut rng)?;

    let report = Report {
        points: series.len(),
        technicals,
        signal,
        trend,
        forecast,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
