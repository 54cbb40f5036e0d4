use anyhow::Context;
use customer_cleaner::{Pipeline, PipelineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    let config = PipelineConfig::default();
    let outcome = Pipeline::new(config)
        .run()
        .context("data cleaning pipeline failed")?;

    info!(
        "Done: {} -> {} rows, {} duplicates removed, {} values imputed",
        outcome.original_shape.0,
        outcome.final_shape.0,
        outcome.summary.duplicates_removed,
        outcome.summary.income_values_imputed
    );
    info!("Data quality score: {:.1}%", outcome.data_quality_score);

    Ok(())
}
