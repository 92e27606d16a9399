//! Variants command handler.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use lightway_lib::{
    load_streetlights, plan_variants, render_variants, DirectionsResponse, RouteVariant,
    ScoringStrategy,
};

use super::OutputFormat;

/// Arguments for the variants command.
#[derive(Debug, Clone)]
pub struct VariantsArgs {
    /// Saved directions provider response (JSON).
    pub directions: PathBuf,
    pub strategy: ScoringStrategy,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantsOutput<'a> {
    scorer: ScoringStrategy,
    streetlights: usize,
    routes: &'a [RouteVariant],
}

/// Handle the variants subcommand.
///
/// Scores every route in the directions file against the streetlight dataset
/// and prints the fastest, balanced and most-lit variants.
pub fn handle_variants(lights_path: &Path, args: &VariantsArgs) -> Result<()> {
    let index = load_streetlights(lights_path);

    let source = fs::read_to_string(&args.directions).with_context(|| {
        format!(
            "failed to read directions from {}",
            args.directions.display()
        )
    })?;
    let candidates = DirectionsResponse::from_json(&source)
        .and_then(DirectionsResponse::into_candidates)
        .with_context(|| {
            format!(
                "failed to parse directions from {}",
                args.directions.display()
            )
        })?;
    info!(routes = candidates.len(), scorer = %args.strategy, "scoring routes");

    let scorer = args.strategy.scorer();
    let variants = plan_variants(candidates, &index, scorer.as_ref())
        .context("directions response contained no routes")?;

    match args.format.render_mode() {
        Some(mode) => print!("{}", render_variants(&variants, mode)),
        None => {
            let output = VariantsOutput {
                scorer: args.strategy,
                streetlights: index.len(),
                routes: &variants,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
