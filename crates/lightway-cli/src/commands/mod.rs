// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers.

pub mod lights;
pub mod variants;

use clap::ValueEnum;
use lightway_lib::{ScoringStrategy, VariantRenderMode};

/// Scoring strategy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScorerArg {
    /// Density, proximity, dark zones, lit crossings and road speed.
    Composite,
    /// Average nearby lights per waypoint only.
    Density,
}

impl From<ScorerArg> for ScoringStrategy {
    fn from(value: ScorerArg) -> Self {
        match value {
            ScorerArg::Composite => ScoringStrategy::Composite,
            ScorerArg::Density => ScoringStrategy::Density,
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text.
    Text,
    /// Markdown bullet list.
    Rich,
    /// Pretty-printed JSON on stdout.
    Json,
}

impl OutputFormat {
    /// Text render mode, or `None` for JSON.
    pub fn render_mode(self) -> Option<VariantRenderMode> {
        match self {
            OutputFormat::Text => Some(VariantRenderMode::PlainText),
            OutputFormat::Rich => Some(VariantRenderMode::RichText),
            OutputFormat::Json => None,
        }
    }
}
