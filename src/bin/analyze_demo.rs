//! Analyze one review from the command line.
//!
//! Reads the file given as the first argument, or a built-in sample when
//! none is given, and prints the full report as pretty JSON.
//!
//! ```text
//! cargo run --bin analyze_demo -- review.txt
//! ```

use std::{env, fs};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use review_sentiment_analyzer::{analyze_document, AnalysisContext, CoreConfig};

static SAMPLE: &str = "This movie was a great surprise. The acting was wonderful and the \
story kept me hooked. I loved every minute of the first half.<br /><br />Then it all fell \
apart. The ending was a terrible mess. I can not stand films that waste their own ideas. \
Not good at all.";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let raw = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE.to_string(),
    };

    let config = CoreConfig::load()?;
    let ctx = AnalysisContext::new(config);
    let report = analyze_document(&ctx, &raw)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
