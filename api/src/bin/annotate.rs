use std::path::PathBuf;

use clap::Parser;
use sinu_core::infrastructure::ingredient::annotator::annotate_ingredient_file;
use tracing_subscriber::EnvFilter;

/// Tag every row of an ingredient table with its concern labels
#[derive(Debug, Parser)]
#[command(name = "sinu-annotate", version)]
struct AnnotateArgs {
    #[arg(long, short, default_value = "acne_ingredients.csv")]
    input: PathBuf,

    #[arg(long, short, default_value = "acne_ingredients_with_concern.csv")]
    output: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = AnnotateArgs::parse();
    let summary = annotate_ingredient_file(&args.input, &args.output)?;

    println!(
        "Wrote {} ({} rows, {} flagged)",
        args.output.display(),
        summary.rows,
        summary.flagged
    );

    Ok(())
}
