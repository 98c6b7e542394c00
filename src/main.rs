mod model;
mod output;
mod parser;
mod pdf;

use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;

use output::FieldCoverage;

#[derive(Parser)]
#[command(
    name = "criteria_catalogue",
    about = "Extract the criteria catalogue from the BSI AI test criteria PDF into CSV"
)]
struct Cli {
    /// Source PDF document
    #[arg(default_value = "AI-Finance_Test-Criteria.pdf")]
    input: PathBuf,
    /// Output CSV file
    #[arg(short, long, default_value = "criteria_catalogue.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    ensure!(
        cli.input.exists(),
        "PDF file '{}' not found",
        cli.input.display()
    );

    let pages = pdf::page_texts(&cli.input)?;
    println!("Opened PDF with {} pages.", pages.len());

    let criteria = parser::parse_pages(&pages);

    output::write_csv(&cli.output, &criteria)?;
    println!(
        "Extracted {} criteria. Data saved to {}.",
        criteria.len(),
        cli.output.display()
    );

    FieldCoverage::from_records(&criteria).print();
    Ok(())
}
