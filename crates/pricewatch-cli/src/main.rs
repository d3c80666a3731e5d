use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod run;

#[derive(Debug, Parser)]
#[command(name = "pricewatch")]
#[command(about = "Competitor price monitoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute one monitoring run and write the spreadsheet report.
    Run {
        /// Path to the targets YAML file (overrides configuration).
        #[arg(long)]
        targets: Option<PathBuf>,
        /// Directory the report is written into (overrides configuration).
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },
    /// Load and validate the configured targets without touching the network.
    Targets {
        /// Path to the targets YAML file (overrides configuration).
        #[arg(long)]
        targets: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = pricewatch_core::load_app_config()?;
    init_tracing(&config);

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            targets,
            report_dir,
        } => {
            if let Some(path) = targets {
                config.targets_path = path;
            }
            if let Some(path) = report_dir {
                config.report_dir = path;
            }
            let targets = pricewatch_core::load_targets(&config.targets_path)?;

            println!("Starting competitor price monitoring...");
            match run::execute(&config, &targets).await? {
                Some(path) => println!("Report written to {}", path.display()),
                None => println!("No data scraped; no report was written."),
            }
        }
        Commands::Targets { targets } => {
            if let Some(path) = targets {
                config.targets_path = path;
            }
            let targets = pricewatch_core::load_targets(&config.targets_path)?;
            println!(
                "{} product(s), {} competitor fetch(es) per run:",
                targets.products.len(),
                targets.competitor_count()
            );
            for product in &targets.products {
                println!("  {}", product.product_name);
                for competitor in &product.competitors {
                    println!(
                        "    {} [{}] {}",
                        competitor.name, competitor.site, competitor.url
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &pricewatch_core::AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.env.ansi_logs())
        .init();
}
