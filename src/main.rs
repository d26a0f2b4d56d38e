use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use stockclean::{collect_items, process_file, process_files, CleanerConfig, RuleSet};

#[derive(Parser)]
#[command(name = "stockclean")]
#[command(author, version, about = "Clean vendor spreadsheets for inventory import", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the phone stock sheets into a JSON import document
    Phones {
        /// Directory holding the vendor sheets
        #[arg(short, long)]
        base_dir: PathBuf,

        /// Output JSON file (defaults to inventory_import.json in the base directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Selling price multiplier applied to unit cost
        #[arg(long)]
        markup: Option<f64>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Infer brand, model and category for the accessory sheet
    Accessories {
        /// Accessory sheet (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file (defaults to accs_fixed.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report what the phone importer would produce without writing anything
    Inspect {
        /// Directory holding the vendor sheets
        #[arg(short, long)]
        base_dir: PathBuf,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Phones {
            base_dir,
            output,
            markup,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = CleanerConfig::load(config.as_deref())?;
            if let Some(markup) = markup {
                anyhow::ensure!(
                    markup.is_finite() && markup >= 0.0,
                    "--markup must be a non-negative number"
                );
                config.markup_factor = markup;
            }
            run_phones(&base_dir, output, &config)
        }
        Commands::Accessories {
            input,
            output,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let config = CleanerConfig::load(config.as_deref())?;
            run_accessories(&input, output, &config)
        }
        Commands::Inspect {
            base_dir,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            let config = CleanerConfig::load(config.as_deref())?;
            inspect(&base_dir, &config)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_phones(base_dir: &Path, output: Option<PathBuf>, config: &CleanerConfig) -> Result<()> {
    let output = output.unwrap_or_else(|| base_dir.join(&config.files.inventory_output));
    info!(
        "Importing phones from {:?} (markup x{})",
        base_dir, config.markup_factor
    );

    let import =
        process_files(base_dir, &output, config).context("Failed to convert phone sheets")?;

    let total = import.total_stats();
    info!("Complete: {}", total);
    Ok(())
}

fn run_accessories(input: &Path, output: Option<PathBuf>, config: &CleanerConfig) -> Result<()> {
    let output = output.unwrap_or_else(|| {
        input
            .parent()
            .unwrap_or(Path::new("."))
            .join(&config.files.accessories_output)
    });

    let report = process_file(input, &output, &RuleSet::default())
        .context("Failed to fix accessory sheet")?;

    if !report.found {
        warn!("Nothing to do: {:?} does not exist", input);
    }
    for (rule, hits) in &report.rule_hits {
        info!("  {}: {} rows", rule, hits);
    }
    Ok(())
}

fn inspect(base_dir: &Path, config: &CleanerConfig) -> Result<()> {
    info!("Inspecting {:?}", base_dir);
    let import = collect_items(base_dir, config).context("Failed to read phone sheets")?;

    println!("Phone Sheet Analysis");
    println!("====================");
    for report in &import.reports {
        if report.found {
            println!("{}: {}", report.source.label(), report.stats);
        } else {
            println!("{}: not found ({:?})", report.source.label(), report.path);
        }
    }
    println!();

    let total = import.total_stats();
    println!("Total: {}", total);
    println!(
        "Items without serials: {}",
        import.items.iter().filter(|i| i.serials.is_empty()).count()
    );
    println!(
        "Items priced at zero: {}",
        import.items.iter().filter(|i| i.batch.unit_cost == 0.0).count()
    );
    println!("Stock cost: {:.2}", import.stock_cost());
    println!(
        "Stock value: {:.2} (markup x{})",
        import.stock_value(),
        config.markup_factor
    );

    Ok(())
}
