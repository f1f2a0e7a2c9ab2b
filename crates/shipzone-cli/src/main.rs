mod run;

use std::path::PathBuf;

use clap::Parser;
use shipzone_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shipzone")]
#[command(about = "Route orders to the nearest warehouse and price their shipping")]
struct Cli {
    /// Order table (CSV); overrides `SHIPZONE_ORDERS_PATH`
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Rate table (CSV); overrides `SHIPZONE_RATES_PATH`
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Annotated output table; a timestamped name is used if it already exists
    #[arg(long)]
    output: Option<PathBuf>,

    /// Interactive map page
    #[arg(long)]
    map: Option<PathBuf>,

    /// YAML warehouse network replacing the built-in set
    #[arg(long)]
    network: Option<PathBuf>,
}

impl Cli {
    fn apply_to(self, config: &mut AppConfig) {
        if let Some(path) = self.orders {
            config.orders_path = path;
        }
        if let Some(path) = self.rates {
            config.rates_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if let Some(path) = self.map {
            config.map_path = path;
        }
        if let Some(path) = self.network {
            config.network_path = Some(path);
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = shipzone_core::load_app_config()?;
    cli.apply_to(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let report = run::run(&config, chrono::Local::now().naive_local())?;

    println!("Completed without error.");
    println!("Output table: {}", report.output_path.display());
    println!("Map: {}", report.map_path.display());
    let s = report.summary;
    println!(
        "{} rows: {} routed, {} invalid coordinates, {} weights coerced, {} without rate",
        s.rows, s.routed, s.invalid_coordinates, s.coerced_weights, s.unmatched_rates
    );

    Ok(())
}
