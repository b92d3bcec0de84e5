mod explore;
mod report;

use clap::{Parser, Subcommand};
use halalfinder_core::AppConfig;
use halalfinder_sheets::{load_app_data, resolve_tab_url, LoadedAppData, SheetClient};
use tracing_subscriber::EnvFilter;

use crate::explore::ExploreArgs;

#[derive(Debug, Parser)]
#[command(name = "halalfinder-cli")]
#[command(about = "HalalFinder command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where to read the dataset from. Defaults to `GOOGLE_SHEET_URL`.
#[derive(Debug, Clone, Default, clap::Args)]
struct SourceArgs {
    /// Spreadsheet share or "publish to web" link, overriding `GOOGLE_SHEET_URL`
    #[arg(long)]
    sheet_url: Option<String>,

    /// Ignore any configured sheet and use the bundled sample data
    #[arg(long, conflicts_with = "sheet_url")]
    sample: bool,
}

impl SourceArgs {
    fn reference<'a>(&'a self, config: &'a AppConfig) -> Option<&'a str> {
        if self.sample {
            return None;
        }
        self.sheet_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| config.sheet_url())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the full dataset and print it as JSON
    Fetch {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the data-health report for the loaded dataset
    Health {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the CSV export URL a sheet reference resolves to for one tab
    ResolveUrl {
        /// Spreadsheet share or "publish to web" link
        reference: String,
        /// Tab name, e.g. `restaurants`
        tab: String,
    },
    /// Filter and sort restaurants the way the explore page does
    Explore {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        args: ExploreArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = halalfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Fetch { source }) => {
            let loaded = load(&config, &source).await?;
            println!("{}", serde_json::to_string_pretty(&loaded.data)?);
        }
        Some(Commands::Health { source }) => {
            let loaded = load(&config, &source).await?;
            report::print_health(&loaded);
        }
        Some(Commands::ResolveUrl { reference, tab }) => {
            println!("{}", resolve_tab_url(&reference, &tab));
        }
        Some(Commands::Explore { source, args }) => {
            let loaded = load(&config, &source).await?;
            explore::run_explore(&loaded.data, &args);
        }
        None => println!("halalfinder-cli ready; run with --help for commands"),
    }

    Ok(())
}

async fn load(config: &AppConfig, source: &SourceArgs) -> anyhow::Result<LoadedAppData> {
    let client = SheetClient::new(config.sheet_timeout_secs, &config.user_agent)?;
    let loaded = load_app_data(&client, source.reference(config)).await;
    tracing::info!(
        source = loaded.source.as_str(),
        restaurants = loaded.data.restaurants.len(),
        "dataset loaded"
    );
    Ok(loaded)
}
