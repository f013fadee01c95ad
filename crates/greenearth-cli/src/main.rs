mod oneshot;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use greenearth_cart::{CartStore, FileStore, KeyValueStore, MemoryStore};
use greenearth_catalog::CatalogClient;
use greenearth_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "greenearth")]
#[command(about = "Green Earth tree storefront")]
struct Cli {
    /// Root of the catalog API. Overrides `GREENEARTH_API_BASE_URL`.
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Directory for the persisted cart. Overrides `GREENEARTH_DATA_DIR`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep the cart in memory only, for one `browse` session. The cart
    /// starts empty and is discarded on exit, so `cart` commands refuse it.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive storefront (default).
    Browse,
    /// List catalog categories.
    Categories,
    /// List plants, optionally for one category.
    Plants {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one plant's details.
    Show { id: String },
    /// Inspect or change the cart.
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
}

#[derive(Debug, Subcommand)]
enum CartCommands {
    Show,
    Add { id: String },
    Inc { id: String },
    Dec { id: String },
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    check_flags(&cli)?;

    let mut config = greenearth_core::load_app_config()?;
    apply_overrides(&mut config, &cli);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        api_base_url = %config.api_base_url,
        data_dir = %config.data_dir.display(),
        ephemeral = cli.ephemeral,
        "starting greenearth"
    );

    let catalog = CatalogClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;
    let cart_store = open_cart_store(&config, cli.ephemeral);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => shell::run(catalog, cart_store, config.money_locale).await,
        Commands::Categories => oneshot::run_categories(&catalog).await,
        Commands::Plants { category } => {
            oneshot::run_plants(&catalog, category.as_deref(), config.money_locale).await
        }
        Commands::Show { id } => oneshot::run_show(&catalog, &id, config.money_locale).await,
        Commands::Cart { command } => {
            oneshot::run_cart(&catalog, cart_store, command, config.money_locale).await
        }
    }
}

/// Rejects flag combinations that would silently do nothing.
fn check_flags(cli: &Cli) -> anyhow::Result<()> {
    if cli.ephemeral && matches!(cli.command, Some(Commands::Cart { .. })) {
        anyhow::bail!(
            "--ephemeral cannot be used with `cart`: an in-memory cart is discarded when the command exits"
        );
    }
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(url) = &cli.api_base_url {
        config.api_base_url.clone_from(url);
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
}

fn open_cart_store(config: &AppConfig, ephemeral: bool) -> CartStore<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&config.data_dir))
    };
    CartStore::new(store)
}

#[cfg(test)]
mod tests;
