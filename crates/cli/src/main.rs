//! ShopCo CLI - Browse the catalog and run storefront sessions.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! shopco browse
//!
//! # Search within a category
//! shopco browse --query shoe --category Shoes
//!
//! # List categories with product counts
//! shopco categories
//!
//! # Walk through splash and registration, then fill a cart
//! shopco session --name Grace --surname Hopper --phone "+1 555 123 4567" \
//!     --add 1 --add 1 --set 4=3
//! ```
//!
//! # Commands
//!
//! - `browse` - Search and filter the catalog
//! - `categories` - List product categories
//! - `session` - Run one visitor session end to end
//!
//! Set `RUST_LOG` to adjust log output, and pass `--json` for JSON logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopco_core::ProductId;
use shopco_storefront::{StorefrontConfig, StorefrontState};

mod commands;

#[derive(Parser)]
#[command(name = "shopco")]
#[command(author, version, about = "ShopCo storefront from the command line")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter the product catalog
    Browse {
        /// Case-insensitive text to find in product names and descriptions
        #[arg(short, long, default_value = "")]
        query: String,

        /// Exact category name, e.g. "Home & Kitchen"
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List product categories
    Categories,
    /// Run a visitor session: splash, registration, then cart actions
    Session {
        /// First name
        #[arg(long)]
        name: String,

        /// Last name
        #[arg(long)]
        surname: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Add one unit of a product (repeatable)
        #[arg(long = "add", value_name = "ID")]
        add: Vec<ProductId>,

        /// Set a product's quantity; zero or less removes it (repeatable)
        #[arg(long = "set", value_name = "ID=QTY", value_parser = commands::session::parse_set)]
        set: Vec<(ProductId, i64)>,

        /// Remove a product from the cart (repeatable)
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<ProductId>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shopco=info,shopco_storefront=info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = StorefrontState::from_config(config)?;

    match cli.command {
        Commands::Browse { query, category } => {
            commands::browse::products(&state, &query, &category);
        }
        Commands::Categories => commands::browse::categories(&state),
        Commands::Session {
            name,
            surname,
            phone,
            add,
            set,
            remove,
        } => {
            let visitor = commands::session::Visitor {
                name,
                surname,
                phone,
            };
            let actions = commands::session::Actions { add, set, remove };
            commands::session::run(&state, visitor, actions).await?;
        }
    }
    Ok(())
}
