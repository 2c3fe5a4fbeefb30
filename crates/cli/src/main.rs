//! La Capke CLI - browse the menu, order and edit the catalog from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the menu grouped by section
//! capke menu
//!
//! # Order two kids' milanesas
//! capke cart add milanesa-papas -v Niños -q 2
//!
//! # Unlock editing and change a price
//! capke login Admin1
//! capke admin price wrap-pollo 12900
//!
//! # Bulk-add items from a YAML list of drafts
//! capke admin import new-items.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `LACAPKE_DATA_DIR` - directory holding the persisted state (default `.lacapke`)
//! - `LACAPKE_ADMIN_USERNAME` - username that unlocks admin mode (default `Admin1`)
//! - `LACAPKE_LOG_FORMAT` - `pretty` or `json`
//! - `RUST_LOG` - log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lacapke_core::{Category, ProductId};
use lacapke_menu::config::LogFormat;
use lacapke_menu::{FileStorage, LogNavigator, MenuConfig, Storefront};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "capke")]
#[command(author, version, about = "La Capke menu CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu grouped by section
    Menu,
    /// Show one product with its variants
    Product {
        /// Product id, e.g. `wrap-pollo`
        id: ProductId,
    },
    /// Show new items and house favourites
    Featured,
    /// Inspect or add to the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in locally (the admin username unlocks editing)
    Login {
        username: String,
    },
    /// Log out
    Logout,
    /// Edit the catalog (admin mode only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart lines and the subtotal
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Variant name (defaults to the first variant)
        #[arg(short, long)]
        variant: Option<String>,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a new product
    Add {
        /// Display name
        name: String,

        /// Explicit id (derived from the name if omitted)
        #[arg(long)]
        id: Option<ProductId>,

        /// Price in whole pesos (0 = not orderable online)
        #[arg(short, long, default_value_t = 0)]
        price: u64,

        /// Category (inferred from the id and name if omitted)
        #[arg(short, long)]
        category: Option<Category>,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Change a product's price
    Price {
        id: ProductId,
        /// New price in whole pesos
        price: u64,
    },
    /// Delete a product
    Delete {
        id: ProductId,
    },
    /// Restore the default menu
    Reset,
    /// Add every product from a YAML list of drafts
    Import {
        file: PathBuf,
    },
}

fn main() {
    let config = match MenuConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lacapke_menu=info,lacapke_cli=info".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Pretty)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, config: &MenuConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStorage::open(config.data_dir.clone())?;
    tracing::debug!(dir = %storage.dir().display(), "Opened data directory");

    let mut storefront = Storefront::new(
        Arc::new(storage),
        config,
        Arc::new(output::ConsoleNotifier),
        Arc::new(LogNavigator),
    );

    match cli.command {
        Commands::Menu => commands::menu::show(&mut storefront),
        Commands::Product { id } => commands::menu::product(&mut storefront, &id)?,
        Commands::Featured => commands::menu::featured(&mut storefront),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Add {
                id,
                variant,
                quantity,
            } => commands::cart::add(&mut storefront, id, variant, quantity)?,
        },
        Commands::Login { username } => commands::session::login(&storefront, &username)?,
        Commands::Logout => commands::session::logout(&storefront),
        Commands::Admin { action } => match action {
            AdminAction::Add {
                name,
                id,
                price,
                category,
                description,
            } => {
                let draft = commands::admin::draft(name, id, price, category, description);
                commands::admin::add(&mut storefront, draft)?;
            }
            AdminAction::Price { id, price } => {
                commands::admin::set_price(&mut storefront, &id, price)?;
            }
            AdminAction::Delete { id } => commands::admin::delete(&mut storefront, &id)?,
            AdminAction::Reset => commands::admin::reset(&mut storefront)?,
            AdminAction::Import { file } => commands::admin::import(&mut storefront, &file)?,
        },
    }
    Ok(())
}
