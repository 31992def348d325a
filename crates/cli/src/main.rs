//! Catalog Console CLI - catalog administration from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Who am I logged in as?
//! catalog-cli status
//! catalog-cli login
//!
//! # Browse the account
//! catalog-cli businesses
//! catalog-cli catalogs -b <business-id>
//!
//! # Products
//! catalog-cli products list -c <catalog-id>
//! catalog-cli products add -c <catalog-id> -n "Red Mug" -b Acme \
//!     -l https://shop.example/mug -p 19.99 -i https://shop.example/mug.jpg
//! catalog-cli products delete 101 102
//!
//! # Product sets
//! catalog-cli sets list -c <catalog-id>
//! catalog-cli sets create -c <catalog-id> "Summer Sale"
//! catalog-cli sets delete <set-id>
//! catalog-cli sets set-products -s <set-id> 101 102 103
//!
//! # Draft a description (uses sample copy without GEMINI_API_KEY)
//! catalog-cli describe "Red Mug"
//! ```
//!
//! # Environment Variables
//!
//! See `catalog_client::config`: `GRAPH_APP_ID` plus
//! `GRAPH_ACCESS_TOKEN`/`GRAPH_USER_ID` for authenticated commands,
//! optional `GEMINI_API_KEY`/`GEMINI_MODEL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Catalog Console CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current login status
    Status,
    /// Log in and show the resulting session
    Login,
    /// End the platform session
    Logout,
    /// List businesses for the authenticated user
    Businesses,
    /// List product catalogs owned by a business
    Catalogs {
        /// Business id
        #[arg(short, long)]
        business: String,
    },
    /// Manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage product sets
    Sets {
        #[command(subcommand)]
        action: SetAction,
    },
    /// Draft a product description
    Describe {
        /// Product name to describe
        name: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List a catalog's products (first page)
    List {
        /// Catalog id
        #[arg(short, long)]
        catalog: String,
    },
    /// Create a product in a catalog
    Add {
        /// Catalog id
        #[arg(short, long)]
        catalog: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Description; drafted by the description writer when omitted
        #[arg(short, long)]
        description: Option<String>,

        /// Brand name
        #[arg(short, long)]
        brand: String,

        /// Landing-page URL
        #[arg(short, long)]
        link: String,

        /// Price in the currency's major unit (e.g. 19.99)
        #[arg(short, long)]
        price: rust_decimal::Decimal,

        /// ISO 4217 currency code
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Image URL
        #[arg(short, long)]
        image_url: String,
    },
    /// Delete products by id
    Delete {
        /// Product ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum SetAction {
    /// List a catalog's product sets with memberships
    List {
        /// Catalog id
        #[arg(short, long)]
        catalog: String,
    },
    /// Create product sets by name
    Create {
        /// Catalog id
        #[arg(short, long)]
        catalog: String,

        /// Set names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Delete product sets by id
    Delete {
        /// Set ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Replace a set's membership with the given product ids
    SetProducts {
        /// Set id
        #[arg(short, long)]
        set: String,

        /// Desired member product ids (may be empty to clear the set)
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Status => commands::session::status().await?,
        Commands::Login => commands::session::login().await?,
        Commands::Logout => commands::session::logout().await?,
        Commands::Businesses => commands::browse::businesses().await?,
        Commands::Catalogs { business } => commands::browse::catalogs(&business).await?,
        Commands::Products { action } => match action {
            ProductAction::List { catalog } => commands::products::list(&catalog).await?,
            ProductAction::Add {
                catalog,
                name,
                description,
                brand,
                link,
                price,
                currency,
                image_url,
            } => {
                commands::products::add(commands::products::AddArgs {
                    catalog,
                    name,
                    description,
                    brand,
                    link,
                    price,
                    currency,
                    image_url,
                })
                .await?;
            }
            ProductAction::Delete { ids } => commands::products::delete(&ids).await?,
        },
        Commands::Sets { action } => match action {
            SetAction::List { catalog } => commands::sets::list(&catalog).await?,
            SetAction::Create { catalog, names } => {
                commands::sets::create(&catalog, &names).await?;
            }
            SetAction::Delete { ids } => commands::sets::delete(&ids).await?,
            SetAction::SetProducts { set, ids } => {
                commands::sets::set_products(&set, ids).await?;
            }
        },
        Commands::Describe { name } => commands::describe::draft(&name).await?,
    }
    Ok(())
}
