//! Silva CLI - manage the Silva shop from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List users, import a CSV file
//! silva users list
//! silva users import ./users.csv
//!
//! # Categories
//! silva categories create "Garden tools"
//! silva categories update 3 "Power tools"
//!
//! # Products
//! silva products create -n "Claw hammer" -d "Steel claw hammer" -p 149.90 -c 3
//! silva products add-to-cart 11
//!
//! # Cart
//! silva cart list
//! silva cart remove 4
//! ```
//!
//! Every command prints the outcome notice; `list` commands also print the
//! table. A warning or an error exits with status 1.
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Shop API root (default: `http://localhost:3000/api`),
//!   overridden by `--api-url`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use silva_admin::config::DEFAULT_API_BASE_URL;
use silva_core::{CartItemId, CategoryId, ProductId};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "silva")]
#[command(author, version, about = "Silva shop CLI")]
struct Cli {
    /// Shop API root
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,
    /// Create a single user
    Create {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Import users from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List all categories
    List,
    /// Create a category
    Create {
        /// Category name
        name: String,
    },
    /// Rename a category
    Update {
        id: CategoryId,
        /// New category name
        name: String,
    },
    /// Delete a category
    Delete { id: CategoryId },
}

#[derive(clap::Args)]
struct ProductArgs {
    /// Product name
    #[arg(short, long)]
    name: String,

    /// Product description
    #[arg(short, long)]
    description: String,

    /// Price, must exceed 100
    #[arg(short, long)]
    price: String,

    /// Category ID
    #[arg(short, long)]
    category: String,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,
    /// Create a product
    Create(ProductArgs),
    /// Update a product
    Update {
        id: ProductId,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product
    Delete { id: ProductId },
    /// Put one unit of a product in the cart
    AddToCart { id: ProductId },
}

#[derive(Subcommand)]
enum CartAction {
    /// List the cart lines
    List,
    /// Remove a cart line
    Remove { id: CartItemId },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new(&cli.api_url)?;

    match cli.command {
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list(&ctx).await?,
            UserAction::Create {
                username,
                email,
                password,
            } => commands::users::create(&ctx, username, email, password).await?,
            UserAction::Import { file } => commands::users::import(&ctx, &file).await?,
        },
        Commands::Categories { action } => match action {
            CategoryAction::List => commands::categories::list(&ctx).await?,
            CategoryAction::Create { name } => {
                commands::categories::save(&ctx, None, name).await?;
            }
            CategoryAction::Update { id, name } => {
                commands::categories::save(&ctx, Some(id), name).await?;
            }
            CategoryAction::Delete { id } => commands::categories::delete(&ctx, id).await?,
        },
        Commands::Products { action } => match action {
            ProductAction::List => commands::products::list(&ctx).await?,
            ProductAction::Create(product) => {
                commands::products::save(&ctx, None, product.into_fields()).await?;
            }
            ProductAction::Update { id, product } => {
                commands::products::save(&ctx, Some(id), product.into_fields()).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&ctx, id).await?,
            ProductAction::AddToCart { id } => commands::products::add_to_cart(&ctx, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(&ctx).await?,
            CartAction::Remove { id } => commands::cart::remove(&ctx, id).await?,
        },
    }
    Ok(())
}

impl ProductArgs {
    fn into_fields(self) -> commands::products::ProductFields {
        commands::products::ProductFields {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category,
        }
    }
}
