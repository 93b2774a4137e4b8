//! Print Quoter
//!
//! Cost estimator and back office for a 3D-printing storefront.

mod config;
mod db;
mod document;
mod error;
mod estimator;
mod media;
mod models;
mod slug;
mod storefront;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::document::QuoteDocument;
use crate::estimator::Breakdown;
use crate::media::MediaStore;
use crate::models::{CalculatorInputs, Complexity, OrderStatus, ProductStatus};

#[derive(Parser)]
#[command(name = "print-quoter")]
#[command(about = "Cost estimator and back office for a 3D-printing storefront")]
struct Cli {
    /// Path to the SQLite database
    #[arg(short, long, env = "PRINT_QUOTER_DB", default_value = "print_quoter.db")]
    database: PathBuf,

    /// Path to the TOML settings file
    #[arg(short, long, env = "PRINT_QUOTER_CONFIG", default_value = "print-quoter.toml")]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize empty database with schema
    Init,

    /// Estimate costs for a JSON inputs file
    Estimate {
        inputs: PathBuf,

        /// Print the results as JSON instead of a breakdown
        #[arg(long)]
        json: bool,
    },

    /// Manage saved quotes
    #[command(subcommand)]
    Quote(QuoteCommand),

    /// Manage catalog products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Manage product categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage customer orders
    #[command(subcommand)]
    Order(OrderCommand),

    /// Load a sample quote and category for trying things out
    LoadSample,
}

#[derive(Subcommand)]
enum QuoteCommand {
    /// Estimate an inputs file and save it as a quote
    Save {
        inputs: PathBuf,
        #[arg(long)]
        owner: String,
    },
    /// List an owner's quotes, newest first
    List {
        #[arg(long)]
        owner: String,
    },
    Show {
        id: String,
    },
    /// Re-estimate a quote from a new inputs file
    Update {
        id: String,
        inputs: PathBuf,
    },
    Delete {
        id: String,
    },
    /// Write the customer quote document
    Document {
        id: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Publish a quote to the storefront catalog
    Publish {
        id: String,
        #[arg(long)]
        description: String,
        /// Units in stock
        #[arg(long)]
        stock: i64,
        /// Image files to upload (at least one)
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// List storefront products (active only unless --all)
    List {
        #[arg(long)]
        all: bool,
    },
    /// Set status: active, out_of_stock or restocking
    Status { id: String, status: String },
    /// Set units in stock
    Stock { id: String, quantity: i64 },
    Delete { id: String },
    /// Print the pre-filled order message and link
    OrderLink { id: String },
}

#[derive(Subcommand)]
enum CategoryCommand {
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    List,
}

#[derive(Subcommand)]
enum OrderCommand {
    /// Record an order for a product
    Add {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        notes: Option<String>,
    },
    List,
    /// Set status: pending, confirmed or cancelled
    Status { id: String, status: String },
    Delete { id: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;

    let conn = Connection::open(&cli.database)
        .with_context(|| format!("Failed to open database {}", cli.database.display()))?;
    db::init_schema(&conn)?;

    match cli.command {
        Commands::Init => {
            println!("Database initialized at: {}", cli.database.display());
        }

        Commands::Estimate { inputs, json } => {
            let inputs = read_inputs(&inputs)?;
            let results = estimator::estimate(&inputs)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let breakdown = Breakdown {
                    inputs: &inputs,
                    results: &results,
                    currency: &config.store.currency_symbol,
                };
                println!("{}", breakdown);
            }
        }

        Commands::Quote(cmd) => run_quote(&conn, &config, cmd)?,
        Commands::Product(cmd) => run_product(&conn, &config, cmd)?,
        Commands::Category(cmd) => run_category(&conn, cmd)?,
        Commands::Order(cmd) => run_order(&conn, &config, cmd)?,

        Commands::LoadSample => {
            load_sample_data(&conn)?;
            println!("Sample data loaded successfully!");
        }
    }

    Ok(())
}

fn read_inputs(path: &Path) -> Result<CalculatorInputs> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid calculator inputs in {}", path.display()))
}

fn run_quote(conn: &Connection, config: &Config, cmd: QuoteCommand) -> Result<()> {
    let currency = config.store.currency_symbol.as_str();

    match cmd {
        QuoteCommand::Save { inputs, owner } => {
            let inputs = read_inputs(&inputs)?;
            let results = estimator::estimate(&inputs)?;
            let quote = db::insert_quote(conn, &owner, &inputs, &results)?;
            info!(id = %quote.id, %owner, "quote saved");
            println!("Saved quote {} ({} {:.2})", quote.id, currency, results.final_price_with_fee);
        }

        QuoteCommand::List { owner } => {
            let quotes = db::list_quotes(conn, &owner)?;
            if quotes.is_empty() {
                println!("No quotes for '{}'.", owner);
            } else {
                println!("{:<36} {:<24} {:<20} {:<20} {:>12}", "ID", "Created", "Client", "Piece", "Price");
                println!("{}", "-".repeat(116));
                for q in quotes {
                    println!(
                        "{:<36} {:<24} {:<20} {:<20} {:>12.2}",
                        q.id,
                        q.created_at,
                        q.client_name.as_deref().unwrap_or("-"),
                        q.piece_name.as_deref().unwrap_or("-"),
                        q.results.final_price_with_fee
                    );
                }
            }
        }

        QuoteCommand::Show { id } => {
            let quote = db::get_quote(conn, &id)?;
            println!("Quote {} (owner {}, created {})\n", quote.id, quote.owner_id, quote.created_at);
            println!("{}", Breakdown { inputs: &quote.inputs, results: &quote.results, currency });
        }

        QuoteCommand::Update { id, inputs } => {
            let inputs = read_inputs(&inputs)?;
            let results = estimator::estimate(&inputs)?;
            db::update_quote(conn, &id, &inputs, &results)?;
            info!(%id, "quote updated");
            println!("Updated quote {} ({} {:.2})", id, currency, results.final_price_with_fee);
        }

        QuoteCommand::Delete { id } => {
            db::delete_quote(conn, &id)?;
            info!(%id, "quote deleted");
            println!("Deleted quote {}", id);
        }

        QuoteCommand::Document { id, out } => {
            let quote = db::get_quote(conn, &id)?;
            let doc = QuoteDocument {
                inputs: &quote.inputs,
                results: &quote.results,
                date: Local::now().date_naive(),
                currency,
            };
            let path = out.join(doc.file_name());
            fs::write(&path, doc.to_string())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }

        QuoteCommand::Publish { id, description, stock, images, category } => {
            let quote = db::get_quote(conn, &id)?;
            let media = MediaStore::new(&config.store.media_dir, &config.store.media_base_url);

            let mut urls = Vec::with_capacity(images.len());
            for image in &images {
                urls.push(media.store(image)?);
            }

            let payload = storefront::product_from_quote(&quote, &description, stock, urls, category)?;
            let product = db::insert_product(conn, &payload)?;
            info!(quote = %id, product = %product.id, images = product.images.len(), "quote published");
            println!(
                "Published \"{}\" at {} {:.2} with {} image(s): {}",
                product.name,
                currency,
                product.price,
                product.images.len(),
                product.id
            );
        }
    }

    Ok(())
}

fn run_product(conn: &Connection, config: &Config, cmd: ProductCommand) -> Result<()> {
    match cmd {
        ProductCommand::List { all } => {
            let products = db::list_products(conn, !all)?;
            if products.is_empty() {
                println!("No products in catalog.");
            } else {
                println!(
                    "{:<36} {:<28} {:>10} {:>6} {:<12} {:<36}",
                    "ID", "Product", "Price", "Stock", "Status", "Category"
                );
                println!("{}", "-".repeat(133));
                for p in products {
                    println!(
                        "{:<36} {:<28} {:>10.2} {:>6} {:<12} {:<36}",
                        p.id,
                        p.name,
                        p.price,
                        p.quantity,
                        p.status,
                        p.category_id.as_deref().unwrap_or("-")
                    );
                    if let Some(description) = p.description.as_deref().filter(|d| !d.is_empty()) {
                        println!("    {}", description);
                    }
                }
            }
        }

        ProductCommand::Status { id, status } => {
            let status: ProductStatus = status.parse()?;
            db::update_product_status(conn, &id, status)?;
            info!(%id, %status, "product status updated");
            println!("Product {} is now {}", id, status);
        }

        ProductCommand::Stock { id, quantity } => {
            db::update_product_quantity(conn, &id, quantity)?;
            info!(%id, quantity, "product stock updated");
            println!("Product {} now has {} in stock", id, quantity);
        }

        ProductCommand::Delete { id } => {
            db::delete_product(conn, &id)?;
            info!(%id, "product deleted");
            println!("Deleted product {}", id);
        }

        ProductCommand::OrderLink { id } => {
            let product = db::get_product(conn, &id)?;
            println!("{}\n", storefront::order_message(&product));
            println!("{}", storefront::order_link(&config.store.whatsapp_number, &product)?);
        }
    }

    Ok(())
}

fn run_category(conn: &Connection, cmd: CategoryCommand) -> Result<()> {
    match cmd {
        CategoryCommand::Add { name, description } => {
            let category = db::insert_category(conn, &name, description.as_deref())?;
            println!("Added category {} ({})", category.name, category.slug);
        }

        CategoryCommand::List => {
            for c in db::list_categories(conn)? {
                println!("{:<36} {:<24} {}", c.id, c.slug, c.description.unwrap_or_default());
            }
        }
    }

    Ok(())
}

fn run_order(conn: &Connection, config: &Config, cmd: OrderCommand) -> Result<()> {
    let currency = config.store.currency_symbol.as_str();

    match cmd {
        OrderCommand::Add { customer, phone, product, quantity, notes } => {
            let product = db::get_product(conn, &product)?;
            let order = db::insert_order(
                conn,
                &storefront::order_for(&product, &customer, &phone, quantity, notes),
            )?;
            info!(id = %order.id, product = %product.id, "order recorded");
            println!("Recorded order {} ({} {:.2})", order.id, currency, order.total_price);
        }

        OrderCommand::List => {
            let orders = db::list_orders(conn)?;
            if orders.is_empty() {
                println!("No orders.");
            } else {
                println!(
                    "{:<36} {:<24} {:<20} {:<18} {:<28} {:>4} {:>6} {:>10} {:<10}",
                    "ID", "Created", "Customer", "Phone", "Product", "Qty", "Stock", "Total", "Status"
                );
                println!("{}", "-".repeat(164));
                for listing in orders {
                    let o = &listing.order;
                    let stock = listing
                        .product_stock
                        .map_or_else(|| "-".to_string(), |s| s.to_string());
                    println!(
                        "{:<36} {:<24} {:<20} {:<18} {:<28} {:>4} {:>6} {:>10.2} {:<10}",
                        o.id,
                        o.created_at,
                        o.customer_name,
                        o.customer_phone,
                        listing.product_label(),
                        o.quantity,
                        stock,
                        o.total_price,
                        o.status
                    );
                    if let Some(notes) = o.notes.as_deref().filter(|n| !n.is_empty()) {
                        println!("    Notes: {}", notes);
                    }
                }
            }
        }

        OrderCommand::Status { id, status } => {
            let status: OrderStatus = status.parse()?;
            db::update_order_status(conn, &id, status)?;
            info!(%id, %status, "order status updated");
            println!("Order {} is now {}", id, status);
        }

        OrderCommand::Delete { id } => {
            db::delete_order(conn, &id)?;
            info!(%id, "order deleted");
            println!("Deleted order {}", id);
        }
    }

    Ok(())
}

/// Save a sample quote and category without needing an inputs file
fn load_sample_data(conn: &Connection) -> Result<()> {
    let inputs = CalculatorInputs {
        client_name: Some("Cliente Exemplo".to_string()),
        piece_name: "Vaso Geométrico".to_string(),
        quantity: 2,
        material: "PLA Silk".to_string(),
        manual_painting: false,
        filament_price: 120.0,
        filament_used: 180.0,
        print_time_hours: 6.0,
        print_time_minutes: 30.0,
        printer_power: 150.0,
        energy_rate: 0.92,
        printer_value: 2000.0,
        printer_lifespan: 5000.0,
        hourly_rate: 20.0,
        active_work_time: 0.75,
        finishing_cost: 3.0,
        maintenance_cost: 0.5,
        failure_rate: 5.0,
        complexity: Complexity::Intermediate,
        profit_margin: 100.0,
        additional_fee: 12.0,
        desired_price: None,
    };
    let results = estimator::estimate(&inputs)?;
    let quote = db::insert_quote(conn, "sample-admin", &inputs, &results)?;
    println!("Saved sample quote {} for owner 'sample-admin'", quote.id);

    if db::list_categories(conn)?.iter().all(|c| c.slug != "decoracao") {
        db::insert_category(conn, "Decoracao", Some("Vasos, luminarias e enfeites"))?;
    }

    Ok(())
}
