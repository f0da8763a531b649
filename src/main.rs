use canteen_planner::{
    actions::{self, ActionResult},
    config::{catalog, database},
    core::{procurement::OrderLineInput, seed},
    errors::{Error, Result},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Canteen menu planning and procurement
#[derive(Debug, Parser)]
#[command(name = "canteen-planner", version)]
struct Cli {
    /// Database URL (`SQLite`)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Catalog file with canteens, meal slots, ingredients and suppliers
    #[arg(long, env = "CANTEEN_CONFIG", default_value = catalog::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create tables and seed ingredients and suppliers from the catalog
    Seed,
    /// Total ingredient demand of the submitted menus for a date
    Aggregate {
        #[arg(long)]
        date: String,
    },
    /// Ingredient ids already on a purchase order for a date
    Assigned {
        #[arg(long)]
        date: String,
    },
    /// Aggregated ingredients not yet on any purchase order
    Pending {
        #[arg(long)]
        date: String,
    },
    /// Purchase orders for a target date
    Orders {
        #[arg(long)]
        date: String,
    },
    /// Everything the procurement screen shows for a date
    Procurement {
        #[arg(long)]
        date: String,
    },
    /// Create a draft purchase order
    Order {
        /// Target (menu) date
        #[arg(long)]
        date: String,
        /// Supplier id
        #[arg(long)]
        supplier: i64,
        /// `INGREDIENT_ID:QUANTITY:UNIT[:REMARK]`, repeatable
        #[arg(long = "line", value_parser = parse_order_line, required = true)]
        lines: Vec<OrderLineInput>,
    },
    /// Menu counts per day in a date range
    Stats {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

fn parse_order_line(raw: &str) -> std::result::Result<OrderLineInput, String> {
    let mut parts = raw.splitn(4, ':');
    let (Some(id), Some(quantity), Some(unit)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected INGREDIENT_ID:QUANTITY:UNIT[:REMARK], got {raw:?}"));
    };
    Ok(OrderLineInput {
        ingredient_id: id
            .trim()
            .parse()
            .map_err(|e| format!("bad ingredient id {id:?}: {e}"))?,
        quantity: quantity
            .trim()
            .parse()
            .map_err(|e| format!("bad quantity {quantity:?}: {e}"))?,
        unit: unit.trim().to_string(),
        remark: parts.next().map(str::to_string),
    })
}

fn print<T: Serialize>(result: &ActionResult<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn ensure_sqlite_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or_default();
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Config {
                message: format!("Failed to create database directory {}: {e}", parent.display()),
            })?;
        }
    }
    Ok(())
}

async fn run(cli: Cli, db: &DatabaseConnection) -> Result<()> {
    match cli.command {
        Command::Seed => {
            let config = catalog::load_config_or_default(&cli.config)?;
            let report = seed::seed_catalog(db, &config).await?;
            info!(
                "Seeded {} ingredients and {} suppliers.",
                report.ingredients_created, report.suppliers_created
            );
            Ok(())
        }
        Command::Aggregate { date } => print(&actions::aggregate(db, &date).await),
        Command::Assigned { date } => print(&actions::assigned_ids(db, &date).await),
        Command::Pending { date } => print(&actions::pending_pool(db, &date).await),
        Command::Orders { date } => print(&actions::purchase_orders(db, &date).await),
        Command::Procurement { date } => print(&actions::procurement_data(db, &date).await),
        Command::Order {
            date,
            supplier,
            lines,
        } => print(&actions::create_purchase_order(db, &date, supplier, lines).await),
        Command::Stats { from, to } => print(&actions::menu_stats(db, &from, &to).await),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file before clap reads env-backed arguments
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Connect and make sure the schema exists
    let database_url = cli
        .database_url
        .clone()
        .unwrap_or_else(database::get_database_url);
    ensure_sqlite_dir(&database_url)?;
    let db = database::connect(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to {}: {}", database_url, e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Run the command
    run(cli, &db).await
}
