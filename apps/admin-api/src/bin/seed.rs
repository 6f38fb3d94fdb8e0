//! # Seed Data Generator
//!
//! Creates the dashboard admin account and a product catalog for
//! development.
//!
//! ## Usage
//! ```bash
//! # 40 products and admin@stockroom.local / admin123 (defaults)
//! cargo run -p stockroom-admin-api --bin seed
//!
//! # Custom amount, path and account
//! cargo run -p stockroom-admin-api --bin seed -- --count 200 --db ./data/stockroom.db \
//!     --email ops@example.com --password correct-horse
//! ```
//!
//! Each generated product has:
//! - Unique SKU: `{CATEGORY}-{INDEX}`
//! - Status derived from stock: 0 → Stock Out, under 10 → Stock Low
//! - Creation dates spread over the previous days, so newest-first
//!   ordering is visible in the table

use std::env;

use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use stockroom_admin_api::auth::hash_password;
use stockroom_core::validation::{validate_login, validate_new_product};
use stockroom_core::{NewProduct, ProductStatus};
use stockroom_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// (category code, category name, product names)
const CATALOG: &[(&str, &str, &[&str])] = &[
    (
        "ELC",
        "Electronics",
        &["Wireless Mouse", "USB-C Hub", "Webcam", "Desk Speaker", "Power Bank"],
    ),
    (
        "FUR",
        "Furniture",
        &["Office Chair", "Standing Desk", "Bookshelf", "Filing Cabinet"],
    ),
    (
        "OFF",
        "Office Supplies",
        &["Stapler", "Paper Ream", "Gel Pens", "Sticky Notes", "Binder Clips"],
    ),
    (
        "KIT",
        "Kitchen",
        &["Coffee Maker", "Kettle", "Water Bottle", "Lunch Box"],
    ),
    (
        "LGT",
        "Lighting",
        &["Desk Lamp", "LED Strip", "Floor Lamp"],
    ),
];

const SUPPLIERS: &[&str] = &[
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Supply",
    "Stark Industries",
];

struct Args {
    count: usize,
    db_path: String,
    name: String,
    email: String,
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    validate_login(&args.email, &args.password).context("invalid admin credentials")?;

    info!(db = %args.db_path, products = args.count, "Seeding database");

    let db = Database::new(DbConfig::new(&args.db_path)).await?;

    // Admin account
    match db.users().find_by_email(&args.email).await? {
        Some(existing) => info!(user_id = existing.id, "Admin account already present"),
        None => {
            let hash = hash_password(&args.password)?;
            let user = db.users().insert(&args.name, &args.email, &hash).await?;
            info!(user_id = user.id, email = %user.email, "Created admin account");
        }
    }

    // Products
    let existing = db.products().count().await?;
    if existing > 0 {
        warn!(
            existing,
            "Database already has products, skipping to avoid duplicates"
        );
        db.close().await;
        return Ok(());
    }

    let now = Utc::now();
    let mut generated = 0;
    for seed in 0..args.count {
        let product = generate_product(seed);
        validate_new_product(&product)?;

        // Older seeds get older timestamps
        let created_at = now - Duration::hours((args.count - seed) as i64 * 7);
        if let Err(e) = db.products().insert(&product, created_at).await {
            warn!(sku = %product.sku, error = %e, "Failed to insert product");
            continue;
        }
        generated += 1;
    }

    info!(
        generated,
        categories = db.products().categories().await?.len(),
        suppliers = db.products().suppliers().await?.len(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// `Ok(None)` when only help was requested.
fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args {
        count: 40,
        db_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./stockroom.db".to_string()),
        name: "Admin".to_string(),
        email: "admin@stockroom.local".to_string(),
        password: "admin123".to_string(),
    };

    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("missing value for {}", flag))
        };
        match flag.as_str() {
            "--count" | "-c" => {
                args.count = value()?.parse().context("--count must be a number")?;
            }
            "--db" | "-d" => args.db_path = value()?,
            "--name" => args.name = value()?,
            "--email" => args.email = value()?,
            "--password" => args.password = value()?,
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>        Number of products (default: 40)");
                println!("  -d, --db <PATH>        Database file (default: $DATABASE_PATH or ./stockroom.db)");
                println!("      --name <NAME>      Admin display name (default: Admin)");
                println!("      --email <EMAIL>    Admin email (default: admin@stockroom.local)");
                println!("      --password <PW>    Admin password (default: admin123)");
                println!("  -h, --help             Show this help message");
                return Ok(None);
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(Some(args))
}

/// Deterministic product for position `seed`.
fn generate_product(seed: usize) -> NewProduct {
    let (code, category, names) = CATALOG[seed % CATALOG.len()];
    let name = names[(seed / CATALOG.len()) % names.len()];
    let supplier = SUPPLIERS[(seed * 7) % SUPPLIERS.len()];

    // 0..=59 units, with every ninth product sold out
    let quantity_in_stock = if seed % 9 == 4 { 0 } else { ((seed * 13) % 60) as u32 };
    let status = match quantity_in_stock {
        0 => ProductStatus::StockOut,
        1..=9 => ProductStatus::StockLow,
        _ => ProductStatus::Available,
    };

    NewProduct {
        name: name.to_string(),
        supplier: supplier.to_string(),
        sku: format!("{}-{:04}", code, seed),
        category: category.to_string(),
        status,
        quantity_in_stock,
        // $4.99 - $204.99
        price_cents: 499 + ((seed * 2_731) % 20_000) as i64,
    }
}
