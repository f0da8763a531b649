//! Catalog seeding from configuration.
//!
//! Seeding is idempotent: ingredients are matched by name and suppliers by name,
//! so running it on every startup only inserts what is missing.

use crate::{
    config::catalog::CatalogConfig,
    core::catalog,
    errors::Result,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Ingredients newly created
    pub ingredients_created: usize,
    /// Suppliers newly created
    pub suppliers_created: usize,
}

/// Inserts the configured ingredients and suppliers that do not exist yet.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<SeedReport> {
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for entry in &config.ingredients {
        if catalog::get_ingredient_by_name(&txn, &entry.name).await?.is_none() {
            catalog::get_or_create_ingredient(&txn, &entry.name, &entry.unit).await?;
            report.ingredients_created += 1;
        }
    }

    for entry in &config.suppliers {
        if catalog::get_supplier_by_name(&txn, &entry.name).await?.is_none() {
            catalog::create_supplier(&txn, &entry.name, entry.contact.clone(), entry.phone.clone())
                .await?;
            report.suppliers_created += 1;
        }
    }

    txn.commit().await?;
    Ok(report)
}
