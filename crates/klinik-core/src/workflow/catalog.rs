//! Medicine catalog maintenance.

use tracing::info;

use crate::config::ClinicConfig;
use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{Medicine, StockStatus};

use super::{ClinicError, ClinicResult};

/// Templates offered when adding a medicine.
pub fn catalog_templates() -> Vec<Medicine> {
    Medicine::templates()
}

/// The stored catalog, in stored order.
pub fn list_medicines<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Medicine> {
    Repository::new(store).load_collection(Slot::Medicines)
}

/// Catalog entries whose name or category contains `query`.
pub fn search_medicines<S: KeyValueStore + ?Sized>(store: &S, query: &str) -> Vec<Medicine> {
    list_medicines(store)
        .into_iter()
        .filter(|m| m.matches_query(query))
        .collect()
}

/// Append the template with `template_id` to the catalog with the configured
/// initial stock.
///
/// Adding the same template twice yields two entries with the same id; the
/// pharmacy and payment screens use the first.
pub fn add_from_template<S: KeyValueStore + ?Sized>(
    store: &S,
    config: &ClinicConfig,
    template_id: &str,
) -> ClinicResult<Medicine> {
    let mut medicine = catalog_templates()
        .into_iter()
        .find(|m| m.id == template_id)
        .ok_or_else(|| ClinicError::NotFound(format!("catalog template {}", template_id)))?;
    medicine.stock = config.initial_stock;

    let repo = Repository::new(store);
    let mut catalog: Vec<Medicine> = repo.load_collection(Slot::Medicines);
    catalog.push(medicine.clone());
    repo.save_collection(Slot::Medicines, &catalog)?;

    info!(id = %medicine.id, stock = medicine.stock, "medicine added");
    Ok(medicine)
}

/// Classify a medicine's stock level.
pub fn stock_status(medicine: &Medicine, config: &ClinicConfig) -> StockStatus {
    StockStatus::classify(
        medicine.stock,
        config.low_stock_threshold,
        config.limited_stock_threshold,
    )
}
