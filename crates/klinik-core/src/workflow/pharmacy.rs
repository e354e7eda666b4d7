//! Pharmacy: dispense prescriptions and move them to history.
//!
//! Each matched prescription line removes a fixed number of units from the
//! catalog, whatever quantity the line itself states. Payment reads the
//! quantity from the text instead, so the two can disagree for the same line.

use tracing::{debug, info};

use crate::config::ClinicConfig;
use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{ExaminationRecord, Medicine};
use crate::prescription::reconcile;

use super::{ClinicError, ClinicResult};

/// A prescription line as the pharmacist sees it before dispensing.
#[derive(Debug, Clone, PartialEq)]
pub struct DispenseLine {
    /// Line as written
    pub line: String,
    pub medicine_id: Option<String>,
    pub medicine_name: Option<String>,
    /// Stock on hand before dispensing
    pub stock: Option<i64>,
    pub low_stock: bool,
}

/// Result of dispensing one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DispenseOutcome {
    /// The record as moved to history
    pub record: ExaminationRecord,
    /// (medicine id, stock after) for each decrement, in line order
    pub decrements: Vec<(String, i64)>,
    /// Lines that matched no catalog entry
    pub unmatched: Vec<String>,
}

/// Records waiting for the pharmacy.
pub fn pending_prescriptions<S: KeyValueStore + ?Sized>(store: &S) -> Vec<ExaminationRecord> {
    Repository::new(store).load_collection(Slot::Examinations)
}

/// Records already dispensed, oldest first.
pub fn dispense_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<ExaminationRecord> {
    Repository::new(store).load_collection(Slot::DispenseHistory)
}

fn find_record(records: &[ExaminationRecord], id: &str) -> ClinicResult<usize> {
    records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| ClinicError::NotFound(format!("prescription {}", id)))
}

/// Show what dispensing `id` would touch.
pub fn preview<S: KeyValueStore + ?Sized>(
    store: &S,
    config: &ClinicConfig,
    id: &str,
) -> ClinicResult<Vec<DispenseLine>> {
    let repo = Repository::new(store);
    let records: Vec<ExaminationRecord> = repo.load_collection(Slot::Examinations);
    let record = &records[find_record(&records, id)?];
    let catalog: Vec<Medicine> = repo.load_collection(Slot::Medicines);

    Ok(reconcile(&record.prescription, &catalog)
        .into_iter()
        .map(|matched| {
            let medicine = matched.medicine_index.map(|i| &catalog[i]);
            DispenseLine {
                line: matched.line.raw,
                medicine_id: medicine.map(|m| m.id.clone()),
                medicine_name: medicine.map(|m| m.name.clone()),
                stock: medicine.map(|m| m.stock),
                low_stock: medicine.is_some_and(|m| m.stock < config.low_stock_threshold),
            }
        })
        .collect())
}

/// Dispense the first pending record with `id`.
///
/// Writes, in order: the catalog, the pending list without the record, and
/// the history with the record appended. Stock is not clamped at zero.
pub fn dispense<S: KeyValueStore + ?Sized>(
    store: &S,
    config: &ClinicConfig,
    id: &str,
) -> ClinicResult<DispenseOutcome> {
    let repo = Repository::new(store);
    let mut records: Vec<ExaminationRecord> = repo.load_collection(Slot::Examinations);
    let index = find_record(&records, id)?;
    let mut catalog: Vec<Medicine> = repo.load_collection(Slot::Medicines);

    let mut decrements = Vec::new();
    let mut unmatched = Vec::new();
    for matched in reconcile(&records[index].prescription, &catalog) {
        match matched.medicine_index {
            Some(i) => {
                let medicine = &mut catalog[i];
                medicine.stock -= config.pharmacy_decrement;
                debug!(
                    medicine = %medicine.id,
                    stock = medicine.stock,
                    line = %matched.line.raw,
                    "stock decremented"
                );
                decrements.push((medicine.id.clone(), medicine.stock));
            }
            None => unmatched.push(matched.line.raw),
        }
    }
    repo.save_collection(Slot::Medicines, &catalog)?;

    let mut record = records.remove(index);
    repo.save_collection(Slot::Examinations, &records)?;

    record.mark_dispensed();
    let mut history: Vec<ExaminationRecord> = repo.load_collection(Slot::DispenseHistory);
    history.push(record.clone());
    repo.save_collection(Slot::DispenseHistory, &history)?;

    info!(
        id = %record.id,
        decremented = decrements.len(),
        unmatched = unmatched.len(),
        "prescription dispensed"
    );
    Ok(DispenseOutcome {
        record,
        decrements,
        unmatched,
    })
}
