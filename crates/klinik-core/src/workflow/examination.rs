//! Examination: move a patient from the queue to the prescription list.

use tracing::info;

use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{ExaminationForm, ExaminationRecord, Patient};

use super::{ClinicError, ClinicResult};

/// Complete the examination of a queued patient.
///
/// Removes the first queued patient with `patient_id` and appends an
/// examination record carrying the same id. The queue is written before the
/// prescription list.
pub fn complete_examination<S: KeyValueStore + ?Sized>(
    store: &S,
    patient_id: &str,
    form: &ExaminationForm,
) -> ClinicResult<ExaminationRecord> {
    let repo = Repository::new(store);
    let mut patients: Vec<Patient> = repo.load_collection(Slot::Patients);
    let mut records: Vec<ExaminationRecord> = repo.load_collection(Slot::Examinations);

    let index = patients
        .iter()
        .position(|p| p.id == patient_id)
        .ok_or_else(|| ClinicError::NotFound(format!("patient {} is not in the queue", patient_id)))?;

    let patient = patients.remove(index);
    let record = ExaminationRecord::from_patient(&patient, form);
    records.push(record.clone());

    repo.save_collection(Slot::Patients, &patients)?;
    repo.save_collection(Slot::Examinations, &records)?;

    info!(
        id = %record.id,
        queue = patients.len(),
        prescriptions = records.len(),
        "examination completed"
    );
    Ok(record)
}
