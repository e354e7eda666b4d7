//! Patient registration.

use tracing::info;

use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{lenient, Patient, RegistrationForm};

use super::{ClinicError, ClinicResult};

/// Numeric part of a stored patient id. Anything unreadable counts as 0.
fn counter_value(raw: Option<&str>) -> i64 {
    raw.map(|raw| raw.trim().trim_matches('"').replacen('P', "", 1))
        .and_then(|digits| lenient::parse_leading_int(&digits))
        .unwrap_or(0)
        .max(0)
}

/// Counter for the next id. A counter that cannot be incremented counts as
/// unreadable, so the sequence restarts at 1.
fn next_counter(raw: Option<&str>) -> i64 {
    counter_value(raw).checked_add(1).unwrap_or(1)
}

/// Format a counter as a patient id (`P001`). Wider counters keep all digits.
pub fn format_patient_id(counter: i64) -> String {
    format!("P{:03}", counter)
}

/// The id the next registration will receive, without issuing it.
pub fn peek_next_patient_id<S: KeyValueStore + ?Sized>(store: &S) -> String {
    let raw = Repository::new(store).load_raw(Slot::LastPatientId);
    format_patient_id(next_counter(raw.as_deref()))
}

/// Issue the next patient id and record it as the last issued.
///
/// The read and the write are separate operations; two concurrent callers
/// can be issued the same id.
pub fn issue_patient_id<S: KeyValueStore + ?Sized>(store: &S) -> ClinicResult<String> {
    let repo = Repository::new(store);
    let last = repo.load_raw(Slot::LastPatientId);
    let id = format_patient_id(next_counter(last.as_deref()));
    repo.save_raw(Slot::LastPatientId, &id)?;
    Ok(id)
}

/// Register a patient and append them to the examination queue.
pub fn register<S: KeyValueStore + ?Sized>(store: &S, form: &RegistrationForm) -> ClinicResult<Patient> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(ClinicError::InvalidInput(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let id = issue_patient_id(store)?;
    let patient = Patient::from_form(id, form);

    let repo = Repository::new(store);
    let mut patients: Vec<Patient> = repo.load_collection(Slot::Patients);
    patients.push(patient.clone());
    repo.save_collection(Slot::Patients, &patients)?;

    info!(id = %patient.id, queue = patients.len(), "patient registered");
    Ok(patient)
}

/// Patients waiting for examination, in registration order.
pub fn waiting_patients<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Patient> {
    Repository::new(store).load_collection(Slot::Patients)
}
