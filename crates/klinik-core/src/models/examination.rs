//! Examination records produced by the doctor and consumed by pharmacy and payment.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::patient::Patient;

/// An examination record.
///
/// The id is the patient id, so a patient examined twice yields two records
/// with the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExaminationRecord {
    /// Patient id
    #[serde(default)]
    pub id: String,
    /// Patient name at the time of examination
    #[serde(rename = "nama", default)]
    pub patient_name: String,
    #[serde(rename = "umur", default, deserialize_with = "lenient::string_or_number")]
    pub age: String,
    /// Complaint recorded at registration
    #[serde(rename = "keluhan", default)]
    pub complaint: String,
    /// Blood pressure, e.g. "120/80"
    #[serde(rename = "tekananDarah", default, deserialize_with = "lenient::string_or_number")]
    pub blood_pressure: String,
    /// Body temperature in °C
    #[serde(rename = "suhu", default, deserialize_with = "lenient::string_or_number")]
    pub temperature: String,
    /// Body weight in kg
    #[serde(rename = "beratBadan", default, deserialize_with = "lenient::string_or_number")]
    pub weight: String,
    #[serde(default)]
    pub diagnosis: String,
    /// Free-text prescription, one medicine per line
    #[serde(rename = "resep", default)]
    pub prescription: String,
    #[serde(rename = "catatan", default)]
    pub notes: String,
    /// Examination timestamp (RFC 3339)
    #[serde(rename = "waktu", default)]
    pub timestamp: String,
    /// Attending physician
    #[serde(rename = "dokter", default, skip_serializing_if = "Option::is_none")]
    pub physician: Option<String>,
    /// Set when the pharmacy moves the record to history
    #[serde(rename = "waktuSelesai", default, skip_serializing_if = "Option::is_none")]
    pub dispensed_at: Option<String>,
}

/// Examination form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExaminationForm {
    pub blood_pressure: String,
    pub temperature: String,
    pub weight: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub physician: Option<String>,
}

impl ExaminationRecord {
    /// Build a record for a patient leaving the queue, stamped now.
    pub fn from_patient(patient: &Patient, form: &ExaminationForm) -> Self {
        Self {
            id: patient.id.clone(),
            patient_name: patient.name.clone(),
            age: patient.age.clone(),
            complaint: patient.complaint.clone(),
            blood_pressure: form.blood_pressure.trim().to_string(),
            temperature: form.temperature.trim().to_string(),
            weight: form.weight.trim().to_string(),
            diagnosis: form.diagnosis.trim().to_string(),
            prescription: form.prescription.clone(),
            notes: form.notes.trim().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            physician: form
                .physician
                .as_ref()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            dispensed_at: None,
        }
    }

    /// Label used on payment records and receipts.
    pub fn patient_label(&self) -> String {
        if self.patient_name.is_empty() {
            self.id.clone()
        } else {
            self.patient_name.clone()
        }
    }

    /// Mark as dispensed now.
    pub fn mark_dispensed(&mut self) {
        self.dispensed_at = Some(chrono::Utc::now().to_rfc3339());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegistrationForm, Sex};

    fn patient() -> Patient {
        Patient::from_form(
            "P001".into(),
            &RegistrationForm {
                name: "Siti Rahmawati".into(),
                age: "28".into(),
                sex: Sex::Female,
                phone: "0812".into(),
                address: "Jl. Mawar".into(),
                complaint: "Sakit kepala".into(),
            },
        )
    }

    #[test]
    fn test_from_patient() {
        let form = ExaminationForm {
            blood_pressure: "120/80".into(),
            diagnosis: "Migrain".into(),
            prescription: "1. Paracetamol 500mg - 10 tablet".into(),
            physician: Some("  ".into()),
            ..Default::default()
        };
        let record = ExaminationRecord::from_patient(&patient(), &form);

        assert_eq!(record.id, "P001");
        assert_eq!(record.patient_name, "Siti Rahmawati");
        assert_eq!(record.complaint, "Sakit kepala");
        assert_eq!(record.physician, None);
        assert!(record.dispensed_at.is_none());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let record = ExaminationRecord {
            id: "P001".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("dokter").is_none());
        assert!(json.get("waktuSelesai").is_none());
        assert_eq!(json["resep"], "");
    }

    #[test]
    fn test_numeric_vitals_accepted() {
        let record: ExaminationRecord =
            serde_json::from_str(r#"{"id":"P002","suhu":36.5,"beratBadan":60}"#).unwrap();
        assert_eq!(record.temperature, "36.5");
        assert_eq!(record.weight, "60");
        assert_eq!(record.patient_label(), "P002");
    }
}
