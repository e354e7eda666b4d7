//! Dashboard aggregates.

use crate::config::ClinicConfig;
use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{ExaminationRecord, Medicine, Patient, PaymentRecord};

/// Counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub waiting_patients: usize,
    pub active_prescriptions: usize,
    pub medicine_count: usize,
    /// Medicines below the low-stock threshold, in catalog order
    pub low_stock: Vec<Medicine>,
    pub dispensed_count: usize,
    pub payment_count: usize,
    pub revenue: f64,
    /// Most recently registered first
    pub recent_patients: Vec<Patient>,
}

impl DashboardSummary {
    pub fn low_stock_count(&self) -> usize {
        self.low_stock.len()
    }
}

/// Aggregate every collection. Read-only.
pub fn summarize<S: KeyValueStore + ?Sized>(store: &S, config: &ClinicConfig) -> DashboardSummary {
    let repo = Repository::new(store);
    let patients: Vec<Patient> = repo.load_collection(Slot::Patients);
    let records: Vec<ExaminationRecord> = repo.load_collection(Slot::Examinations);
    let medicines: Vec<Medicine> = repo.load_collection(Slot::Medicines);
    let dispensed: Vec<ExaminationRecord> = repo.load_collection(Slot::DispenseHistory);
    let payments: Vec<PaymentRecord> = repo.load_collection(Slot::PaymentHistory);

    let medicine_count = medicines.len();
    let low_stock = medicines
        .into_iter()
        .filter(|m| m.stock < config.low_stock_threshold)
        .collect();

    DashboardSummary {
        waiting_patients: patients.len(),
        active_prescriptions: records.len(),
        medicine_count,
        low_stock,
        dispensed_count: dispensed.len(),
        payment_count: payments.len(),
        revenue: payments.iter().map(|p| p.total).sum(),
        recent_patients: patients
            .into_iter()
            .rev()
            .take(config.recent_patient_limit)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_empty_store() {
        let summary = summarize(&MemoryStore::new(), &ClinicConfig::default());
        assert_eq!(summary.waiting_patients, 0);
        assert_eq!(summary.revenue, 0.0);
        assert!(summary.recent_patients.is_empty());
        assert_eq!(summary.low_stock_count(), 0);
    }

    #[test]
    fn test_counts() {
        let store = MemoryStore::with_entries([
            (
                "patients",
                r#"[{"id":"P001"},{"id":"P002"},{"id":"P003"},{"id":"P004"},{"id":"P005"},{"id":"P006"}]"#,
            ),
            ("pemeriksaan", r#"[{"id":"P000"}]"#),
            (
                "medicines",
                r#"[{"id":"OB001","stok":150},{"id":"OB002","stok":8},{"id":"OB003","stok":"12"}]"#,
            ),
            ("riwayat", r#"[{"id":"P000"},{"id":"P000"}]"#),
            ("riwayatPembayaran", r#"[{"id":"P000","total":95000},{"id":"P000","total":"5000"}]"#),
        ]);
        let summary = summarize(&store, &ClinicConfig::default());

        assert_eq!(summary.waiting_patients, 6);
        assert_eq!(summary.active_prescriptions, 1);
        assert_eq!(summary.medicine_count, 3);
        let low: Vec<&str> = summary.low_stock.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(low, vec!["OB002", "OB003"]);
        assert_eq!(summary.dispensed_count, 2);
        assert_eq!(summary.payment_count, 2);
        assert_eq!(summary.revenue, 100000.0);

        let recent: Vec<&str> = summary.recent_patients.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(recent, vec!["P006", "P005", "P004", "P003", "P002"]);
    }
}
