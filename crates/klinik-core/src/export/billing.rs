//! Billing export of the payment history.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::PaymentRecord;

/// One exported payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingEntry {
    /// Examination id (= patient id)
    pub id: String,
    /// Patient label
    pub patient: String,
    /// Amount in Rupiah
    pub total: f64,
    /// Payment timestamp
    pub paid_at: String,
}

impl From<&PaymentRecord> for BillingEntry {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            id: record.id.clone(),
            patient: record.patient.clone(),
            total: record.total,
            paid_at: record.timestamp.clone(),
        }
    }
}

/// Batch billing export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchBillingExport {
    /// Export timestamp
    pub exported_at: String,
    /// Payments in history order
    pub entries: Vec<BillingEntry>,
    /// Sum of all exported totals
    pub total_revenue: f64,
}

impl BatchBillingExport {
    fn new(entries: Vec<BillingEntry>) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            total_revenue: entries.iter().map(|e| e.total).sum(),
            entries,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("id,patient,total,paid_at\n");

        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                escape_csv(&entry.id),
                escape_csv(&entry.patient),
                entry.total,
                escape_csv(&entry.paid_at),
            ));
        }

        csv
    }
}

/// Billing exporter.
pub struct BillingExporter<'a, S: KeyValueStore + ?Sized> {
    repo: Repository<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> BillingExporter<'a, S> {
    /// Create a new billing exporter.
    pub fn new(store: &'a S) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    fn payments(&self) -> Vec<PaymentRecord> {
        self.repo.load_collection(Slot::PaymentHistory)
    }

    /// Export every recorded payment.
    pub fn export_all(&self) -> BatchBillingExport {
        BatchBillingExport::new(self.payments().iter().map(BillingEntry::from).collect())
    }

    /// Export payments made at or after `since` (RFC 3339).
    ///
    /// Payments whose timestamp does not parse are left out.
    pub fn export_since(&self, since: DateTime<FixedOffset>) -> BatchBillingExport {
        let entries = self
            .payments()
            .iter()
            .filter(|p| {
                DateTime::parse_from_rfc3339(&p.timestamp)
                    .map(|paid| paid >= since)
                    .unwrap_or(false)
            })
            .map(BillingEntry::from)
            .collect();
        BatchBillingExport::new(entries)
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
