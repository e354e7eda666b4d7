//! Payment records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A completed payment. Never mutated once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    /// Examination id (= patient id)
    #[serde(default)]
    pub id: String,
    /// Patient label at the time of payment
    #[serde(rename = "pasien", default)]
    pub patient: String,
    /// Amount paid in Rupiah
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total: f64,
    /// Payment timestamp (RFC 3339)
    #[serde(rename = "waktu", default)]
    pub timestamp: String,
}

impl PaymentRecord {
    /// Create a payment record stamped now.
    pub fn new(id: String, patient: String, total: f64) -> Self {
        Self {
            id,
            patient,
            total,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
