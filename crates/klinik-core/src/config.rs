//! Tunable clinic parameters.

use serde::{Deserialize, Serialize};

/// Parameters the workflows read instead of hard-coding.
///
/// Missing fields in a JSON document take their default, so a host can
/// override a single value with e.g. `{"initial_stock": 50}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Stock given to a medicine added from the catalog templates
    pub initial_stock: i64,
    /// Stock below this is "Menipis"
    pub low_stock_threshold: i64,
    /// Stock below this (and not low) is "Terbatas"
    pub limited_stock_threshold: i64,
    /// Units removed per matched prescription line on dispense
    pub pharmacy_decrement: i64,
    /// Patients listed on the dashboard
    pub recent_patient_limit: usize,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            initial_stock: 20,
            low_stock_threshold: 15,
            limited_stock_threshold: 30,
            pharmacy_decrement: 1,
            recent_patient_limit: 5,
        }
    }
}

impl ClinicConfig {
    /// Parse a JSON override document. An empty string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}
