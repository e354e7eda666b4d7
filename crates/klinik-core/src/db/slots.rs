//! Named storage slots and the SQLite key-value operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, KeyValueStore, StoreResult};

/// A named slot in the shared store.
///
/// The key strings are the ones the browser front end used, so an exported
/// storage dump can be loaded without migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Registered patients waiting for examination
    Patients,
    /// Examination records waiting for pharmacy and payment
    Examinations,
    /// Medicine catalog with stock and price
    Medicines,
    /// Examination records already dispensed by the pharmacy
    DispenseHistory,
    /// Completed payments
    PaymentHistory,
    /// Application preferences
    Settings,
    /// Logged-in user
    User,
    /// Last issued patient id (raw string, not JSON)
    LastPatientId,
}

impl Slot {
    /// Slots wiped by the settings screen's clear-data action.
    pub const CLINICAL_DATA: [Slot; 6] = [
        Slot::Patients,
        Slot::Examinations,
        Slot::Medicines,
        Slot::DispenseHistory,
        Slot::PaymentHistory,
        Slot::LastPatientId,
    ];

    /// Storage key for this slot.
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Patients => "patients",
            Slot::Examinations => "pemeriksaan",
            Slot::Medicines => "medicines",
            Slot::DispenseHistory => "riwayat",
            Slot::PaymentHistory => "riwayatPembayaran",
            Slot::Settings => "settings",
            Slot::User => "user",
            Slot::LastPatientId => "lastPatientId",
        }
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, datetime('now'))",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }
}
