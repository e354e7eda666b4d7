//! Klinik Sentosa Core Library
//!
//! Local clinic front-end core: registration, examination, pharmacy and
//! payment over a shared key-value store.
//!
//! # Architecture
//!
//! ```text
//!   Login ── Role Gate ──────────────────────────────────────────────┐
//!                                                                   │
//!   Registration ──► [patients] ──► Examination ──► [pemeriksaan]   │
//!                                                        │          │
//!                                  ┌─────────────────────┴───────┐  │
//!                                  ▼                             ▼  │
//!                              Pharmacy                      Payment
//!                      decrement [medicines]          price via [medicines]
//!                      move to [riwayat]         append [riwayatPembayaran]
//!                                                                │
//!                                                         Billing Export
//! ```
//!
//! Pharmacy and payment both read the same examination record; neither
//! waits for the other.
//!
//! # Modules
//!
//! - [`db`]: key-value store trait, SQLite and in-memory backends, typed slots
//! - [`models`]: persisted record types
//! - [`prescription`]: prescription line parser, catalog matcher, picklist builder
//! - [`auth`]: routes, role gate, login and sidebar menu
//! - [`workflow`]: screen actions (registration through settings)
//! - [`export`]: billing export
//! - [`config`]: tunable clinic parameters

pub mod auth;
pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod prescription;
pub mod workflow;

// Re-export commonly used types
pub use auth::{authorize, Access, Route};
pub use config::ClinicConfig;
pub use db::{Database, KeyValueStore, MemoryStore, Repository, Slot};
pub use models::{
    ExaminationForm, ExaminationRecord, Medicine, Patient, PaymentRecord, RegistrationForm, Role,
    Session, Settings, Sex, StockStatus, Theme,
};
pub use workflow::{ClinicError, ClinicResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use prescription::PrescriptionBuilder;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KlinikError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::StoreError> for KlinikError {
    fn from(e: db::StoreError) -> Self {
        match e {
            db::StoreError::Json(e) => KlinikError::SerializationError(e.to_string()),
            db::StoreError::Sqlite(e) => KlinikError::StorageError(e.to_string()),
        }
    }
}

impl From<ClinicError> for KlinikError {
    fn from(e: ClinicError) -> Self {
        match e {
            ClinicError::Store(e) => e.into(),
            ClinicError::NotFound(msg) => KlinikError::NotFound(msg),
            ClinicError::InvalidInput(msg) => KlinikError::InvalidInput(msg),
            ClinicError::Cancelled(msg) => KlinikError::Cancelled(msg),
        }
    }
}

impl From<serde_json::Error> for KlinikError {
    fn from(e: serde_json::Error) -> Self {
        KlinikError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for KlinikError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        KlinikError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

fn parse_config(config_json: Option<String>) -> Result<ClinicConfig, KlinikError> {
    match config_json {
        Some(json) => Ok(ClinicConfig::from_json(&json)?),
        None => Ok(ClinicConfig::default()),
    }
}

/// Open or create a store at the given path.
///
/// `config_json` overrides individual [`ClinicConfig`] fields.
#[uniffi::export]
pub fn open_store(path: String, config_json: Option<String>) -> Result<Arc<KlinikCore>, KlinikError> {
    let config = parse_config(config_json)?;
    let db = Database::open(&path)?;
    Ok(Arc::new(KlinikCore::new(db, config)))
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_store_in_memory(config_json: Option<String>) -> Result<Arc<KlinikCore>, KlinikError> {
    let config = parse_config(config_json)?;
    let db = Database::open_in_memory()?;
    Ok(Arc::new(KlinikCore::new(db, config)))
}

/// Install a `tracing` subscriber filtered by `filter` (e.g. `"klinik_core=debug"`).
///
/// Returns false when a subscriber was already installed, in which case the
/// call changes nothing.
#[uniffi::export]
pub fn init_logging(filter: String) -> Result<bool, KlinikError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .map_err(|e| KlinikError::InvalidInput(format!("log filter: {}", e)))?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok())
}

/// Format an amount as `Rp 95.000`.
#[uniffi::export]
pub fn format_rupiah(amount: f64) -> String {
    workflow::format_rupiah(amount)
}

/// Medicine names offered by the prescription picklist.
#[uniffi::export]
pub fn prescription_medicine_choices() -> Vec<String> {
    prescription::medicine_choices()
}

/// Dosages offered by the prescription picklist.
#[uniffi::export]
pub fn prescription_dosage_choices() -> Vec<String> {
    prescription::DOSAGE_CHOICES.iter().map(|d| d.to_string()).collect()
}

/// Render picked items as prescription text.
#[uniffi::export]
pub fn build_prescription(items: Vec<FfiPrescriptionItem>) -> String {
    let mut builder = PrescriptionBuilder::new();
    for item in &items {
        builder.add(&item.medicine, &item.quantity, &item.dosage);
    }
    builder.render()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct KlinikCore {
    db: Arc<Mutex<Database>>,
    config: ClinicConfig,
}

impl KlinikCore {
    /// Wrap an open database.
    pub fn new(db: Database, config: ClinicConfig) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            config,
        }
    }

    fn medicine(&self, medicine: Medicine) -> FfiMedicine {
        let status = workflow::stock_status(&medicine, &self.config);
        FfiMedicine {
            id: medicine.id,
            name: medicine.name,
            category: medicine.category,
            stock: medicine.stock,
            price: medicine.price,
            unit: medicine.unit,
            status: status.label().to_string(),
        }
    }
}

#[uniffi::export]
impl KlinikCore {
    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Log in. Returns the session and the landing path.
    pub fn login(
        &self,
        email: String,
        password: String,
        role: String,
    ) -> Result<FfiLoginResult, KlinikError> {
        let db = self.db.lock()?;
        let outcome = auth::login(&*db, &auth::LoginForm { email, password, role })?;
        Ok(FfiLoginResult {
            email: outcome.session.email,
            role: outcome.session.role,
            landing_path: outcome.landing.path().to_string(),
        })
    }

    /// Log out.
    pub fn logout(&self) -> Result<(), KlinikError> {
        let db = self.db.lock()?;
        auth::logout(&*db)?;
        Ok(())
    }

    /// Get the current session, if any.
    pub fn current_session(&self) -> Result<Option<FfiSession>, KlinikError> {
        let db = self.db.lock()?;
        Ok(auth::current_session(&*db).map(|s| s.into()))
    }

    /// Gate a path for the current session.
    pub fn authorize(&self, path: String) -> Result<FfiAccess, KlinikError> {
        let db = self.db.lock()?;
        let session = auth::current_session(&*db);
        Ok(authorize(Route::from_path(&path), session.as_ref()).into())
    }

    /// Sidebar entries for the current session. Empty when logged out.
    pub fn menu(&self) -> Result<Vec<FfiMenuItem>, KlinikError> {
        let db = self.db.lock()?;
        Ok(auth::current_role(&*db)
            .map(auth::menu_for)
            .unwrap_or_default()
            .into_iter()
            .map(|item| FfiMenuItem {
                title: item.title.to_string(),
                path: item.route.path().to_string(),
            })
            .collect())
    }

    // =========================================================================
    // Registration Operations
    // =========================================================================

    /// Id the next registration will receive.
    pub fn peek_next_patient_id(&self) -> Result<String, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::peek_next_patient_id(&*db))
    }

    /// Register a patient.
    pub fn register_patient(&self, form: FfiRegistrationForm) -> Result<FfiPatient, KlinikError> {
        let db = self.db.lock()?;
        let patient = workflow::register(&*db, &form.into())?;
        Ok(patient.into())
    }

    /// Patients waiting for examination.
    pub fn waiting_patients(&self) -> Result<Vec<FfiPatient>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::waiting_patients(&*db).into_iter().map(|p| p.into()).collect())
    }

    // =========================================================================
    // Examination Operations
    // =========================================================================

    /// Complete the examination of a queued patient.
    pub fn complete_examination(
        &self,
        patient_id: String,
        form: FfiExaminationForm,
    ) -> Result<FfiExaminationRecord, KlinikError> {
        let db = self.db.lock()?;
        let record = workflow::complete_examination(&*db, &patient_id, &form.into())?;
        Ok(record.into())
    }

    // =========================================================================
    // Pharmacy Operations
    // =========================================================================

    /// Records waiting for the pharmacy.
    pub fn pending_prescriptions(&self) -> Result<Vec<FfiExaminationRecord>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::pending_prescriptions(&*db)
            .into_iter()
            .map(|r| r.into())
            .collect())
    }

    /// Show what dispensing a record would touch.
    pub fn preview_dispense(&self, id: String) -> Result<Vec<FfiDispenseLine>, KlinikError> {
        let db = self.db.lock()?;
        let lines = workflow::preview(&*db, &self.config, &id)?;
        Ok(lines.into_iter().map(|l| l.into()).collect())
    }

    /// Dispense a record and move it to history.
    pub fn dispense(&self, id: String) -> Result<FfiDispenseOutcome, KlinikError> {
        let db = self.db.lock()?;
        let outcome = workflow::dispense(&*db, &self.config, &id)?;
        Ok(outcome.into())
    }

    /// Records already dispensed.
    pub fn dispense_history(&self) -> Result<Vec<FfiExaminationRecord>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::dispense_history(&*db)
            .into_iter()
            .map(|r| r.into())
            .collect())
    }

    // =========================================================================
    // Payment Operations
    // =========================================================================

    /// Records still awaiting payment.
    pub fn pending_payments(&self) -> Result<Vec<FfiExaminationRecord>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::pending_payments(&*db)
            .into_iter()
            .map(|r| r.into())
            .collect())
    }

    /// Price a pending record.
    pub fn quote_payment(&self, id: String) -> Result<FfiPaymentQuote, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::quote(&*db, &id)?.into())
    }

    /// Plain-text receipt for a pending record.
    pub fn payment_receipt(&self, id: String) -> Result<String, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::receipt(&workflow::quote(&*db, &id)?))
    }

    /// Record payment for a pending record.
    pub fn complete_payment(&self, id: String) -> Result<FfiPaymentRecord, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::complete_payment(&*db, &id)?.into())
    }

    /// Completed payments.
    pub fn payment_history(&self) -> Result<Vec<FfiPaymentRecord>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::payment_history(&*db)
            .into_iter()
            .map(|p| p.into())
            .collect())
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Templates offered when adding a medicine.
    pub fn catalog_templates(&self) -> Vec<FfiMedicine> {
        workflow::catalog_templates()
            .into_iter()
            .map(|m| self.medicine(m))
            .collect()
    }

    /// The stored catalog.
    pub fn list_medicines(&self) -> Result<Vec<FfiMedicine>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::list_medicines(&*db)
            .into_iter()
            .map(|m| self.medicine(m))
            .collect())
    }

    /// Search the catalog by name or category.
    pub fn search_medicines(&self, query: String) -> Result<Vec<FfiMedicine>, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::search_medicines(&*db, &query)
            .into_iter()
            .map(|m| self.medicine(m))
            .collect())
    }

    /// Add a catalog template with the configured initial stock.
    pub fn add_medicine(&self, template_id: String) -> Result<FfiMedicine, KlinikError> {
        let db = self.db.lock()?;
        let medicine = workflow::add_from_template(&*db, &self.config, &template_id)?;
        Ok(self.medicine(medicine))
    }

    // =========================================================================
    // Dashboard & Settings Operations
    // =========================================================================

    /// Dashboard aggregates.
    pub fn dashboard(&self) -> Result<FfiDashboard, KlinikError> {
        let db = self.db.lock()?;
        let summary = workflow::summarize(&*db, &self.config);
        Ok(FfiDashboard {
            waiting_patients: summary.waiting_patients as u32,
            active_prescriptions: summary.active_prescriptions as u32,
            medicine_count: summary.medicine_count as u32,
            low_stock_count: summary.low_stock_count() as u32,
            dispensed_count: summary.dispensed_count as u32,
            payment_count: summary.payment_count as u32,
            revenue: summary.revenue,
            low_stock: summary.low_stock.into_iter().map(|m| self.medicine(m)).collect(),
            recent_patients: summary.recent_patients.into_iter().map(|p| p.into()).collect(),
        })
    }

    /// Stored preferences.
    pub fn settings(&self) -> Result<FfiSettings, KlinikError> {
        let db = self.db.lock()?;
        Ok(workflow::load_settings(&*db).into())
    }

    /// Set the theme (`light` or `dark`).
    pub fn set_theme(&self, theme: String) -> Result<FfiSettings, KlinikError> {
        let theme = match theme.trim() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => return Err(KlinikError::InvalidInput(format!("unknown theme {}", other))),
        };
        let db = self.db.lock()?;
        Ok(workflow::set_theme(&*db, theme)?.into())
    }

    /// Set the landing path for a role.
    pub fn set_landing(&self, role: String, path: String) -> Result<FfiSettings, KlinikError> {
        let role = Role::parse(role.trim())
            .ok_or_else(|| KlinikError::InvalidInput(format!("unknown role {}", role)))?;
        let db = self.db.lock()?;
        Ok(workflow::set_landing(&*db, role, &path)?.into())
    }

    /// Prompt the host must show before [`KlinikCore::clear_all_data`].
    pub fn clear_data_prompt(&self) -> String {
        workflow::CLEAR_DATA_PROMPT.to_string()
    }

    /// Remove all clinical data. `confirmed` is the user's answer to the prompt.
    pub fn clear_all_data(&self, confirmed: bool) -> Result<u32, KlinikError> {
        let db = self.db.lock()?;
        let removed = workflow::clear_all_data(&*db, &|_: &str| confirmed)?;
        Ok(removed as u32)
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export billing data as JSON. With `since` (RFC 3339), only payments
    /// made at or after that instant are included.
    pub fn export_billing_json(&self, since: Option<String>) -> Result<String, KlinikError> {
        let db = self.db.lock()?;
        Ok(billing_batch(&*db, since.as_deref())?.to_json()?)
    }

    /// Export billing data as CSV, optionally limited as in [`KlinikCore::export_billing_json`].
    pub fn export_billing_csv(&self, since: Option<String>) -> Result<String, KlinikError> {
        let db = self.db.lock()?;
        Ok(billing_batch(&*db, since.as_deref())?.to_csv())
    }
}

fn billing_batch(db: &Database, since: Option<&str>) -> Result<export::BatchBillingExport, KlinikError> {
    let exporter = export::BillingExporter::new(db);
    match since.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(exporter.export_all()),
        Some(since) => {
            let since = chrono::DateTime::parse_from_rfc3339(since)
                .map_err(|e| KlinikError::InvalidInput(format!("invalid timestamp {}: {}", since, e)))?;
            Ok(exporter.export_since(since))
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe session.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSession {
    pub email: String,
    pub role: String,
}

impl From<Session> for FfiSession {
    fn from(session: Session) -> Self {
        Self {
            email: session.email,
            role: session.role,
        }
    }
}

/// FFI-safe login result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLoginResult {
    pub email: String,
    pub role: String,
    pub landing_path: String,
}

/// FFI-safe gate result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAccess {
    pub granted: bool,
    pub redirect_path: Option<String>,
    pub message: Option<String>,
}

impl From<Access> for FfiAccess {
    fn from(access: Access) -> Self {
        match access {
            Access::Granted => Self {
                granted: true,
                redirect_path: None,
                message: None,
            },
            Access::Denied { redirect, message } => Self {
                granted: false,
                redirect_path: Some(redirect.path().to_string()),
                message: Some(message.to_string()),
            },
        }
    }
}

/// FFI-safe sidebar entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMenuItem {
    pub title: String,
    pub path: String,
}

/// FFI-safe registration form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegistrationForm {
    pub name: String,
    pub age: String,
    /// "L" or "P"
    pub sex: String,
    pub phone: String,
    pub address: String,
    pub complaint: String,
}

impl From<FfiRegistrationForm> for RegistrationForm {
    fn from(form: FfiRegistrationForm) -> Self {
        RegistrationForm {
            name: form.name,
            age: form.age,
            sex: Sex::parse(&form.sex),
            phone: form.phone,
            address: form.address,
            complaint: form.complaint,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: String,
    pub sex: String,
    pub phone: String,
    pub address: String,
    pub complaint: String,
    pub last_visit: String,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            sex: patient.sex.code().to_string(),
            phone: patient.phone,
            address: patient.address,
            complaint: patient.complaint,
            last_visit: patient.last_visit,
        }
    }
}

/// FFI-safe examination form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExaminationForm {
    pub blood_pressure: String,
    pub temperature: String,
    pub weight: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub physician: Option<String>,
}

impl From<FfiExaminationForm> for ExaminationForm {
    fn from(form: FfiExaminationForm) -> Self {
        ExaminationForm {
            blood_pressure: form.blood_pressure,
            temperature: form.temperature,
            weight: form.weight,
            diagnosis: form.diagnosis,
            prescription: form.prescription,
            notes: form.notes,
            physician: form.physician,
        }
    }
}

/// FFI-safe examination record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExaminationRecord {
    pub id: String,
    pub patient_name: String,
    pub age: String,
    pub complaint: String,
    pub blood_pressure: String,
    pub temperature: String,
    pub weight: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub timestamp: String,
    pub physician: Option<String>,
    pub dispensed_at: Option<String>,
}

impl From<ExaminationRecord> for FfiExaminationRecord {
    fn from(record: ExaminationRecord) -> Self {
        Self {
            id: record.id,
            patient_name: record.patient_name,
            age: record.age,
            complaint: record.complaint,
            blood_pressure: record.blood_pressure,
            temperature: record.temperature,
            weight: record.weight,
            diagnosis: record.diagnosis,
            prescription: record.prescription,
            notes: record.notes,
            timestamp: record.timestamp,
            physician: record.physician,
            dispensed_at: record.dispensed_at,
        }
    }
}

/// FFI-safe prescription picklist entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescriptionItem {
    pub medicine: String,
    pub quantity: String,
    pub dosage: String,
}

/// FFI-safe medicine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub unit: String,
    /// "Menipis", "Terbatas" or "Aman"
    pub status: String,
}

/// FFI-safe dispense preview line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDispenseLine {
    pub line: String,
    pub medicine_id: Option<String>,
    pub medicine_name: Option<String>,
    pub stock: Option<i64>,
    pub low_stock: bool,
}

impl From<workflow::DispenseLine> for FfiDispenseLine {
    fn from(line: workflow::DispenseLine) -> Self {
        Self {
            line: line.line,
            medicine_id: line.medicine_id,
            medicine_name: line.medicine_name,
            stock: line.stock,
            low_stock: line.low_stock,
        }
    }
}

/// FFI-safe stock change.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStockChange {
    pub medicine_id: String,
    pub stock_after: i64,
}

/// FFI-safe dispense result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDispenseOutcome {
    pub record: FfiExaminationRecord,
    pub decrements: Vec<FfiStockChange>,
    pub unmatched: Vec<String>,
}

impl From<workflow::DispenseOutcome> for FfiDispenseOutcome {
    fn from(outcome: workflow::DispenseOutcome) -> Self {
        Self {
            record: outcome.record.into(),
            decrements: outcome
                .decrements
                .into_iter()
                .map(|(medicine_id, stock_after)| FfiStockChange {
                    medicine_id,
                    stock_after,
                })
                .collect(),
            unmatched: outcome.unmatched,
        }
    }
}

/// FFI-safe priced line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQuoteLine {
    pub line: String,
    pub medicine_id: Option<String>,
    pub medicine_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// FFI-safe payment quote.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPaymentQuote {
    pub id: String,
    pub patient: String,
    pub lines: Vec<FfiQuoteLine>,
    pub total: f64,
}

impl From<workflow::PaymentQuote> for FfiPaymentQuote {
    fn from(quote: workflow::PaymentQuote) -> Self {
        Self {
            id: quote.id,
            patient: quote.patient,
            lines: quote
                .lines
                .into_iter()
                .map(|l| FfiQuoteLine {
                    line: l.line,
                    medicine_id: l.medicine_id,
                    medicine_name: l.medicine_name,
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                    subtotal: l.subtotal,
                })
                .collect(),
            total: quote.total,
        }
    }
}

/// FFI-safe payment record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPaymentRecord {
    pub id: String,
    pub patient: String,
    pub total: f64,
    pub timestamp: String,
}

impl From<PaymentRecord> for FfiPaymentRecord {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id,
            patient: record.patient,
            total: record.total,
            timestamp: record.timestamp,
        }
    }
}

/// FFI-safe dashboard aggregates.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboard {
    pub waiting_patients: u32,
    pub active_prescriptions: u32,
    pub medicine_count: u32,
    pub low_stock_count: u32,
    pub dispensed_count: u32,
    pub payment_count: u32,
    pub revenue: f64,
    pub low_stock: Vec<FfiMedicine>,
    pub recent_patients: Vec<FfiPatient>,
}

/// FFI-safe landing preference.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLanding {
    pub role: String,
    pub path: String,
}

/// FFI-safe settings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSettings {
    pub theme: String,
    pub default_landing: Vec<FfiLanding>,
}

impl From<Settings> for FfiSettings {
    fn from(settings: Settings) -> Self {
        Self {
            theme: match settings.theme {
                Theme::Light => "light".to_string(),
                Theme::Dark => "dark".to_string(),
            },
            default_landing: settings
                .default_landing
                .into_iter()
                .map(|(role, path)| FfiLanding { role, path })
                .collect(),
        }
    }
}
