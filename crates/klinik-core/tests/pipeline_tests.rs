//! End-to-end tests for the registration → examination → pharmacy/payment pipeline.

use klinik_core::auth::{authorize, login, Access, LoginForm, Route};
use klinik_core::config::ClinicConfig;
use klinik_core::db::{Database, KeyValueStore, Repository, Slot};
use klinik_core::models::{
    ExaminationForm, ExaminationRecord, Medicine, Patient, PaymentRecord, RegistrationForm, Role,
    Session, Sex,
};
use klinik_core::workflow;

fn setup_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    let mut paracetamol = Medicine::new("OB001", "Paracetamol 500mg", "Analgesik", 3000.0, "Strip");
    paracetamol.stock = 150;
    let mut amoxicillin = Medicine::new("OB002", "Amoxicillin 500mg", "Antibiotik", 25000.0, "Strip");
    amoxicillin.stock = 8;
    Repository::new(&db)
        .save_collection(Slot::Medicines, &[paracetamol, amoxicillin])
        .unwrap();
    db
}

fn registration(name: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        age: "35".to_string(),
        sex: Sex::Male,
        phone: "081234567890".to_string(),
        address: "Jl. Merdeka 1".to_string(),
        complaint: "Demam dan batuk".to_string(),
    }
}

fn examination(prescription: &str) -> ExaminationForm {
    ExaminationForm {
        blood_pressure: "120/80".to_string(),
        temperature: "38.2".to_string(),
        weight: "70".to_string(),
        diagnosis: "ISPA".to_string(),
        prescription: prescription.to_string(),
        notes: "Istirahat cukup".to_string(),
        physician: Some("dr. Rina".to_string()),
    }
}

fn stock(db: &Database, id: &str) -> i64 {
    let catalog: Vec<Medicine> = Repository::new(db).load_collection(Slot::Medicines);
    catalog.iter().find(|m| m.id == id).map(|m| m.stock).unwrap()
}

/// Register one patient and examine them with `prescription`.
fn examined(db: &Database, prescription: &str) -> ExaminationRecord {
    let patient = workflow::register(db, &registration("Ahmad Subandi")).unwrap();
    workflow::complete_examination(db, &patient.id, &examination(prescription)).unwrap()
}

#[test]
fn test_registration_ids_are_sequential() {
    let db = setup_db();
    let ids: Vec<String> = (0..9)
        .map(|i| workflow::register(&db, &registration(&format!("Pasien {}", i))).unwrap().id)
        .collect();

    assert_eq!(
        ids,
        vec!["P001", "P002", "P003", "P004", "P005", "P006", "P007", "P008", "P009"]
    );
    assert_eq!(db.get(Slot::LastPatientId.key()).unwrap().as_deref(), Some("P009"));
}

#[test]
fn test_examination_moves_exactly_one_patient() {
    let db = setup_db();
    for name in ["Ahmad", "Siti", "Dewi"] {
        workflow::register(&db, &registration(name)).unwrap();
    }

    let record = workflow::complete_examination(&db, "P002", &examination("Antasida - 1 strip")).unwrap();

    let queue: Vec<Patient> = Repository::new(&db).load_collection(Slot::Patients);
    let records: Vec<ExaminationRecord> = Repository::new(&db).load_collection(Slot::Examinations);
    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|p| p.id != "P002"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "P002");
    assert_eq!(record, records[0]);
}

#[test]
fn test_pharmacy_decrements_by_one() {
    let db = setup_db();
    examined(&db, "1. Paracetamol 500mg - 10 tablet");

    workflow::dispense(&db, &ClinicConfig::default(), "P001").unwrap();

    assert_eq!(stock(&db, "OB001"), 149);
    assert!(workflow::pending_prescriptions(&db).is_empty());
    assert_eq!(workflow::dispense_history(&db).len(), 1);
}

#[test]
fn test_payment_uses_parsed_quantity() {
    let db = setup_db();
    examined(&db, "1. Paracetamol 500mg - 10 tablet");

    let payment = workflow::complete_payment(&db, "P001").unwrap();
    assert_eq!(payment.total, 3000.0 * 10.0);
}

#[test]
fn test_unmatched_line_is_free_and_leaves_stock() {
    let db = setup_db();
    examined(&db, "1. Ibuprofen 400mg - 10 tablet\n2. Amoxicillin 500mg - 12 kapsul");

    let quote = workflow::quote(&db, "P001").unwrap();
    assert_eq!(quote.lines[0].subtotal, 0.0);
    assert_eq!(quote.total, 25000.0 * 12.0);

    workflow::dispense(&db, &ClinicConfig::default(), "P001").unwrap();
    assert_eq!(stock(&db, "OB001"), 150);
    assert_eq!(stock(&db, "OB002"), 7);
}

#[test]
fn test_payment_appends_without_touching_other_slots() {
    let db = setup_db();
    examined(
        &db,
        "1. Paracetamol 500mg - 2 strip\n2. Amoxicillin 500mg - 3x1 sehari\n3. Madu - 1 botol",
    );
    let exams_before = db.get(Slot::Examinations.key()).unwrap();
    let meds_before = db.get(Slot::Medicines.key()).unwrap();

    let payment = workflow::complete_payment(&db, "P001").unwrap();

    let history: Vec<PaymentRecord> = Repository::new(&db).load_collection(Slot::PaymentHistory);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], payment);
    assert_eq!(payment.total, 2.0 * 3000.0 + 3.0 * 25000.0);
    assert_eq!(db.get(Slot::Examinations.key()).unwrap(), exams_before);
    assert_eq!(db.get(Slot::Medicines.key()).unwrap(), meds_before);
}

#[test]
fn test_consumers_disagree_on_quantity() {
    let db = setup_db();
    examined(&db, "Amoxicillin 500mg - 5 kapsul");

    let quote = workflow::quote(&db, "P001").unwrap();
    let outcome = workflow::dispense(&db, &ClinicConfig::default(), "P001").unwrap();

    assert_eq!(quote.lines[0].quantity, 5);
    assert_eq!(outcome.decrements, vec![("OB002".to_string(), 7)]);
}

#[test]
fn test_payment_after_dispense_finds_nothing() {
    let db = setup_db();
    examined(&db, "Paracetamol 500mg - 1 strip");
    workflow::dispense(&db, &ClinicConfig::default(), "P001").unwrap();

    assert!(matches!(
        workflow::complete_payment(&db, "P001"),
        Err(klinik_core::ClinicError::NotFound(_))
    ));
}

#[test]
fn test_non_admin_outside_allow_list_is_redirected() {
    let receptionist = Session::new("front@kliniksentosa.com".to_string(), Role::Receptionist);

    for route in [Route::Examination, Route::Pharmacy, Route::Payment, Route::Settings] {
        match authorize(route, Some(&receptionist)) {
            Access::Denied { redirect, .. } => assert_eq!(redirect, Route::Login),
            Access::Granted => panic!("{:?} should be denied", route),
        }
    }
    assert_eq!(authorize(Route::Registration, Some(&receptionist)), Access::Granted);
}

#[test]
fn test_login_then_gate_from_store() {
    let db = setup_db();
    let outcome = login(
        &db,
        &LoginForm {
            email: "kasir@kliniksentosa.com".to_string(),
            password: "x".to_string(),
            role: "administrasi".to_string(),
        },
    )
    .unwrap();
    assert_eq!(outcome.landing, Route::Payment);

    let session = klinik_core::auth::current_session(&db);
    assert_eq!(authorize(Route::Payment, session.as_ref()), Access::Granted);
    assert_eq!(authorize(Route::PatientDirectory, session.as_ref()), Access::Granted);
    assert_ne!(authorize(Route::Pharmacy, session.as_ref()), Access::Granted);
}

#[test]
fn test_corrupt_slots_read_as_empty() {
    let db = setup_db();
    db.set(Slot::Patients.key(), "not json").unwrap();
    db.set(Slot::Examinations.key(), r#"{"id":"P001"}"#).unwrap();

    assert!(workflow::waiting_patients(&db).is_empty());
    assert!(workflow::pending_prescriptions(&db).is_empty());
    let summary = workflow::summarize(&db, &ClinicConfig::default());
    assert_eq!(summary.waiting_patients, 0);
    assert_eq!(summary.medicine_count, 2);
    assert_eq!(summary.low_stock.len(), 1);
}

#[test]
fn test_clear_data_then_ids_restart() {
    let db = setup_db();
    examined(&db, "Paracetamol");
    workflow::clear_all_data(&db, &|_: &str| true).unwrap();

    assert!(workflow::list_medicines(&db).is_empty());
    assert_eq!(workflow::register(&db, &registration("Baru")).unwrap().id, "P001");
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("klinik.db");

    {
        let db = Database::open(&path).unwrap();
        workflow::add_from_template(&db, &ClinicConfig::default(), "OB004").unwrap();
        workflow::register(&db, &registration("Ahmad")).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(workflow::waiting_patients(&db).len(), 1);
    assert_eq!(workflow::list_medicines(&db)[0].stock, 20);
    assert_eq!(workflow::peek_next_patient_id(&db), "P002");
}
