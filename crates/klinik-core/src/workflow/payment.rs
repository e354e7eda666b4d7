//! Payment: price a prescription and record the payment.
//!
//! The total is recomputed from the prescription text on every call: each
//! matched line costs the catalog price times the quantity parsed from the
//! line. Unmatched lines cost nothing. Recording a payment never touches the
//! prescription list or the catalog.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{ExaminationRecord, Medicine, PaymentRecord};
use crate::prescription::reconcile;

use super::{ClinicError, ClinicResult};

/// One priced line.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    /// Line as written
    pub line: String,
    pub medicine_id: Option<String>,
    pub medicine_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// A priced prescription.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentQuote {
    pub id: String,
    pub patient: String,
    pub lines: Vec<QuoteLine>,
    pub total: f64,
}

/// Price a record against a catalog snapshot.
pub fn quote_record(record: &ExaminationRecord, catalog: &[Medicine]) -> PaymentQuote {
    let lines: Vec<QuoteLine> = reconcile(&record.prescription, catalog)
        .into_iter()
        .map(|matched| {
            let quantity = matched.line.quantity;
            match matched.medicine_index.map(|i| &catalog[i]) {
                Some(medicine) => {
                    let subtotal = medicine.price * quantity as f64;
                    debug!(
                        medicine = %medicine.id,
                        quantity,
                        price = medicine.price,
                        subtotal,
                        "line priced"
                    );
                    QuoteLine {
                        line: matched.line.raw,
                        medicine_id: Some(medicine.id.clone()),
                        medicine_name: Some(medicine.name.clone()),
                        quantity,
                        unit_price: medicine.price,
                        subtotal,
                    }
                }
                None => QuoteLine {
                    line: matched.line.raw,
                    medicine_id: None,
                    medicine_name: None,
                    quantity,
                    unit_price: 0.0,
                    subtotal: 0.0,
                },
            }
        })
        .collect();

    PaymentQuote {
        id: record.id.clone(),
        patient: record.patient_label(),
        total: lines.iter().map(|l| l.subtotal).sum(),
        lines,
    }
}

fn find_pending<S: KeyValueStore + ?Sized>(store: &S, id: &str) -> ClinicResult<ExaminationRecord> {
    pending_payments(store)
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ClinicError::NotFound(format!("unpaid prescription {}", id)))
}

/// Price the first pending record with `id`.
pub fn quote<S: KeyValueStore + ?Sized>(store: &S, id: &str) -> ClinicResult<PaymentQuote> {
    let record = find_pending(store, id)?;
    let catalog: Vec<Medicine> = Repository::new(store).load_collection(Slot::Medicines);
    Ok(quote_record(&record, &catalog))
}

/// Examination records still awaiting payment.
///
/// Ids repeat across visits, so each payment with a given id settles one
/// record with that id, oldest first.
pub fn pending_payments<S: KeyValueStore + ?Sized>(store: &S) -> Vec<ExaminationRecord> {
    let repo = Repository::new(store);
    let records: Vec<ExaminationRecord> = repo.load_collection(Slot::Examinations);
    let payments: Vec<PaymentRecord> = repo.load_collection(Slot::PaymentHistory);

    let mut settled: HashMap<&str, usize> = HashMap::new();
    for payment in &payments {
        *settled.entry(payment.id.as_str()).or_default() += 1;
    }

    records
        .into_iter()
        .filter(|record| match settled.get_mut(record.id.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

/// Completed payments, oldest first.
pub fn payment_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<PaymentRecord> {
    Repository::new(store).load_collection(Slot::PaymentHistory)
}

/// Record payment for the first pending record with `id`.
pub fn complete_payment<S: KeyValueStore + ?Sized>(store: &S, id: &str) -> ClinicResult<PaymentRecord> {
    let quote = quote(store, id)?;
    let record = PaymentRecord::new(quote.id, quote.patient, quote.total);

    let repo = Repository::new(store);
    let mut history: Vec<PaymentRecord> = repo.load_collection(Slot::PaymentHistory);
    history.push(record.clone());
    repo.save_collection(Slot::PaymentHistory, &history)?;

    info!(id = %record.id, total = record.total, "payment recorded");
    Ok(record)
}

/// Format an amount the way the cashier screen shows it, e.g. `Rp 95.000`.
///
/// Amounts are rounded to whole Rupiah.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Plain-text receipt for a quote.
pub fn receipt(quote: &PaymentQuote) -> String {
    let mut out = String::new();
    out.push_str("KLINIK SENTOSA\n");
    out.push_str(&format!("No. {}\n", quote.id));
    out.push_str(&format!("Pasien: {}\n", quote.patient));
    out.push_str("----------------------------------------\n");
    for line in &quote.lines {
        match &line.medicine_name {
            Some(name) => out.push_str(&format!(
                "{} x{} @ {} = {}\n",
                name,
                line.quantity,
                format_rupiah(line.unit_price),
                format_rupiah(line.subtotal)
            )),
            None => out.push_str(&format!("{} (tidak tersedia)\n", line.line)),
        }
    }
    out.push_str("----------------------------------------\n");
    out.push_str(&format!("Total: {}\n", format_rupiah(quote.total)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn record(id: &str, prescription: &str) -> ExaminationRecord {
        ExaminationRecord {
            id: id.into(),
            patient_name: format!("Pasien {}", id),
            prescription: prescription.into(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Medicine> {
        let mut para = Medicine::new("OB001", "Paracetamol 500mg", "Analgesik", 3000.0, "Strip");
        para.stock = 150;
        let amox = Medicine::new("OB002", "Amoxicillin 500mg", "Antibiotik", 25000.0, "Strip");
        vec![para, amox]
    }

    fn store_with(records: &[ExaminationRecord]) -> MemoryStore {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        repo.save_collection(Slot::Medicines, &catalog()).unwrap();
        repo.save_collection(Slot::Examinations, records).unwrap();
        store
    }

    #[test]
    fn test_price_uses_parsed_quantity() {
        let quote = quote_record(&record("P001", "1. Paracetamol 500mg - 10 tablet"), &catalog());
        assert_eq!(quote.total, 30000.0);
        assert_eq!(quote.lines[0].quantity, 10);
        assert_eq!(quote.lines[0].unit_price, 3000.0);
    }

    #[test]
    fn test_sum_of_lines() {
        let quote = quote_record(
            &record("P001", "1. Paracetamol 500mg - 2 strip\n2. Amoxicillin 500mg - 3x1 sehari\n3. Jamu - 1 botol"),
            &catalog(),
        );
        assert_eq!(quote.lines.len(), 3);
        assert_eq!(quote.lines[1].subtotal, 75000.0);
        assert_eq!(quote.lines[2].subtotal, 0.0);
        assert_eq!(quote.total, 6000.0 + 75000.0);
    }

    #[test]
    fn test_default_quantity_is_one() {
        let quote = quote_record(&record("P001", "Amoxicillin"), &catalog());
        assert_eq!(quote.total, 25000.0);
    }

    #[test]
    fn test_complete_payment_appends_only() {
        let store = store_with(&[record("P001", "Paracetamol 500mg - 10 tablet")]);
        let before_exams = store.get("pemeriksaan").unwrap();
        let before_meds = store.get("medicines").unwrap();

        let payment = complete_payment(&store, "P001").unwrap();

        assert_eq!(payment.total, 30000.0);
        assert_eq!(payment.patient, "Pasien P001");
        assert_eq!(payment_history(&store).len(), 1);
        assert_eq!(store.get("pemeriksaan").unwrap(), before_exams);
        assert_eq!(store.get("medicines").unwrap(), before_meds);
    }

    #[test]
    fn test_pending_payments_per_visit() {
        let store = store_with(&[
            record("P001", "Paracetamol"),
            record("P002", "Antasida"),
            record("P001", "Amoxicillin"),
        ]);
        assert_eq!(pending_payments(&store).len(), 3);

        complete_payment(&store, "P001").unwrap();
        let pending: Vec<String> = pending_payments(&store)
            .into_iter()
            .map(|r| r.prescription)
            .collect();
        assert_eq!(pending, vec!["Antasida", "Amoxicillin"]);
    }

    #[test]
    fn test_repeat_visit_bills_unpaid_record() {
        let store = store_with(&[
            record("P001", "Paracetamol 500mg - 1 strip"),
            record("P001", "Amoxicillin 500mg - 2 strip"),
        ]);

        assert_eq!(complete_payment(&store, "P001").unwrap().total, 3000.0);
        assert_eq!(quote(&store, "P001").unwrap().total, 50000.0);
        assert_eq!(complete_payment(&store, "P001").unwrap().total, 50000.0);

        assert!(pending_payments(&store).is_empty());
        assert!(matches!(quote(&store, "P001"), Err(ClinicError::NotFound(_))));
        assert_eq!(payment_history(&store).len(), 2);
    }

    #[test]
    fn test_unknown_record() {
        let store = store_with(&[]);
        assert!(matches!(complete_payment(&store, "P001"), Err(ClinicError::NotFound(_))));
        assert!(payment_history(&store).is_empty());
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(95000.0), "Rp 95.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(2500.6), "Rp 2.501");
        assert_eq!(format_rupiah(-5000.0), "Rp -5.000");
    }

    #[test]
    fn test_receipt() {
        let quote = quote_record(&record("P001", "1. Paracetamol 500mg - 10 tablet\n2. Jamu"), &catalog());
        let text = receipt(&quote);
        assert!(text.contains("Pasien: Pasien P001"));
        assert!(text.contains("Paracetamol 500mg x10 @ Rp 3.000 = Rp 30.000"));
        assert!(text.contains("2. Jamu (tidak tersedia)"));
        assert!(text.ends_with("Total: Rp 30.000\n"));
    }
}
