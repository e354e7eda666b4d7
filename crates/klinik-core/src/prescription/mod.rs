//! Prescription reconciliation against the medicine catalog.
//!
//! Pipeline: free text → lines → [`parse_line`] → [`CatalogMatcher`] → matched lines
//!
//! There is no structured link between a prescription and the catalog, so
//! this is a best-effort join. Unmatched lines are logged and carried along
//! with no medicine attached; callers skip them for stock and price purposes.

mod builder;
mod matcher;
mod parser;

pub use builder::*;
pub use matcher::*;
pub use parser::*;

use tracing::warn;

use crate::models::Medicine;

/// A parsed line and the catalog entry it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedLine {
    pub line: PrescriptionLine,
    /// Index into the catalog snapshot the line was matched against
    pub medicine_index: Option<usize>,
}

/// Split prescription text into lines and match each against `catalog`.
///
/// Blank lines are dropped; every other line yields exactly one entry, in
/// order.
pub fn reconcile(prescription: &str, catalog: &[Medicine]) -> Vec<MatchedLine> {
    let matcher = CatalogMatcher::new(catalog);

    prescription
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|raw| {
            let line = parse_line(raw);
            let medicine_index = matcher.find(&line.name_fragment);
            if medicine_index.is_none() {
                let closest = matcher.closest_name(&line.name_fragment);
                warn!(
                    line = %line.raw,
                    fragment = %line.name_fragment,
                    closest = closest.map(|(name, _)| name).unwrap_or(""),
                    similarity = closest.map(|(_, score)| score).unwrap_or(0.0),
                    "prescription line matched no catalog entry"
                );
            }
            MatchedLine {
                line,
                medicine_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Medicine> {
        let mut para = Medicine::new("OB001", "Paracetamol 500mg", "Analgesik", 3000.0, "Strip");
        para.stock = 150;
        let mut amox = Medicine::new("OB002", "Amoxicillin 500mg", "Antibiotik", 25000.0, "Strip");
        amox.stock = 8;
        vec![para, amox]
    }

    #[test]
    fn test_reconcile_mixed() {
        let text = "1. Paracetamol 500mg - 10 tablet\n\n2. Ibuprofen - 1 strip\n3. Amoxicillin - 12 kapsul";
        let lines = reconcile(text, &catalog());

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].medicine_index, Some(0));
        assert_eq!(lines[0].line.quantity, 10);
        assert_eq!(lines[1].medicine_index, None);
        assert_eq!(lines[2].medicine_index, Some(1));
        assert_eq!(lines[2].line.quantity, 12);
    }

    #[test]
    fn test_reconcile_empty() {
        assert!(reconcile("", &catalog()).is_empty());
        assert!(reconcile(" \n\t\n", &catalog()).is_empty());
    }

    #[test]
    fn test_reconcile_empty_catalog() {
        let lines = reconcile("Paracetamol - 1 strip", &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].medicine_index, None);
    }
}
