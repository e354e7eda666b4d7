//! Picklist-driven prescription authoring.
//!
//! The examination screen can assemble a prescription from a fixed list of
//! medicines and dosages instead of typing it. The output is the same free
//! text a clinician would type, so downstream consumers cannot tell the two
//! apart.

use crate::models::Medicine;

/// Dosage choices offered by the picklist.
pub const DOSAGE_CHOICES: [&str; 3] = ["3x1 sehari", "2x1 sehari", "1x1 sehari"];

/// Medicine names offered by the picklist.
pub fn medicine_choices() -> Vec<String> {
    Medicine::templates().into_iter().map(|m| m.name).collect()
}

/// One picked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionItem {
    pub medicine: String,
    /// Free-text quantity, e.g. "10 tablet"
    pub quantity: String,
    pub dosage: String,
}

impl PrescriptionItem {
    fn render(&self, ordinal: usize) -> String {
        let mut line = format!("{}. {}", ordinal, self.medicine);
        for part in [&self.quantity, &self.dosage] {
            if !part.is_empty() {
                line.push_str(" - ");
                line.push_str(part);
            }
        }
        line
    }
}

/// Accumulates picked items and renders them as numbered lines.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionBuilder {
    items: Vec<PrescriptionItem>,
}

impl PrescriptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. A blank medicine name is ignored and returns false.
    pub fn add(&mut self, medicine: &str, quantity: &str, dosage: &str) -> bool {
        let medicine = medicine.trim();
        if medicine.is_empty() {
            return false;
        }
        self.items.push(PrescriptionItem {
            medicine: medicine.to_string(),
            quantity: quantity.trim().to_string(),
            dosage: dosage.trim().to_string(),
        });
        true
    }

    /// Render as `N. <medicine> - <quantity> - <dosage>` lines.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| item.render(i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prescription::parse_line;

    #[test]
    fn test_render_numbered_lines() {
        let mut builder = PrescriptionBuilder::new();
        assert!(builder.add("Paracetamol 500mg", "10 tablet", DOSAGE_CHOICES[0]));
        assert!(builder.add("Vitamin C 1000mg", "", DOSAGE_CHOICES[2]));

        assert_eq!(
            builder.render(),
            "1. Paracetamol 500mg - 10 tablet - 3x1 sehari\n2. Vitamin C 1000mg - 1x1 sehari"
        );
    }

    #[test]
    fn test_blank_medicine_rejected() {
        let mut builder = PrescriptionBuilder::new();
        assert!(!builder.add("  ", "1 strip", ""));
        assert_eq!(builder.render(), "");
    }

    #[test]
    fn test_rendered_lines_parse_back() {
        let mut builder = PrescriptionBuilder::new();
        builder.add("Antasida", "2 strip", "");
        let line = parse_line(&builder.render());
        assert_eq!(line.name_fragment, "antasida");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_choices() {
        assert_eq!(medicine_choices()[0], "Paracetamol 500mg");
        assert_eq!(DOSAGE_CHOICES.len(), 3);
    }
}
