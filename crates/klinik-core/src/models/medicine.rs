//! Medicine catalog models.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A single entry in the clinic's medicine catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Catalog code (e.g., "OB001")
    #[serde(default)]
    pub id: String,
    /// Product name including strength (e.g., "Paracetamol 500mg")
    #[serde(rename = "nama", default)]
    pub name: String,
    /// Therapeutic category (e.g., "Analgesik")
    #[serde(rename = "kategori", default)]
    pub category: String,
    /// Units on hand
    #[serde(rename = "stok", default, deserialize_with = "lenient::integer")]
    pub stock: i64,
    /// Price per unit in Rupiah
    #[serde(rename = "harga", default, deserialize_with = "lenient::decimal")]
    pub price: f64,
    /// Unit label (e.g., "Strip", "Botol")
    #[serde(rename = "satuan", default)]
    pub unit: String,
}

/// Stock level classification shown next to each medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// Below the low-stock threshold ("Menipis")
    Low,
    /// Below the limited threshold ("Terbatas")
    Limited,
    /// Enough on hand ("Aman")
    Safe,
}

impl StockStatus {
    /// Classify a stock level.
    pub fn classify(stock: i64, low_threshold: i64, limited_threshold: i64) -> Self {
        if stock < low_threshold {
            StockStatus::Low
        } else if stock < limited_threshold {
            StockStatus::Limited
        } else {
            StockStatus::Safe
        }
    }

    /// Display label in the clinic's language.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Low => "Menipis",
            StockStatus::Limited => "Terbatas",
            StockStatus::Safe => "Aman",
        }
    }
}

impl Medicine {
    /// Create a catalog entry.
    pub fn new(id: &str, name: &str, category: &str, price: f64, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            stock: 0,
            price,
            unit: unit.to_string(),
        }
    }

    /// The fixed picklist new catalog entries are created from.
    pub fn templates() -> Vec<Medicine> {
        vec![
            Medicine::new("OB001", "Paracetamol 500mg", "Analgesik", 3000.0, "Strip"),
            Medicine::new("OB002", "Amoxicillin 500mg", "Antibiotik", 25000.0, "Strip"),
            Medicine::new("OB003", "Vitamin C 1000mg", "Vitamin", 15000.0, "Botol"),
            Medicine::new("OB004", "Antasida", "Pencernaan", 5000.0, "Strip"),
            Medicine::new("OB005", "OBH Combi", "Batuk & Flu", 18000.0, "Botol"),
        ]
    }

    /// Case-insensitive match against name or category.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}
