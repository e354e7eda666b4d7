//! Prescription line parser.
//!
//! A line looks like `1. Paracetamol 500mg - 10 tablet - 3x1 sehari`:
//! - an optional ordinal marker (`1.`)
//! - the name fragment, up to the first `-`
//! - everything after it, which carries the quantity and instructions

use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("ordinal regex"));

/// "3x1", "2 x 10"
static TIMES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*x\s*(\d+)").expect("times regex"));

/// "x10"
static BARE_TIMES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)x\s*(\d+)").expect("bare times regex"));

/// "10 tablet", "2botol"
static WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(strip|botol|tablet|tabs|kapsul|pcs)").expect("unit regex")
});

/// Quantity used when no pattern matches.
pub const DEFAULT_QUANTITY: i64 = 1;

/// One parsed prescription line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionLine {
    /// The line as written (trimmed)
    pub raw: String,
    /// Lower-cased medicine name fragment
    pub name_fragment: String,
    /// Text after the first hyphen, trimmed
    pub instructions: String,
    /// Quantity billed for this line
    pub quantity: i64,
}

/// Parse one line. Total: every input produces a line, possibly with an
/// empty name fragment and the default quantity.
pub fn parse_line(line: &str) -> PrescriptionLine {
    let raw = line.trim();
    let body = strip_ordinal(raw);

    let (name, rest) = match body.split_once('-') {
        Some((name, rest)) => (name, rest),
        None => (body, ""),
    };

    PrescriptionLine {
        raw: raw.to_string(),
        name_fragment: name.trim().to_lowercase(),
        instructions: rest.trim().to_string(),
        quantity: extract_quantity(rest)
            .or_else(|| extract_quantity(body))
            .unwrap_or(DEFAULT_QUANTITY),
    }
}

/// Drop a leading `N.` marker.
pub fn strip_ordinal(line: &str) -> &str {
    match ORDINAL.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Apply the quantity patterns in precedence order.
///
/// The first pattern that matches decides; if its digits do not fit an
/// `i64`, the quantity is [`DEFAULT_QUANTITY`].
pub fn extract_quantity(text: &str) -> Option<i64> {
    [&*TIMES, &*BARE_TIMES, &*WITH_UNIT]
        .into_iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(DEFAULT_QUANTITY))
}
