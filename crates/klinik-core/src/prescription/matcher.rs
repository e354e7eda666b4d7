//! Catalog matching for prescription name fragments.
//!
//! Matching is bidirectional, case-insensitive substring containment: the
//! catalog name contains the fragment, or the fragment contains the catalog
//! name. The first catalog entry in stored order wins. When the full fragment
//! matches nothing, its first word is tried under the same rule.

use crate::models::Medicine;

/// Looks up name fragments in a medicine catalog.
pub struct CatalogMatcher<'a> {
    catalog: &'a [Medicine],
    /// Lower-cased catalog names, parallel to `catalog`
    names: Vec<String>,
}

impl<'a> CatalogMatcher<'a> {
    /// Create a matcher over a catalog snapshot.
    pub fn new(catalog: &'a [Medicine]) -> Self {
        Self {
            catalog,
            names: catalog.iter().map(|m| m.name.to_lowercase()).collect(),
        }
    }

    /// Index of the catalog entry matching `fragment`, if any.
    ///
    /// An empty fragment never matches.
    pub fn find(&self, fragment: &str) -> Option<usize> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return None;
        }

        self.find_containing(&fragment).or_else(|| {
            let first = fragment.split_whitespace().next()?;
            if first == fragment {
                return None;
            }
            self.find_containing(first)
        })
    }

    /// Closest catalog name by Jaro-Winkler similarity, for diagnostics.
    pub fn closest_name(&self, fragment: &str) -> Option<(&'a str, f64)> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return None;
        }

        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (index, strsim::jaro_winkler(&fragment, name)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(index, score)| (self.catalog[index].name.as_str(), score))
    }

    fn find_containing(&self, fragment: &str) -> Option<usize> {
        self.names.iter().position(|name| {
            !name.is_empty() && (name.contains(fragment) || fragment.contains(name.as_str()))
        })
    }
}
