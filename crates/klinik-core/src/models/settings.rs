//! Application preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::session::Role;

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Preferences stored in the `settings` slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    /// Landing route per role string
    #[serde(rename = "defaultLanding", default = "default_landing")]
    pub default_landing: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            default_landing: default_landing(),
        }
    }
}

impl Settings {
    /// Configured landing route for a role, if any.
    pub fn landing_for(&self, role: Role) -> Option<&str> {
        self.default_landing
            .get(role.as_str())
            .map(String::as_str)
            .filter(|path| !path.trim().is_empty())
    }
}

/// Built-in landing route for a role.
pub fn builtin_landing(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard",
        Role::Doctor => "/pemeriksaan",
        Role::Pharmacist => "/apotek",
        Role::Receptionist => "/pendaftaran",
        Role::Administration => "/pembayaran",
    }
}

fn default_landing() -> BTreeMap<String, String> {
    Role::ALL
        .into_iter()
        .map(|role| (role.as_str().to_string(), builtin_landing(role).to_string()))
        .collect()
}
