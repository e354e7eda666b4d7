//! Preferences and the clear-data action.

use tracing::info;

use crate::auth::Route;
use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{Role, Settings, Theme};

use super::{ClinicError, ClinicResult};

/// Prompt shown before clinical data is wiped.
pub const CLEAR_DATA_PROMPT: &str =
    "Hapus semua data pasien, resep, obat, dan pembayaran? Tindakan ini tidak bisa dibatalkan.";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Stored preferences, or the defaults when missing or corrupt.
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
    Repository::new(store)
        .load_value(Slot::Settings)
        .unwrap_or_default()
}

pub fn save_settings<S: KeyValueStore + ?Sized>(store: &S, settings: &Settings) -> ClinicResult<()> {
    Repository::new(store).save_value(Slot::Settings, settings)?;
    info!(theme = ?settings.theme, "settings saved");
    Ok(())
}

pub fn set_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> ClinicResult<Settings> {
    let mut settings = load_settings(store);
    settings.theme = theme;
    save_settings(store, &settings)?;
    Ok(settings)
}

/// Set the screen a role lands on after login. The path must name a known
/// screen other than login.
pub fn set_landing<S: KeyValueStore + ?Sized>(
    store: &S,
    role: Role,
    path: &str,
) -> ClinicResult<Settings> {
    let route = Route::from_path(path);
    if matches!(route, Route::NotFound | Route::Login) {
        return Err(ClinicError::InvalidInput(format!("unknown landing route {}", path)));
    }

    let mut settings = load_settings(store);
    settings
        .default_landing
        .insert(role.as_str().to_string(), route.path().to_string());
    save_settings(store, &settings)?;
    Ok(settings)
}

/// Remove every clinical collection after confirmation.
///
/// Settings and the session survive. Returns how many slots held data.
pub fn clear_all_data<S, C>(store: &S, confirm: &C) -> ClinicResult<usize>
where
    S: KeyValueStore + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(CLEAR_DATA_PROMPT) {
        return Err(ClinicError::Cancelled("clear all data".to_string()));
    }

    let repo = Repository::new(store);
    let mut removed = 0;
    for slot in Slot::CLINICAL_DATA {
        if repo.clear(slot)? {
            removed += 1;
        }
    }

    info!(removed, "clinical data cleared");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn populated() -> MemoryStore {
        MemoryStore::with_entries([
            ("patients", "[]"),
            ("pemeriksaan", "[]"),
            ("medicines", "[]"),
            ("riwayatPembayaran", "[]"),
            ("lastPatientId", "P004"),
            ("settings", r#"{"theme":"dark"}"#),
            ("user", r#"{"email":"a@b.c","role":"admin"}"#),
        ])
    }

    #[test]
    fn test_load_defaults() {
        assert_eq!(load_settings(&MemoryStore::new()), Settings::default());
        let corrupt = MemoryStore::with_entries([("settings", "[")]);
        assert_eq!(load_settings(&corrupt), Settings::default());
    }

    #[test]
    fn test_set_theme_persists() {
        let store = MemoryStore::new();
        set_theme(&store, Theme::Dark).unwrap();
        assert_eq!(load_settings(&store).theme, Theme::Dark);
    }

    #[test]
    fn test_set_landing() {
        let store = MemoryStore::new();
        let settings = set_landing(&store, Role::Doctor, "/data-pasien/").unwrap();
        assert_eq!(settings.landing_for(Role::Doctor), Some("/data-pasien"));
        assert_eq!(load_settings(&store), settings);

        assert!(matches!(
            set_landing(&store, Role::Doctor, "/laporan"),
            Err(ClinicError::InvalidInput(_))
        ));
        assert!(set_landing(&store, Role::Doctor, "/").is_err());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let store = populated();
        let err = clear_all_data(&store, &|_: &str| false).unwrap_err();
        assert!(matches!(err, ClinicError::Cancelled(_)));
        assert_eq!(store.get("lastPatientId").unwrap().as_deref(), Some("P004"));
        assert_eq!(store.get("patients").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_keeps_settings_and_session() {
        let store = populated();
        let removed = clear_all_data(&store, &|prompt: &str| prompt == CLEAR_DATA_PROMPT).unwrap();

        assert_eq!(removed, 5);
        for key in ["patients", "pemeriksaan", "medicines", "riwayatPembayaran"] {
            assert!(store.get(key).unwrap().is_none(), "{} should be removed", key);
        }
        assert!(store.get("settings").unwrap().is_some());
        assert!(store.get("user").unwrap().is_some());
        assert!(store.get("lastPatientId").unwrap().is_none());
    }
}
