//! Login and logout.
//!
//! There is no credential check: login records who is at the desk and which
//! role they chose, and the role gate does the rest.

use tracing::info;

use super::Route;
use crate::db::{KeyValueStore, Repository, Slot};
use crate::models::{builtin_landing, Role, Session, Settings};
use crate::workflow::{ClinicError, ClinicResult};

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    /// Screen to open first
    pub landing: Route,
}

/// Record a session and pick the landing screen.
///
/// All three fields are required. The landing screen comes from the
/// `defaultLanding` preference when it names a known screen, else the
/// built-in mapping; unrecognised roles land on the dashboard.
pub fn login<S: KeyValueStore + ?Sized>(store: &S, form: &LoginForm) -> ClinicResult<LoginOutcome> {
    let email = form.email.trim();
    let role = form.role.trim();
    if email.is_empty() || form.password.is_empty() || role.is_empty() {
        return Err(ClinicError::InvalidInput(
            "Mohon lengkapi semua field".to_string(),
        ));
    }

    let repo = Repository::new(store);
    let session = Session {
        email: email.to_string(),
        role: role.to_string(),
    };
    repo.save_value(Slot::User, &session)?;

    let landing = match session.role() {
        Some(role) => {
            let settings: Settings = repo.load_value(Slot::Settings).unwrap_or_default();
            settings
                .landing_for(role)
                .map(Route::from_path)
                .filter(|route| *route != Route::NotFound)
                .unwrap_or_else(|| Route::from_path(builtin_landing(role)))
        }
        None => Route::Dashboard,
    };

    info!(email = %session.email, role = %session.role, landing = landing.path(), "logged in");
    Ok(LoginOutcome { session, landing })
}

/// Clear the session.
pub fn logout<S: KeyValueStore + ?Sized>(store: &S) -> ClinicResult<()> {
    Repository::new(store).clear(Slot::User)?;
    info!("logged out");
    Ok(())
}

/// The stored session, if any. A corrupt record counts as logged out.
pub fn current_session<S: KeyValueStore + ?Sized>(store: &S) -> Option<Session> {
    Repository::new(store).load_value(Slot::User)
}

/// Role of the stored session, if recognised.
pub fn current_role<S: KeyValueStore + ?Sized>(store: &S) -> Option<Role> {
    current_session(store).and_then(|s| s.role())
}
