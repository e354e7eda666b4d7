//! Role gate and screen routes.
//!
//! Every screen except login is gated by an allow-list of roles. `admin`
//! passes every gate. A request without a session, or with a role outside
//! the allow-list, is sent back to login with a notification.

mod menu;
mod session;

pub use menu::*;
pub use session::*;

use crate::models::{Role, Session};

/// Notification shown when a gate denies access.
pub const ACCESS_DENIED_MESSAGE: &str =
    "Akses ditolak: Anda tidak memiliki izin untuk halaman ini.";

/// Application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Registration,
    Examination,
    Pharmacy,
    Payment,
    PatientDirectory,
    MedicineDirectory,
    Settings,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::Dashboard,
        Route::Registration,
        Route::Examination,
        Route::Pharmacy,
        Route::Payment,
        Route::PatientDirectory,
        Route::MedicineDirectory,
        Route::Settings,
        Route::NotFound,
    ];

    /// URL path. The not-found screen has no path of its own.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
            Route::Registration => "/pendaftaran",
            Route::Examination => "/pemeriksaan",
            Route::Pharmacy => "/apotek",
            Route::Payment => "/pembayaran",
            Route::PatientDirectory => "/data-pasien",
            Route::MedicineDirectory => "/data-obat",
            Route::Settings => "/pengaturan",
            Route::NotFound => "*",
        }
    }

    /// Resolve a path. Unknown paths are the not-found screen.
    pub fn from_path(path: &str) -> Route {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let path = if path.is_empty() { "/" } else { path };

        Route::ALL
            .into_iter()
            .filter(|route| *route != Route::NotFound)
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Roles allowed in, or `None` for ungated screens.
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        use Role::*;
        match self {
            Route::Login | Route::NotFound => None,
            Route::Dashboard => Some(&[Admin, Doctor, Pharmacist, Receptionist, Administration]),
            Route::Registration => Some(&[Admin, Receptionist]),
            Route::Examination => Some(&[Admin, Doctor]),
            Route::Pharmacy => Some(&[Admin, Pharmacist]),
            Route::Payment => Some(&[Admin, Administration]),
            Route::PatientDirectory => Some(&[Admin, Administration, Doctor]),
            Route::MedicineDirectory => Some(&[Admin, Pharmacist]),
            Route::Settings => Some(&[Admin]),
        }
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied {
        redirect: Route,
        message: &'static str,
    },
}

impl Access {
    fn denied() -> Self {
        Access::Denied {
            redirect: Route::Login,
            message: ACCESS_DENIED_MESSAGE,
        }
    }
}

/// Check a raw role string against an allow-list.
///
/// No role → denied; `admin` → granted; otherwise allow-list membership.
pub fn is_authorized(role: Option<&str>, allowed: &[Role]) -> bool {
    let Some(role) = role.filter(|r| !r.is_empty()) else {
        return false;
    };
    if role == Role::Admin.as_str() {
        return true;
    }
    allowed.iter().any(|r| r.as_str() == role)
}

/// Gate a route for the current session.
pub fn authorize(route: Route, session: Option<&Session>) -> Access {
    match route.allowed_roles() {
        None => Access::Granted,
        Some(allowed) if is_authorized(session.map(|s| s.role.as_str()), allowed) => {
            Access::Granted
        }
        Some(_) => Access::denied(),
    }
}
