//! Sidebar navigation entries.

use super::Route;
use crate::models::Role;

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub route: Route,
    /// `None` means every role sees the entry
    roles: Option<&'static [Role]>,
}

/// Sidebar entries in display order.
///
/// Visibility is listed per entry and does not apply the admin bypass; it is
/// a navigation aid, not the gate. Data Pasien is shown to admin and doctors only,
/// although administration staff may open it directly.
pub const MENU: [MenuItem; 8] = [
    MenuItem { title: "Dashboard", route: Route::Dashboard, roles: None },
    MenuItem { title: "Pendaftaran", route: Route::Registration, roles: Some(&[Role::Receptionist, Role::Admin]) },
    MenuItem { title: "Pemeriksaan", route: Route::Examination, roles: Some(&[Role::Doctor, Role::Admin]) },
    MenuItem { title: "Apotek", route: Route::Pharmacy, roles: Some(&[Role::Pharmacist, Role::Admin]) },
    MenuItem { title: "Pembayaran", route: Route::Payment, roles: Some(&[Role::Administration, Role::Admin]) },
    MenuItem { title: "Data Pasien", route: Route::PatientDirectory, roles: Some(&[Role::Admin, Role::Doctor]) },
    MenuItem { title: "Data Obat", route: Route::MedicineDirectory, roles: Some(&[Role::Admin, Role::Pharmacist]) },
    MenuItem { title: "Pengaturan", route: Route::Settings, roles: Some(&[Role::Admin]) },
];

impl MenuItem {
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.map_or(true, |roles| roles.contains(&role))
    }
}

/// Entries visible to `role`.
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MENU.iter().copied().filter(|item| item.visible_to(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(role: Role) -> Vec<&'static str> {
        menu_for(role).into_iter().map(|item| item.title).collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(menu_for(Role::Admin).len(), MENU.len());
    }

    #[test]
    fn test_doctor_menu() {
        assert_eq!(titles(Role::Doctor), vec!["Dashboard", "Pemeriksaan", "Data Pasien"]);
    }

    #[test]
    fn test_patient_directory_entry_roles() {
        let entry = MENU.iter().find(|item| item.route == Route::PatientDirectory).unwrap();
        let visible: Vec<Role> = Role::ALL.into_iter().filter(|role| entry.visible_to(*role)).collect();
        assert_eq!(visible, vec![Role::Admin, Role::Doctor]);
    }

    #[test]
    fn test_administration_menu() {
        assert_eq!(titles(Role::Administration), vec!["Dashboard", "Pembayaran"]);
    }

    #[test]
    fn test_menu_never_offers_a_denied_route() {
        for role in Role::ALL {
            let session = crate::models::Session::new("x@y.z".into(), role);
            for item in menu_for(role) {
                assert_eq!(crate::auth::authorize(item.route, Some(&session)), crate::auth::Access::Granted);
            }
        }
    }
}
