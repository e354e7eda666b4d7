//! Patient models.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient;

/// Biological sex as recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sex {
    /// Stored as "L" (laki-laki)
    #[default]
    Male,
    /// Stored as "P" (perempuan)
    Female,
}

impl Sex {
    /// Storage code.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "L",
            Sex::Female => "P",
        }
    }

    /// Parse a storage code or a spelled-out value. Unknown values fall back to male,
    /// which is the registration form's default selection.
    pub fn parse(s: &str) -> Sex {
        match s.trim().to_lowercase().as_str() {
            "p" | "f" | "female" | "perempuan" => Sex::Female,
            _ => Sex::Male,
        }
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient::string_or_number(deserializer)?;
        Ok(Sex::parse(&raw))
    }
}

/// A registered patient waiting in the examination queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Clinic id, `P` followed by a zero-padded counter
    #[serde(default)]
    pub id: String,
    /// Full name
    #[serde(rename = "nama", default)]
    pub name: String,
    /// Age in years, as entered in the form
    #[serde(rename = "umur", default, deserialize_with = "lenient::string_or_number")]
    pub age: String,
    #[serde(rename = "jenisKelamin", default)]
    pub sex: Sex,
    #[serde(rename = "noTelp", default)]
    pub phone: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
    /// Presenting complaint
    #[serde(rename = "keluhan", default)]
    pub complaint: String,
    /// Registration timestamp (RFC 3339)
    #[serde(rename = "terakhirKunjungan", default)]
    pub last_visit: String,
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub sex: Sex,
    pub phone: String,
    pub address: String,
    pub complaint: String,
}

impl RegistrationForm {
    /// Names of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("age", &self.age),
            ("phone", &self.phone),
            ("address", &self.address),
            ("complaint", &self.complaint),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

impl Patient {
    /// Create a patient from a registration form, stamped now.
    pub fn from_form(id: String, form: &RegistrationForm) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            age: form.age.trim().to_string(),
            sex: form.sex,
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            complaint: form.complaint.trim().to_string(),
            last_visit: chrono::Utc::now().to_rfc3339(),
        }
    }
}
