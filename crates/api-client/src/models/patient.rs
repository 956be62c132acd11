//! Patient wire model.

use chrono::NaiveDate;
use ferticare_core::display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient as the backend returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Patient {
    /// The name to show on screen.
    ///
    /// Precedence: the backend's `fullName`, then the joined name parts, then
    /// the email address.
    pub fn display_name(&self) -> Option<String> {
        let joined = display::full_name(self.first_name.as_deref(), self.last_name.as_deref());
        display::resolve_display_name([
            self.full_name.as_deref(),
            joined.as_deref(),
            self.email.as_deref(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_json;

    fn patient(body: &str) -> Patient {
        decode_json(body).expect("patient should decode")
    }

    #[test]
    fn display_name_prefers_backend_full_name() {
        let p = patient(
            r#"{
                "id": "00000000-0000-0000-0000-000000000001",
                "fullName": "Lan T. Pham",
                "firstName": "Lan",
                "lastName": "Pham"
            }"#,
        );
        assert_eq!(p.display_name().as_deref(), Some("Lan T. Pham"));
    }

    #[test]
    fn display_name_falls_back_to_joined_parts_then_email() {
        let p = patient(
            r#"{
                "id": "00000000-0000-0000-0000-000000000001",
                "firstName": "Lan",
                "lastName": "Pham",
                "email": "lan@example.com"
            }"#,
        );
        assert_eq!(p.display_name().as_deref(), Some("Lan Pham"));

        let p = patient(
            r#"{"id": "00000000-0000-0000-0000-000000000001", "email": "lan@example.com"}"#,
        );
        assert_eq!(p.display_name().as_deref(), Some("lan@example.com"));
    }
}
