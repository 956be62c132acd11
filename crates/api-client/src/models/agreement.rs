//! Treatment agreement wire models.

use chrono::{DateTime, Utc};
use ferticare_core::agreement::{AgreementSignatures, SignerRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A treatment agreement as the backend returns it.
///
/// Cycle creation is gated by the backend on both signature flags being set;
/// this client only reads and signs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: Uuid,
    #[serde(default)]
    pub treatment_cycle_id: Option<Uuid>,
    #[serde(default)]
    pub doctor_signed: bool,
    #[serde(default)]
    pub patient_signed: bool,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Agreement {
    /// Bridge to the domain signature state.
    pub fn signatures(&self) -> AgreementSignatures {
        AgreementSignatures::new(self.doctor_signed, self.patient_signed)
    }
}

/// Payload for signing an agreement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignAgreementRequest {
    pub role: SignerRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_json;

    #[test]
    fn signature_flags_default_to_unsigned() {
        let agreement: Agreement =
            decode_json(r#"{"id": "00000000-0000-0000-0000-000000000006"}"#)
                .expect("bare agreement should decode");

        let signatures = agreement.signatures();
        assert!(!signatures.is_signed(SignerRole::Doctor));
        assert!(!signatures.is_fully_signed());
    }

    #[test]
    fn fully_signed_agreement_bridges_to_terminal_state() {
        let agreement: Agreement = decode_json(
            r#"{
                "id": "00000000-0000-0000-0000-000000000006",
                "doctorSigned": true,
                "patientSigned": true
            }"#,
        )
        .expect("agreement should decode");
        assert!(agreement.signatures().is_fully_signed());
    }

    #[test]
    fn sign_request_serializes_role_lowercase() {
        let json = serde_json::to_string(&SignAgreementRequest {
            role: SignerRole::Doctor,
        })
        .expect("request should serialize");
        assert_eq!(json, r#"{"role":"doctor"}"#);
    }
}
