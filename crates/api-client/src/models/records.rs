//! Medical record and prescription wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medical record entry as the backend returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: Uuid,
    #[serde(default)]
    pub patient_id: Option<Uuid>,
    #[serde(default)]
    pub appointment_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Payload for authoring a medical record.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicalRecordRequest {
    pub patient_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<Uuid>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A prescription attached to a medical record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: Uuid,
    #[serde(default)]
    pub medical_record_id: Option<Uuid>,
    #[serde(default)]
    pub items: Vec<PrescriptionItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One prescribed medicine line.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItem {
    #[serde(default)]
    pub medicine_id: Option<Uuid>,
    #[serde(default)]
    pub medicine_name: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// One medicine line of a prescription being created.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItemRequest {
    pub medicine_id: Uuid,
    pub dosage: String,
    pub quantity: u32,
}

/// Payload for creating a prescription.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub medical_record_id: Uuid,
    pub items: Vec<PrescriptionItemRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_json;

    #[test]
    fn record_decodes_without_optional_fields() {
        let record: MedicalRecord =
            decode_json(r#"{"id": "00000000-0000-0000-0000-000000000003"}"#)
                .expect("bare record should decode");
        assert!(record.title.is_none());
        assert!(record.recorded_at.is_none());
    }

    #[test]
    fn prescription_items_default_to_empty() {
        let prescription: Prescription = decode_json(
            r#"{"id": "00000000-0000-0000-0000-000000000004", "notes": "after OPU"}"#,
        )
        .expect("prescription should decode");
        assert!(prescription.items.is_empty());
        assert_eq!(prescription.notes.as_deref(), Some("after OPU"));
    }
}
