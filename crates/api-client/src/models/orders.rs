//! Service request, service and medicine wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An orderable clinical service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A medicine from the pharmacy catalogue.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// An order for an ancillary clinical service, attached to an appointment or
/// a treatment cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: Uuid,
    #[serde(default)]
    pub appointment_id: Option<Uuid>,
    #[serde(default)]
    pub treatment_cycle_id: Option<Uuid>,
    #[serde(default)]
    pub service_id: Option<Uuid>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
}

/// Payload for ordering a service.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequestRequest {
    pub service_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_cycle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_json;

    #[test]
    fn service_request_decodes_with_either_parent() {
        let request: ServiceRequest = decode_json(
            r#"{
                "id": "00000000-0000-0000-0000-000000000005",
                "treatmentCycleId": "00000000-0000-0000-0000-000000000002",
                "serviceName": "Semen analysis",
                "status": "Pending"
            }"#,
        )
        .expect("service request should decode");

        assert!(request.appointment_id.is_none());
        assert!(request.treatment_cycle_id.is_some());
        assert_eq!(request.service_name.as_deref(), Some("Semen analysis"));
    }

    #[test]
    fn create_request_omits_absent_parents() {
        let payload = CreateServiceRequestRequest {
            service_id: Uuid::nil(),
            appointment_id: None,
            treatment_cycle_id: None,
            notes: None,
        };
        let json = serde_json::to_string(&payload).expect("payload should serialize");
        assert!(!json.contains("appointmentId"));
        assert!(!json.contains("notes"));
    }
}
