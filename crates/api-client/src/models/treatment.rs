//! Treatment and treatment-cycle wire models.

use chrono::NaiveDate;
use ferticare_core::phases::PlannedPhase;
use ferticare_core::TreatmentType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a treatment cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CycleStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl CycleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CycleStatus::Planned => "Planned",
            CycleStatus::InProgress => "InProgress",
            CycleStatus::Completed => "Completed",
            CycleStatus::Cancelled => "Cancelled",
            CycleStatus::Other(status) => status,
        }
    }
}

impl From<String> for CycleStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Planned" => CycleStatus::Planned,
            "InProgress" => CycleStatus::InProgress,
            "Completed" => CycleStatus::Completed,
            "Cancelled" => CycleStatus::Cancelled,
            _ => CycleStatus::Other(s),
        }
    }
}

impl From<CycleStatus> for String {
    fn from(status: CycleStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl Default for CycleStatus {
    fn default() -> Self {
        CycleStatus::Other("Unknown".to_owned())
    }
}

impl std::fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A treatment offering (protocol plus pricing) as the backend returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub treatment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One patient's pass through a treatment protocol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentCycle {
    pub id: Uuid,
    #[serde(default)]
    pub patient_id: Option<Uuid>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub treatment_type: Option<String>,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub completed_steps: Vec<String>,
    #[serde(default)]
    pub status: CycleStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TreatmentCycle {
    /// The protocol this cycle runs, when the wire value names one this
    /// client knows.
    pub fn protocol(&self) -> Option<TreatmentType> {
        self.treatment_type
            .as_deref()
            .and_then(TreatmentType::from_wire)
    }
}

/// One phase of a submitted treatment plan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedPhaseRequest {
    pub step_id: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&PlannedPhase> for PlannedPhaseRequest {
    fn from(phase: &PlannedPhase) -> Self {
        Self {
            step_id: phase.step_id.to_owned(),
            label: phase.label.to_owned(),
            start_date: phase.start_date,
            end_date: phase.end_date,
        }
    }
}

/// Payload for creating a treatment plan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTreatmentPlanRequest {
    pub patient_id: Uuid,
    pub treatment_type: TreatmentType,
    pub start_date: NaiveDate,
    pub phases: Vec<PlannedPhaseRequest>,
}
