//! Timeline projection — the ordered step view shared by the doctor screens.
//!
//! Projects a [`ResolvedSteps`] over the protocol catalogue into one row per
//! catalogue entry, each carrying a display status. Rows come out in
//! catalogue order and the projection is total: every catalogue entry yields
//! exactly one row regardless of how sparse the cycle data is.

use crate::catalog::TreatmentType;
use crate::steps::ResolvedSteps;
use serde::Serialize;

/// Display status of a single timeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    /// The domain status string used for badge lookup.
    pub fn as_status_str(self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "in-progress",
            StepStatus::Pending => "pending",
        }
    }
}

/// One rendered row of the treatment timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

/// Project resolved step state into ordered timeline rows.
///
/// The current step wins over a completed marking for the same id, so at most
/// one row is [`StepStatus::Current`].
pub fn project_timeline(treatment: TreatmentType, resolved: &ResolvedSteps) -> Vec<TimelineRow> {
    treatment
        .catalog()
        .iter()
        .map(|entry| {
            let status = if resolved.current_step == Some(entry.id) {
                StepStatus::Current
            } else if resolved.is_completed(entry.id) {
                StepStatus::Completed
            } else {
                StepStatus::Pending
            };

            TimelineRow {
                id: entry.id,
                label: entry.label,
                description: entry.description,
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::resolve_steps;

    #[test]
    fn ivf_opu_scenario_projects_expected_statuses() {
        let resolved = resolve_steps(TreatmentType::Ivf, Some("step4_opu"), &[], None);
        let rows = project_timeline(TreatmentType::Ivf, &resolved);

        let statuses: Vec<(&str, StepStatus)> =
            rows.iter().map(|row| (row.id, row.status)).collect();
        assert_eq!(
            statuses,
            vec![
                ("step0_pre_cycle_prep", StepStatus::Completed),
                ("step1_stimulation", StepStatus::Completed),
                ("step4_opu", StepStatus::Current),
                ("step5_fertilization_culture", StepStatus::Pending),
                ("step6_embryo_transfer", StepStatus::Pending),
                ("step7_pregnancy_test", StepStatus::Pending),
            ]
        );
    }

    #[test]
    fn at_most_one_row_is_current() {
        let stored = vec!["step2_insemination".to_owned()];
        let resolved = resolve_steps(TreatmentType::Iui, Some("step2_insemination"), &stored, None);
        let rows = project_timeline(TreatmentType::Iui, &resolved);

        let current_count = rows
            .iter()
            .filter(|row| row.status == StepStatus::Current)
            .count();
        assert_eq!(current_count, 1);
    }

    #[test]
    fn empty_cycle_state_renders_all_pending() {
        let resolved = resolve_steps(TreatmentType::Iui, None, &[], None);
        let rows = project_timeline(TreatmentType::Iui, &resolved);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.status == StepStatus::Pending));
    }
}
